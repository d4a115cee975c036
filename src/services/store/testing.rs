//! In-memory store double for tests: rows live in a table map, credentials
//! in a token → identity registry. Select supports the same equality
//! filters and single-column ordering the real store does.

use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::services::store::{
    AccessorFactory, Filter, Identity, Order, StoreClient, StoreError,
};

#[derive(Default)]
struct Inner {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    tokens: Mutex<HashMap<String, Identity>>,
    next_id: AtomicI64,
}

/// Factory + backing storage in one. Clone the `Arc` freely; all accessors
/// share the same tables.
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Inner>,
    unconfigured: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory behaving as if STORE_URL was never provided.
    pub fn unconfigured() -> Self {
        Self {
            inner: Arc::default(),
            unconfigured: true,
        }
    }

    /// Register a valid token and return the identity it resolves to.
    pub fn register_token(&self, token: &str) -> Identity {
        let identity = Identity {
            id: Uuid::new_v4(),
            email: format!("{token}@example.com"),
        };
        self.inner
            .tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), identity.clone());
        identity
    }

    /// Raw row count, for asserting that a rejected request mutated nothing.
    pub fn row_count(&self, table: &str) -> usize {
        self.inner
            .tables
            .lock()
            .unwrap()
            .get(table)
            .map_or(0, Vec::len)
    }
}

impl AccessorFactory for MemStore {
    fn anonymous(&self) -> Result<Arc<dyn StoreClient>, StoreError> {
        if self.unconfigured {
            return Err(StoreError::Unconfigured);
        }
        Ok(Arc::new(MemAccessor {
            inner: self.inner.clone(),
            token: None,
        }))
    }

    fn scoped(&self, token: &str) -> Result<Arc<dyn StoreClient>, StoreError> {
        if self.unconfigured {
            return Err(StoreError::Unconfigured);
        }
        Ok(Arc::new(MemAccessor {
            inner: self.inner.clone(),
            token: Some(token.to_string()),
        }))
    }
}

struct MemAccessor {
    inner: Arc<Inner>,
    token: Option<String>,
}

fn matches(row: &Value, filters: &[Filter]) -> bool {
    filters.iter().all(|f| row.get(f.column) == Some(&f.value))
}

// i64 ids and RFC3339 timestamps both order correctly under this.
fn compare(a: &Value, b: &Value) -> CmpOrdering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(CmpOrdering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => CmpOrdering::Equal,
    }
}

#[async_trait]
impl StoreClient for MemAccessor {
    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreError> {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut row = record;
        row["id"] = json!(id);

        let mut tables = self.inner.tables.lock().unwrap();
        tables.entry(table.to_string()).or_default().push(row.clone());
        Ok(row)
    }

    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<Order>,
    ) -> Result<Vec<Value>, StoreError> {
        let tables = self.inner.tables.lock().unwrap();
        let mut rows: Vec<Value> = tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| matches(r, filters)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = order {
            rows.sort_by(|a, b| {
                let cmp = compare(&a[order.column], &b[order.column]);
                if order.ascending { cmp } else { cmp.reverse() }
            });
        }
        Ok(rows)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let mut tables = self.inner.tables.lock().unwrap();
        let Some(rows) = tables.get_mut(table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|r| !matches(r, filters));
        Ok((before - rows.len()) as u64)
    }

    async fn resolve_identity(&self) -> Result<Identity, StoreError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| StoreError::Auth("no credential".to_string()))?;
        self.inner
            .tokens
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| StoreError::Auth("unknown or revoked token".to_string()))
    }
}
