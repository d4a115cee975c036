/*
 * Responsibility
 * - StoreClient implementation against the remote REST store
 *   - rows:      /rest/v1/{table}  (equality filters, single-column order)
 *   - identity:  /auth/v1/user     (token-in, {id, email}-out)
 * - every request carries the anon key; scoped accessors additionally swap
 *   the caller's bearer token into Authorization
 */
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::services::store::{
    AccessorFactory, Filter, Identity, Order, StoreClient, StoreError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpStoreFactory {
    client: Client,
    config: Option<StoreConfig>,
    // The anonymous accessor is shared; scoped ones are built per request.
    anonymous: Option<Arc<HttpStore>>,
}

impl HttpStoreFactory {
    pub fn new(config: Option<StoreConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let anonymous = config.as_ref().map(|cfg| {
            Arc::new(HttpStore {
                client: client.clone(),
                config: cfg.clone(),
                bearer: None,
            })
        });

        Ok(Self {
            client,
            config,
            anonymous,
        })
    }
}

impl AccessorFactory for HttpStoreFactory {
    fn anonymous(&self) -> Result<Arc<dyn StoreClient>, StoreError> {
        match &self.anonymous {
            Some(store) => Ok(store.clone() as Arc<dyn StoreClient>),
            None => Err(StoreError::Unconfigured),
        }
    }

    fn scoped(&self, token: &str) -> Result<Arc<dyn StoreClient>, StoreError> {
        let config = self.config.as_ref().ok_or(StoreError::Unconfigured)?;

        Ok(Arc::new(HttpStore {
            client: self.client.clone(),
            config: config.clone(),
            bearer: Some(token.to_string()),
        }))
    }
}

pub struct HttpStore {
    client: Client,
    config: StoreConfig,
    bearer: Option<String>,
}

impl HttpStore {
    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        // Unscoped access authenticates as the anon key itself.
        let bearer = self.bearer.as_deref().unwrap_or(&self.config.anon_key);
        req.header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    fn filter_pairs(filters: &[Filter]) -> Vec<(String, String)> {
        filters
            .iter()
            .map(|f| {
                let value = match &f.value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (f.column.to_string(), format!("eq.{}", value))
            })
            .collect()
    }

    async fn rows_from(&self, resp: reqwest::Response) -> Result<Vec<Value>, StoreError> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(upstream_error(status, body));
        }

        let rows: Vec<Value> = serde_json::from_str(&body)?;
        Ok(rows)
    }
}

fn upstream_error(status: StatusCode, body: String) -> StoreError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        StoreError::Auth(body)
    } else {
        StoreError::Upstream {
            status: status.as_u16(),
            message: body,
        }
    }
}

#[async_trait]
impl StoreClient for HttpStore {
    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreError> {
        let resp = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await?;

        let rows = self.rows_from(resp).await?;
        rows.into_iter().next().ok_or(StoreError::Upstream {
            status: 200,
            message: "insert returned no representation".to_string(),
        })
    }

    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<Order>,
    ) -> Result<Vec<Value>, StoreError> {
        let mut query = Self::filter_pairs(filters);
        query.push(("select".to_string(), "*".to_string()));
        if let Some(order) = order {
            let dir = if order.ascending { "asc" } else { "desc" };
            query.push(("order".to_string(), format!("{}.{}", order.column, dir)));
        }

        let resp = self
            .authed(self.client.get(self.table_url(table)))
            .query(&query)
            .send()
            .await?;

        self.rows_from(resp).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let resp = self
            .authed(self.client.delete(self.table_url(table)))
            .header("Prefer", "return=representation")
            .query(&Self::filter_pairs(filters))
            .send()
            .await?;

        let rows = self.rows_from(resp).await?;
        Ok(rows.len() as u64)
    }

    async fn resolve_identity(&self) -> Result<Identity, StoreError> {
        let resp = self
            .authed(self.client.get(format!("{}/auth/v1/user", self.config.base_url)))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            // Expired, malformed and revoked tokens all land here.
            return Err(StoreError::Auth(body));
        }

        let identity: Identity = serde_json::from_str(&body)?;
        Ok(identity)
    }
}
