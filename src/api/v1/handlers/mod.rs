pub mod comments;
pub mod health;
pub mod memos;
