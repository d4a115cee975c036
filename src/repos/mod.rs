pub mod comment_repo;
pub mod error;
pub mod memo_repo;
