//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, path ids, and paging.

mod auth;
mod page;
mod path;
mod validated;

pub use auth::AuthUser;
pub use page::Page;
pub use path::{BoardCommentPath, BoardIdPath, IdPath, UserIdPath};
pub use validated::ValidatedJson;
