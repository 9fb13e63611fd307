//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod boards;
pub mod comments;
pub mod follows;
pub mod health;
pub mod users;
