//! Entity to model mappers
//!
//! This module provides conversions between domain entities (moge-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod board;
mod comment;
mod toggle;
mod user;

pub use board::QuizInsert;
pub use comment::CommentInsert;
pub use user::UserInsert;
