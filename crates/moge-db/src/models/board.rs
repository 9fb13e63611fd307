//! Board and quiz database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for boards table
#[derive(Debug, Clone, FromRow)]
pub struct BoardModel {
    pub id: i64,
    pub author_id: i64,
    pub category_id: i64,
    pub title: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Board listing row aggregated with category, quiz and like counts
#[derive(Debug, Clone, FromRow)]
pub struct BoardSummaryModel {
    pub board_id: i64,
    pub title: String,
    pub category_name: String,
    pub quiz_count: i64,
    pub view_count: i64,
    pub like_count: i64,
}

/// Database model for quizzes table
#[derive(Debug, Clone, FromRow)]
pub struct QuizModel {
    pub id: i64,
    pub board_id: i64,
    pub question: String,
    pub quiz_type: String,
    pub created_at: DateTime<Utc>,
}
