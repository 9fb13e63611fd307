//! Board entity - a quiz post and its quizzes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::EntityId;

/// Board entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: EntityId,
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub title: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Check if the given user wrote this board
    #[inline]
    pub fn is_authored_by(&self, user_id: EntityId) -> bool {
        self.author_id == user_id
    }
}

/// Values needed to insert a board
#[derive(Debug, Clone)]
pub struct NewBoard {
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub title: String,
}

/// Aggregated listing row used by rankings and per-user board lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSummary {
    pub board_id: EntityId,
    pub title: String,
    pub category_name: String,
    pub quiz_count: i64,
    pub view_count: i64,
    pub like_count: i64,
}

/// Answer format of a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    MultipleChoice,
    ShortAnswer,
}

impl QuizType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::ShortAnswer => "short_answer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "multiple_choice" => Some(Self::MultipleChoice),
            "short_answer" => Some(Self::ShortAnswer),
            _ => None,
        }
    }
}

/// Quiz entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: EntityId,
    pub board_id: EntityId,
    pub question: String,
    pub quiz_type: QuizType,
    pub created_at: DateTime<Utc>,
}

/// Values needed to insert a quiz
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub board_id: EntityId,
    pub question: String,
    pub quiz_type: QuizType,
}
