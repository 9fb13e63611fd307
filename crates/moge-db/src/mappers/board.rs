//! Board and quiz entity <-> model mappers

use moge_core::entities::{Board, BoardSummary, NewQuiz, Quiz, QuizType};
use moge_core::value_objects::EntityId;

use crate::models::{BoardModel, BoardSummaryModel, QuizModel};

impl From<BoardModel> for Board {
    fn from(model: BoardModel) -> Self {
        Board {
            id: EntityId::new(model.id),
            author_id: EntityId::new(model.author_id),
            category_id: EntityId::new(model.category_id),
            title: model.title,
            view_count: model.view_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<BoardSummaryModel> for BoardSummary {
    fn from(model: BoardSummaryModel) -> Self {
        BoardSummary {
            board_id: EntityId::new(model.board_id),
            title: model.title,
            category_name: model.category_name,
            quiz_count: model.quiz_count,
            view_count: model.view_count,
            like_count: model.like_count,
        }
    }
}

/// Convert QuizModel to Quiz entity
impl From<QuizModel> for Quiz {
    fn from(model: QuizModel) -> Self {
        Quiz {
            id: EntityId::new(model.id),
            board_id: EntityId::new(model.board_id),
            question: model.question,
            // CHECK constraint keeps the column within the known values
            quiz_type: QuizType::parse(&model.quiz_type).unwrap_or(QuizType::ShortAnswer),
            created_at: model.created_at,
        }
    }
}

/// Values for inserting a quiz row
pub struct QuizInsert<'a> {
    pub board_id: i64,
    pub question: &'a str,
    pub quiz_type: &'static str,
}

impl<'a> QuizInsert<'a> {
    pub fn new(quiz: &'a NewQuiz) -> Self {
        Self {
            board_id: quiz.board_id.into_inner(),
            question: &quiz.question,
            quiz_type: quiz.quiz_type.as_str(),
        }
    }
}
