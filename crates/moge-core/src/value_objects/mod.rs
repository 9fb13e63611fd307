//! Value objects - immutable types that represent domain concepts

mod comment_kind;
mod entity_id;
mod toggle;

pub use comment_kind::CommentKind;
pub use entity_id::{EntityId, EntityIdParseError};
pub use toggle::{ReactionKey, ReactionSubject, ToggleAction, ToggleState, Transition};
