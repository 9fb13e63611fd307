//! Position of a comment within its group

use serde::{Deserialize, Serialize};

/// Whether a comment opens a group or replies inside one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    TopLevel,
    Reply,
}

impl CommentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLevel => "top_level",
            Self::Reply => "reply",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top_level" => Some(Self::TopLevel),
            "reply" => Some(Self::Reply),
            _ => None,
        }
    }

    #[inline]
    pub fn is_reply(self) -> bool {
        matches!(self, Self::Reply)
    }
}
