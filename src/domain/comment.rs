use serde::{Deserialize, Serialize};

use crate::domain::types::{CommentId, CommentText};

/// Reply attached to a top-level [`Comment`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    pub id: CommentId,
    pub text: CommentText,
}

/// Top-level comment on a listing item with its replies in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub text: CommentText,
    pub replies: Vec<Reply>,
}

impl Comment {
    pub fn new(id: CommentId, text: CommentText) -> Self {
        Self {
            id,
            text,
            replies: Vec::new(),
        }
    }
}
