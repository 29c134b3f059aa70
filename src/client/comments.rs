//! In-memory comment threads keyed by listing item.
//!
//! Threads live only for the lifetime of the client session. Every mutation
//! builds a new comment vector and swaps it into the map, so a thread handed
//! out earlier is never changed underneath its holder.

use std::collections::HashMap;

use chrono::Utc;

use crate::domain::comment::{Comment, Reply};
use crate::domain::types::{CommentId, CommentText, ItemId};

/// Millisecond clock that never hands out the same identifier twice.
#[derive(Debug, Default, Clone)]
pub struct IdClock {
    last: i64,
}

impl IdClock {
    /// Identifier for "now".
    pub fn next(&mut self) -> Option<CommentId> {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Identifier for the given millisecond timestamp, bumped past the last
    /// one issued when two land in the same millisecond.
    pub fn next_at(&mut self, millis: i64) -> Option<CommentId> {
        let value = millis.max(self.last + 1);
        let id = CommentId::new(value).ok()?;
        self.last = value;
        Some(id)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommentThreads {
    threads: HashMap<ItemId, Vec<Comment>>,
    clock: IdClock,
}

impl CommentThreads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comments for `item` in insertion order; empty when none were posted.
    pub fn thread(&self, item: ItemId) -> &[Comment] {
        self.threads.get(&item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a top-level comment. Blank text is ignored.
    pub fn add_comment(&mut self, item: ItemId, text: &str) -> Option<CommentId> {
        let text = CommentText::new(text).ok()?;
        let id = self.clock.next()?;

        let mut thread = self.thread(item).to_vec();
        thread.push(Comment::new(id, text));
        self.threads.insert(item, thread);
        Some(id)
    }

    /// Append a reply to comment `parent`. Blank text or an unknown parent is
    /// ignored.
    pub fn add_reply(&mut self, item: ItemId, parent: CommentId, text: &str) -> Option<CommentId> {
        let text = CommentText::new(text).ok()?;
        let mut thread = self.thread(item).to_vec();
        let comment = thread.iter_mut().find(|c| c.id == parent)?;

        let id = self.clock.next()?;
        comment.replies.push(Reply { id, text });
        self.threads.insert(item, thread);
        Some(id)
    }
}

/// Draft inputs of the comment section shown in the detail modal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommentDraft {
    pub new_comment: String,
    /// Comment whose reply box is open.
    pub reply_to: Option<CommentId>,
    pub reply_text: String,
}
