//! Newest-first conversation log
//!
//! The log is a persistent list of append batches. Appending allocates one
//! new segment pointing at the previous head, so older snapshots stay valid
//! and unchanged while sharing every message they already hold.

use crate::chat::message::{Message, MessageId};
use crate::{Error, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// One append batch plus a link to everything older
#[derive(Debug)]
struct Segment {
    batch: Arc<[Message]>,
    older: Option<Arc<Segment>>,
}

impl Drop for Segment {
    // Unlink iteratively; a long chain would otherwise recurse once per batch.
    fn drop(&mut self) {
        let mut next = self.older.take();
        while let Some(segment) = next {
            match Arc::try_unwrap(segment) {
                Ok(mut owned) => next = owned.older.take(),
                Err(_) => break,
            }
        }
    }
}

/// Ordered messages of one conversation, in display order (newest first)
///
/// Cloning is cheap and yields an independent snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    head: Option<Arc<Segment>>,
    len: usize,
}

impl ConversationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log seeded with initial content, given in display order
    pub fn with_initial(messages: impl IntoIterator<Item = Message>) -> Self {
        Self::new().append(messages)
    }

    /// Place a batch ahead of the existing entries
    ///
    /// The result holds `new_messages` (in their given order) followed by
    /// everything already in this log. No deduplication or timestamp
    /// ordering is applied, and `self` is left untouched.
    pub fn append(&self, new_messages: impl IntoIterator<Item = Message>) -> Self {
        let batch: Vec<Message> = new_messages.into_iter().collect();
        if batch.is_empty() {
            return self.clone();
        }

        let len = self.len + batch.len();
        Self {
            head: Some(Arc::new(Segment {
                batch: batch.into(),
                older: self.head.clone(),
            })),
            len,
        }
    }

    /// Append, refusing any message whose id is already taken
    ///
    /// Fails with [`Error::DuplicateId`] if an incoming id exists in the log
    /// or appears twice in the batch. On failure nothing is appended.
    pub fn append_checked(&self, new_messages: impl IntoIterator<Item = Message>) -> Result<Self> {
        let batch: Vec<Message> = new_messages.into_iter().collect();

        let mut seen: HashSet<&MessageId> = self.iter().map(Message::id).collect();
        for message in &batch {
            if !seen.insert(message.id()) {
                return Err(Error::DuplicateId(message.id().to_string()));
            }
        }

        Ok(self.append(batch))
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the log holds no messages
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Newest message
    pub fn first(&self) -> Option<&Message> {
        self.head.as_ref().and_then(|segment| segment.batch.first())
    }

    /// Message at a display position (0 is the newest)
    pub fn get(&self, index: usize) -> Option<&Message> {
        if index >= self.len {
            return None;
        }

        let mut offset = index;
        let mut segment = self.head.as_deref();
        while let Some(current) = segment {
            if offset < current.batch.len() {
                return current.batch.get(offset);
            }
            offset -= current.batch.len();
            segment = current.older.as_deref();
        }
        None
    }

    /// Whether a message with this id is present
    pub fn contains_id(&self, id: &MessageId) -> bool {
        self.iter().any(|message| message.id() == id)
    }

    /// Iterate in display order (newest first)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            segment: self.head.as_deref(),
            index: 0,
            remaining: self.len,
        }
    }
}

impl PartialEq for ConversationLog {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for ConversationLog {}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Display-order iterator over a [`ConversationLog`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    segment: Option<&'a Segment>,
    index: usize,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Message;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let segment = self.segment?;
            if let Some(message) = segment.batch.get(self.index) {
                self.index += 1;
                self.remaining -= 1;
                return Some(message);
            }
            self.segment = segment.older.as_deref();
            self.index = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
