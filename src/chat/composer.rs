//! Outbound message composition
//!
//! [`Composer`] is an immutable snapshot of the text being written and of
//! the emoji picker's visibility. Each operation returns a new snapshot.
//! Operations that need something from the UI (dismissing the keyboard,
//! putting focus back into the text field) return a [`ComposerEffect`]
//! instead of performing it, so the composer never waits on the UI.

use crate::chat::ids::IdGenerator;
use crate::chat::message::{Message, SenderId};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Emoji offered by the picker, in display order
pub const EMOJI_PALETTE: &[&str] = &[
    "😊", "😂", "😍", "👍", "🙏", "🎉", "😢", "😮", "🔥", "👋", "🤔", "❤️",
];

/// A UI request emitted by a composer transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerEffect {
    /// Hide any on-screen keyboard (fire-and-forget)
    DismissKeyboard,
    /// Return focus to the text field once `after` has elapsed
    RefocusInput {
        /// Delay before the refocus request runs
        after: Duration,
    },
}

/// In-progress outbound text and emoji picker visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    buffer: String,
    picker_visible: bool,
}

impl Composer {
    /// Empty buffer, picker hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Current unsent text
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the emoji picker is shown
    pub fn picker_visible(&self) -> bool {
        self.picker_visible
    }

    /// Append a typed fragment at the end of the buffer
    ///
    /// Picker visibility is left as it was.
    pub fn insert_text(&self, fragment: &str) -> Self {
        let mut buffer = String::with_capacity(self.buffer.len() + fragment.len());
        buffer.push_str(&self.buffer);
        buffer.push_str(fragment);
        Self {
            buffer,
            picker_visible: self.picker_visible,
        }
    }

    /// Append a picked emoji, hide the picker, and ask for input refocus
    ///
    /// The emoji is always appended at the tail of the buffer. The buffer
    /// change is immediate; the returned effect is for the caller to
    /// schedule.
    pub fn select_emoji(&self, emoji: &str, refocus_after: Duration) -> (Self, ComposerEffect) {
        let mut next = self.insert_text(emoji);
        next.picker_visible = false;
        (next, ComposerEffect::RefocusInput { after: refocus_after })
    }

    /// Show or hide the emoji picker
    ///
    /// Showing the picker first asks for the keyboard to be dismissed,
    /// since the two are never visible together.
    pub fn toggle_picker(&self) -> (Self, Option<ComposerEffect>) {
        let next = Self {
            buffer: self.buffer.clone(),
            picker_visible: !self.picker_visible,
        };
        let effect = next.picker_visible.then_some(ComposerEffect::DismissKeyboard);
        (next, effect)
    }

    /// Remove the last character of the buffer
    pub fn backspace(&self) -> Self {
        let mut buffer = self.buffer.clone();
        buffer.pop();
        Self {
            buffer,
            picker_visible: self.picker_visible,
        }
    }

    /// Whether `submit` would produce a message
    pub fn can_submit(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Turn the buffer into an outbound message
    ///
    /// Blank input (empty or whitespace only) is ignored: the same state
    /// comes back with no message. Otherwise the message carries the buffer
    /// exactly as typed, a fresh id from `ids`, the time from `now`, and
    /// `self_sender` as author; the composer is reset.
    pub fn submit<F>(
        &self,
        self_sender: &SenderId,
        ids: &dyn IdGenerator,
        now: F,
    ) -> (Self, Option<Message>)
    where
        F: FnOnce() -> DateTime<Utc>,
    {
        if !self.can_submit() {
            return (self.clone(), None);
        }

        let message = Message::new(ids.next_id(), self.buffer.clone(), now(), self_sender.clone());
        (Self::new(), Some(message))
    }
}
