//! Screen state structures for TUI

use crate::chat::{
    Composer, ComposerEffect, Contact, ConversationLog, IdGenerator, Message, SenderId,
    EMOJI_PALETTE,
};
use crate::schedule::{ScreenId, ScreenLifetime};
use crate::tui::types::UiEvent;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Contact List screen state
#[derive(Debug, Default)]
pub struct ContactListScreen {
    /// Live search term
    pub search: String,
    /// Selected row within the filtered result
    pub selected_index: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl ContactListScreen {
    /// Create new contact list screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search term
    ///
    /// The selection jumps back to the first row, since the filtered result
    /// it pointed into has changed.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.selected_index = 0;
    }

    /// Add character to the search term
    pub fn add_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search);
        term.push(c);
        self.set_search(term);
    }

    /// Remove last character from the search term
    pub fn backspace(&mut self) {
        let mut term = std::mem::take(&mut self.search);
        term.pop();
        self.set_search(term);
    }

    /// Move to next row
    pub fn next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_index = (self.selected_index + 1) % row_count;
        }
    }

    /// Move to previous row
    pub fn previous(&mut self, row_count: usize) {
        if row_count > 0 {
            if self.selected_index > 0 && self.selected_index < row_count {
                self.selected_index -= 1;
            } else {
                self.selected_index = row_count - 1;
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Chat screen state
///
/// Owns the conversation log and composer for one opened conversation.
/// Both are discarded when the screen closes.
#[derive(Debug)]
pub struct ChatScreen {
    /// Contact we're chatting with
    pub contact: Contact,
    /// Messages, newest first
    pub log: ConversationLog,
    /// Outbound text and picker state
    pub composer: Composer,
    /// Whether the message input has keyboard focus
    pub input_focused: bool,
    /// Highlighted emoji in the picker
    pub picker_index: usize,
    /// Number of newest messages scrolled past
    pub scroll_offset: usize,
    /// Status message
    pub status_message: Option<String>,
    lifetime: ScreenLifetime,
}

impl ChatScreen {
    /// Open a conversation seeded with `initial` (display order)
    pub fn new(contact: Contact, initial: Vec<Message>, runtime: Handle) -> Self {
        Self {
            contact,
            log: ConversationLog::with_initial(initial),
            composer: Composer::new(),
            input_focused: true,
            picker_index: 0,
            scroll_offset: 0,
            status_message: None,
            lifetime: ScreenLifetime::new(runtime),
        }
    }

    /// Id of this screen instance
    pub fn id(&self) -> ScreenId {
        self.lifetime.id()
    }

    /// Whether the screen is still open
    pub fn is_open(&self) -> bool {
        self.lifetime.is_active()
    }

    /// Number of deferred tasks not yet run
    pub fn pending_tasks(&self) -> usize {
        self.lifetime.pending()
    }

    /// Type one character into the composer
    pub fn add_char(&mut self, c: char) {
        let mut fragment = [0u8; 4];
        self.composer = self.composer.insert_text(c.encode_utf8(&mut fragment));
        self.input_focused = true;
    }

    /// Remove last character from the composer
    pub fn backspace(&mut self) {
        self.composer = self.composer.backspace();
    }

    /// Show or hide the emoji picker
    pub fn toggle_picker(&mut self, events: &UnboundedSender<UiEvent>) {
        let (composer, effect) = self.composer.toggle_picker();
        self.composer = composer;
        match effect {
            Some(effect) => self.apply_effect(effect, events),
            // Closing the picker hands focus back to the input
            None => self.refocus(),
        }
    }

    /// Highlight the next emoji
    pub fn picker_next(&mut self) {
        self.picker_index = (self.picker_index + 1) % EMOJI_PALETTE.len();
    }

    /// Highlight the previous emoji
    pub fn picker_previous(&mut self) {
        self.picker_index = self
            .picker_index
            .checked_sub(1)
            .unwrap_or(EMOJI_PALETTE.len() - 1);
    }

    /// Insert the highlighted emoji
    pub fn select_emoji(&mut self, refocus_after: Duration, events: &UnboundedSender<UiEvent>) {
        let emoji = EMOJI_PALETTE[self.picker_index % EMOJI_PALETTE.len()];
        let (composer, effect) = self.composer.select_emoji(emoji, refocus_after);
        self.composer = composer;
        self.apply_effect(effect, events);
    }

    /// Carry out a composer effect
    pub fn apply_effect(&mut self, effect: ComposerEffect, events: &UnboundedSender<UiEvent>) {
        match effect {
            ComposerEffect::DismissKeyboard => {
                self.input_focused = false;
            }
            ComposerEffect::RefocusInput { after } => {
                let screen = self.id();
                let events = events.clone();
                self.lifetime.schedule(after, move || {
                    if events.send(UiEvent::RefocusInput { screen }).is_err() {
                        debug!("UI loop gone, dropping refocus for {}", screen);
                    }
                });
            }
        }
    }

    /// Give keyboard focus back to the message input
    pub fn refocus(&mut self) {
        self.input_focused = true;
    }

    /// Submit the composer and append the result to the log
    ///
    /// Returns the appended message, or `None` for blank input. A generated
    /// id that already exists in the log is replaced once with a fresh one.
    pub fn send<F>(
        &mut self,
        self_sender: &SenderId,
        ids: &dyn IdGenerator,
        now: F,
    ) -> Result<Option<Message>>
    where
        F: FnOnce() -> DateTime<Utc>,
    {
        let (composer, message) = self.composer.submit(self_sender, ids, now);
        let Some(message) = message else {
            return Ok(None);
        };

        let message = match self.log.append_checked([message.clone()]) {
            Ok(log) => {
                self.log = log;
                message
            }
            Err(Error::DuplicateId(id)) => {
                warn!("Generated message id {} already in use, retrying", id);
                let retry = message.with_id(ids.next_id());
                self.log = self.log.append_checked([retry.clone()])?;
                retry
            }
            Err(e) => return Err(e),
        };

        self.composer = composer;
        self.scroll_offset = 0;
        Ok(Some(message))
    }

    /// Scroll towards older messages
    pub fn scroll_up(&mut self) {
        if self.scroll_offset + 1 < self.log.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll towards newer messages
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Close the screen, cancelling its deferred tasks
    pub fn close(&mut self) {
        self.lifetime.close();
    }
}
