//! Core types for TUI screens and navigation

use crate::schedule::ScreenId;

/// Application screens
///
/// Navigation is a two-level stack: the contact list is the root and a
/// conversation is pushed on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Searchable contact directory (initial screen)
    ContactList,
    /// Conversation with one contact
    Chat,
}

/// Events delivered to the UI loop from deferred tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Put keyboard focus back into the message input of `screen`
    RefocusInput {
        /// Conversation screen instance that asked for it
        screen: ScreenId,
    },
}
