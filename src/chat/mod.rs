//! Chat state module
//!
//! This module holds the in-memory state behind the two chat screens:
//! - `contact` - Contact records and the read-only, searchable directory
//! - `message` - Message structure and sender identities
//! - `conversation` - Newest-first conversation log with structural sharing
//! - `composer` - Outbound text buffer and emoji picker state
//! - `ids` - Pluggable message id generation
//! - `settings` - Application settings and configuration
//!
//! Every state type here is an immutable snapshot: transitions return a new
//! value and leave the old one untouched for any other holder.

// Submodules
pub mod composer;
pub mod contact;
pub mod conversation;
pub mod ids;
pub mod message;
pub mod settings;

// Re-export commonly used types
pub use composer::{Composer, ComposerEffect, EMOJI_PALETTE};
pub use contact::{Contact, ContactDirectory, ContactRow};
pub use conversation::ConversationLog;
pub use ids::{IdGenerator, IdStrategy, RandomIds, SequentialIds};
pub use message::{Message, MessageId, SenderId};
pub use settings::Settings;
