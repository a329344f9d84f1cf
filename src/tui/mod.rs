//! TUI (Terminal User Interface) module
//!
//! This module contains the terminal frontend: navigation between the
//! contact list and a conversation, screen state, and rendering. The chat
//! state itself lives in [`crate::chat`].

pub mod types;
pub mod screens;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::{Screen, UiEvent};
pub use screens::*;
pub use app::App;
