//! UI rendering module - screen-specific rendering functions
//!
//! Each screen has its own file.

mod contact_list;
mod chat_view;
mod helpers;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use contact_list::render_contact_list;
pub use chat_view::render_chat_view;

// Re-export helper functions
pub use helpers::{format_timestamp, sender_label, visible_messages};

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::ContactList => render_contact_list(f, app),
        Screen::Chat => render_chat_view(f, app),
    }
}
