//! UI helper functions

use crate::chat::{Message, SenderId};
use chrono::{DateTime, Local, Utc};

/// Format a message timestamp as local wall-clock time
pub fn format_timestamp(created_at: DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Label shown before a message's text
pub fn sender_label(message: &Message, self_sender: &SenderId, self_name: &str) -> String {
    if message.is_from(self_sender) {
        self_name.to_string()
    } else {
        message
            .sender_name()
            .map(str::to_string)
            .unwrap_or_else(|| message.sender_id().to_string())
    }
}

/// Messages to draw, oldest at the top
///
/// Skips the `scroll_offset` newest entries and keeps at most `height`.
pub fn visible_messages<'a>(
    newest_first: impl Iterator<Item = &'a Message>,
    scroll_offset: usize,
    height: usize,
) -> Vec<&'a Message> {
    let mut window: Vec<&Message> = newest_first.skip(scroll_offset).take(height).collect();
    window.reverse();
    window
}
