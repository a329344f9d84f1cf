// UI Tests - Testing UI helper functions

use crate::chat::{Contact, ContactDirectory, Message, MessageId, SenderId, Settings};
use crate::tui::App;
use crate::tui::ui::{format_timestamp, sender_label, ui, visible_messages};
use chrono::{Local, TimeZone, Utc};
use ratatui::{backend::TestBackend, Terminal};
use tokio::runtime::Runtime;

fn msg(id: &str, sender: &str) -> Message {
    Message::new(MessageId::new(id), id, Utc::now(), SenderId::new(sender))
}

#[test]
fn test_format_timestamp_uses_local_time() {
    let at = Utc.with_ymd_and_hms(2024, 3, 10, 14, 5, 0).unwrap();

    let expected = at.with_timezone(&Local).format("%H:%M").to_string();
    assert_eq!(format_timestamp(at), expected);
    assert_eq!(format_timestamp(at).len(), 5);
}

#[test]
fn test_sender_label() {
    let me = SenderId::new("1");

    assert_eq!(sender_label(&msg("a", "1"), &me, "You"), "You");
    assert_eq!(
        sender_label(&msg("b", "2").with_sender_name("Support"), &me, "You"),
        "Support"
    );
    assert_eq!(sender_label(&msg("c", "42"), &me, "You"), "42");
}

#[test]
fn test_visible_messages_oldest_on_top() {
    let newest_first = vec![msg("m4", "1"), msg("m3", "1"), msg("m2", "1"), msg("m1", "1")];

    let window = visible_messages(newest_first.iter(), 0, 3);
    let ids: Vec<&str> = window.iter().map(|m| m.id().as_str()).collect();
    assert_eq!(ids, vec!["m2", "m3", "m4"]);

    let scrolled = visible_messages(newest_first.iter(), 2, 3);
    let ids: Vec<&str> = scrolled.iter().map(|m| m.id().as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2"]);
}

fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("Failed to create terminal");
    terminal.draw(|f| ui(f, app)).expect("Failed to draw");

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer.get(x, y).symbol()).collect())
        .collect()
}

#[test]
fn test_chat_view_keeps_newest_message_visible_after_long_greeting() {
    let rt = Runtime::new().expect("Failed to create runtime");
    let mut settings = Settings::default();
    settings.greeting_text = "long greeting ".repeat(22);
    let directory = ContactDirectory::new(vec![Contact::new("1", "Alice")]).expect("Failed to build directory");
    let mut app = App::with_directory(settings, directory, rt.handle().clone());

    app.open_selected_chat();
    for c in "NEWEST".chars() {
        app.type_char(c);
    }
    app.send_message();
    assert_eq!(app.chat_screen.as_ref().unwrap().log.len(), 2);

    let rows = render_rows(&app, 40, 24);

    let greeting_row = rows.iter().position(|row| row.contains("Support: long greeting"));
    let newest_row = rows.iter().position(|row| row.contains("You: NEWEST"));
    let (greeting_row, newest_row) = match (greeting_row, newest_row) {
        (Some(g), Some(n)) => (g, n),
        _ => panic!("both messages should be on screen:\n{}", rows.join("\n")),
    };
    assert!(greeting_row < newest_row, "newest message belongs at the bottom");
}
