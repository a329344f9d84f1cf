//! Chat view screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::chat::EMOJI_PALETTE;
use crate::tui::app::App;
use crate::tui::ui::helpers::{format_timestamp, sender_label, visible_messages};

/// Renders the screen

pub fn render_chat_view(f: &mut Frame, app: &App) {
    let size = f.size();

    let Some(screen) = &app.chat_screen else {
        return;
    };
    let picker_visible = screen.composer.picker_visible();

    let mut constraints = vec![
        Constraint::Length(3),  // Title
        Constraint::Min(5),     // Message history
        Constraint::Length(3),  // Input box
    ];
    if picker_visible {
        constraints.push(Constraint::Length(3));  // Emoji picker
    }
    constraints.push(Constraint::Length(3));  // Status/Help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(constraints)
        .split(size);

    // Title
    let presence = if screen.contact.is_online { " ●" } else { "" };
    let title = Paragraph::new(format!("Chat with {}{}", screen.contact.username, presence))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Message history, newest at the bottom
    if screen.log.is_empty() {
        let empty_msg = Paragraph::new("No messages yet. Type a message below and press Enter to send.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Messages"));
        f.render_widget(empty_msg, chunks[1]);
    } else {
        let self_sender = app.settings.self_sender();
        let visible_height = chunks[1].height.saturating_sub(2) as usize;
        let window = visible_messages(screen.log.iter(), screen.scroll_offset, visible_height);

        let message_lines: Vec<Line> = window
            .iter()
            .map(|msg| {
                let is_from_me = msg.is_from(&self_sender);
                let sender_color = if is_from_me { Color::Green } else { Color::Blue };
                let label = sender_label(msg, &self_sender, &app.settings.self_display_name);

                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", format_timestamp(msg.created_at())),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{}: ", label),
                        Style::default().fg(sender_color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(msg.text(), Style::default().fg(Color::White)),
                ])
            })
            .collect();

        // One row per message; wrapping would push the newest rows out of view
        let messages_widget = Paragraph::new(message_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Messages ({})", screen.log.len())),
            );
        f.render_widget(messages_widget, chunks[1]);
    }

    // Input box
    let input_style = if screen.input_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let send_hint = if screen.composer.can_submit() { "Enter ➤ send" } else { "Type a message..." };
    let input_widget = Paragraph::new(screen.composer.buffer())
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(send_hint));
    f.render_widget(input_widget, chunks[2]);

    let mut next_chunk = 3;

    // Emoji picker
    if picker_visible {
        let spans: Vec<Span> = EMOJI_PALETTE
            .iter()
            .enumerate()
            .map(|(i, emoji)| {
                if i == screen.picker_index {
                    Span::styled(
                        format!("[{}]", emoji),
                        Style::default().bg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(format!(" {} ", emoji))
                }
            })
            .collect();
        let picker = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Emoji (←→ choose, Enter insert)"));
        f.render_widget(picker, chunks[next_chunk]);
        next_chunk += 1;
    }

    // Status/Help
    let help_text = if let Some(status) = &screen.status_message {
        status.clone()
    } else {
        "Enter: Send | Tab: Emoji | PgUp/PgDn: Scroll | Esc: Back to Contacts".to_string()
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[next_chunk]);
}
