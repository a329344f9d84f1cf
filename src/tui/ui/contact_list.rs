//! Contact list screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::tui::app::App;

/// Renders the screen

pub fn render_contact_list(f: &mut Frame, app: &App) {
    let size = f.size();
    let screen = &app.contact_list_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Search bar
            Constraint::Min(5),     // Contacts
            Constraint::Length(3),  // Status/Help
        ])
        .split(size);

    let rows = app.directory.rows(&screen.search);

    // Title
    let title = Paragraph::new(format!("Contacts ({} of {})", rows.len(), app.directory.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    // Search bar
    let search_line = if screen.search.is_empty() {
        Line::from(Span::styled("Search...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(screen.search.as_str(), Style::default().fg(Color::Yellow)))
    };
    let search = Paragraph::new(search_line)
        .block(Block::default().borders(Borders::ALL).title("🔍 Search"));
    f.render_widget(search, chunks[1]);

    // Contacts
    if rows.is_empty() {
        let empty_msg = Paragraph::new("No contacts match your search.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Contacts"));
        f.render_widget(empty_msg, chunks[2]);
    } else {
        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let contact = row.contact;
                let selected = row.position == screen.selected_index;

                let marker = if selected {
                    Span::styled("→ ", Style::default().fg(Color::Cyan))
                } else {
                    Span::raw("  ")
                };
                let presence = if contact.is_online {
                    Span::styled("● ", Style::default().fg(Color::Green))
                } else {
                    Span::raw("  ")
                };
                let name_style = if selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };

                let lines = vec![
                    Line::from(vec![
                        marker,
                        presence,
                        Span::styled(contact.username.as_str(), name_style),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(contact.preview(), Style::default().fg(Color::Gray)),
                    ]),
                ];

                // Alternate shading follows the filtered position
                let item = ListItem::new(lines);
                if row.is_alternate() {
                    item.style(Style::default().bg(Color::Rgb(40, 40, 40)))
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Contacts (● Online)"),
        );
        f.render_widget(list, chunks[2]);
    }

    // Status/Help
    let help_text = screen
        .status_message
        .clone()
        .unwrap_or_else(|| "Type: Search | ↑↓: Navigate | Enter: Open chat | Esc: Quit".to_string());
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
