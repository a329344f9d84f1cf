//! Parley TUI (Terminal User Interface)
//!
//! A terminal frontend for the Parley chat demo: a searchable contact list
//! and a conversation screen with an emoji picker.
//!
//! Usage: `parley-tui [settings.json]`

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use parley::chat::Settings;
use parley::tui::{App, Screen, ui::ui};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;

const DEFAULT_SETTINGS_PATH: &str = "parley_settings.json";

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path))?;

    if let Some(log_path) = &settings.log_path {
        parley::init_with_log_file(log_path)?;
    }

    // Deferred UI tasks run here while the main thread owns the terminal
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let mut app = App::new_with_settings(settings, runtime.handle().clone())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Conversations are in-memory only
    app.close_chat();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Apply refocus requests from deferred tasks before drawing
        app.drain_ui_events();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.current_screen {
        Screen::ContactList => {
            match key.code {
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Down => {
                    app.next();
                }
                KeyCode::Up => {
                    app.previous();
                }
                KeyCode::Enter => {
                    app.open_selected_chat();
                }
                KeyCode::Backspace => {
                    app.search_backspace();
                }
                KeyCode::Char(c) => {
                    app.search_push(c);
                }
                _ => {}
            }
        }
        Screen::Chat => {
            let picking = app
                .chat_screen
                .as_ref()
                .map(|screen| screen.composer.picker_visible() && !screen.input_focused)
                .unwrap_or(false);

            match key.code {
                KeyCode::Esc => {
                    app.close_chat();
                }
                KeyCode::Tab => {
                    app.toggle_picker();
                }
                KeyCode::PageUp => {
                    if let Some(screen) = &mut app.chat_screen {
                        screen.scroll_up();
                    }
                }
                KeyCode::PageDown => {
                    if let Some(screen) = &mut app.chat_screen {
                        screen.scroll_down();
                    }
                }
                KeyCode::Right | KeyCode::Down if picking => {
                    if let Some(screen) = &mut app.chat_screen {
                        screen.picker_next();
                    }
                }
                KeyCode::Left | KeyCode::Up if picking => {
                    if let Some(screen) = &mut app.chat_screen {
                        screen.picker_previous();
                    }
                }
                KeyCode::Enter if picking => {
                    app.select_emoji();
                }
                KeyCode::Enter => {
                    app.send_message();
                }
                KeyCode::Backspace => {
                    app.backspace();
                }
                KeyCode::Char(c) => {
                    app.type_char(c);
                }
                _ => {}
            }
        }
    }
}
