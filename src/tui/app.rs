//! Main TUI application state and logic

use crate::chat::{Contact, ContactDirectory, IdGenerator, Settings};
use crate::delivery::{deliver, Delivery, DeliveryOutcome, LocalOnly};
use crate::tui::screens::*;
use crate::tui::types::{Screen, UiEvent};
use chrono::Utc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Should quit
    pub should_quit: bool,
    /// Loaded settings
    pub settings: Settings,
    /// Contacts shown on the listing screen
    pub directory: ContactDirectory,
    /// Contact list screen (always present, root of navigation)
    pub contact_list_screen: ContactListScreen,
    /// Chat screen (when a conversation is open)
    pub chat_screen: Option<ChatScreen>,
    ids: Arc<dyn IdGenerator>,
    delivery: Box<dyn Delivery>,
    runtime: Handle,
    events_tx: UnboundedSender<UiEvent>,
    events_rx: UnboundedReceiver<UiEvent>,
}

impl App {
    /// Create new application from settings
    ///
    /// Contacts come from `settings.contacts_path` when set, otherwise the
    /// built-in sample directory is used. Deferred UI tasks run on
    /// `runtime`.
    pub fn new_with_settings(settings: Settings, runtime: Handle) -> anyhow::Result<Self> {
        let directory = match &settings.contacts_path {
            Some(path) => ContactDirectory::load(path)?,
            None => ContactDirectory::sample(),
        };

        Ok(Self::with_directory(settings, directory, runtime))
    }

    /// Create new application with an explicit contact directory
    pub fn with_directory(settings: Settings, directory: ContactDirectory, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let ids = settings.id_generator();

        tracing::info!(
            "Starting with {} contacts, id strategy {:?}",
            directory.len(),
            settings.id_strategy
        );

        Self {
            current_screen: Screen::ContactList,
            should_quit: false,
            settings,
            directory,
            contact_list_screen: ContactListScreen::new(),
            chat_screen: None,
            ids,
            delivery: Box::new(LocalOnly),
            runtime,
            events_tx,
            events_rx,
        }
    }

    /// Replace the delivery backend
    pub fn with_delivery(mut self, delivery: Box<dyn Delivery>) -> Self {
        self.delivery = delivery;
        self
    }

    /// Contacts matching the current search term
    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.directory.filter(&self.contact_list_screen.search)
    }

    /// Replace the search term
    pub fn update_search(&mut self, term: &str) {
        self.contact_list_screen.set_search(term);
    }

    /// Add character to the search term
    pub fn search_push(&mut self, c: char) {
        self.contact_list_screen.add_char(c);
    }

    /// Remove last character from the search term
    pub fn search_backspace(&mut self) {
        self.contact_list_screen.backspace();
    }

    /// Move to next contact
    pub fn next(&mut self) {
        let count = self.filtered_contacts().len();
        self.contact_list_screen.next(count);
    }

    /// Move to previous contact
    pub fn previous(&mut self) {
        let count = self.filtered_contacts().len();
        self.contact_list_screen.previous(count);
    }

    /// Currently selected contact in the filtered listing
    pub fn selected_contact(&self) -> Option<&Contact> {
        self.filtered_contacts()
            .get(self.contact_list_screen.selected_index)
            .copied()
    }

    /// Open the conversation with the selected contact
    pub fn open_selected_chat(&mut self) {
        let Some(contact) = self.selected_contact().cloned() else {
            self.contact_list_screen
                .set_status("No contact matches the search".to_string());
            return;
        };
        self.open_chat(contact);
    }

    /// Open a conversation with `contact`, replacing any open one
    pub fn open_chat(&mut self, contact: Contact) {
        self.close_chat();

        let initial = self.settings.initial_messages(self.ids.as_ref(), Utc::now());
        let screen = ChatScreen::new(contact, initial, self.runtime.clone());
        tracing::info!(
            "Opened chat with {} ({}) as {}",
            screen.contact.username,
            screen.contact.id,
            screen.id()
        );

        self.contact_list_screen.clear_status();
        self.chat_screen = Some(screen);
        self.current_screen = Screen::Chat;
    }

    /// Close the open conversation and go back to the contact list
    pub fn close_chat(&mut self) {
        if let Some(mut screen) = self.chat_screen.take() {
            screen.close();
            tracing::info!(
                "Closed chat with {} ({} messages discarded)",
                screen.contact.id,
                screen.log.len()
            );
        }
        self.current_screen = Screen::ContactList;
    }

    /// Type one character into the message input
    pub fn type_char(&mut self, c: char) {
        if let Some(screen) = &mut self.chat_screen {
            screen.add_char(c);
        }
    }

    /// Remove last character from the message input
    pub fn backspace(&mut self) {
        if let Some(screen) = &mut self.chat_screen {
            screen.backspace();
        }
    }

    /// Show or hide the emoji picker
    pub fn toggle_picker(&mut self) {
        if let Some(screen) = &mut self.chat_screen {
            screen.toggle_picker(&self.events_tx);
        }
    }

    /// Insert the highlighted emoji and schedule input refocus
    pub fn select_emoji(&mut self) {
        let delay = self.settings.refocus_delay();
        if let Some(screen) = &mut self.chat_screen {
            screen.select_emoji(delay, &self.events_tx);
        }
    }

    /// Submit the message input of the open conversation
    ///
    /// Blank input is ignored. Returns the delivery outcome of the sent
    /// message, if one was sent and delivery succeeded.
    pub fn send_message(&mut self) -> Option<DeliveryOutcome> {
        let screen = self.chat_screen.as_mut()?;
        let self_sender = self.settings.self_sender();

        let message = match screen.send(&self_sender, self.ids.as_ref(), Utc::now) {
            Ok(Some(message)) => message,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Failed to append message: {}", e);
                screen.set_status(format!("Error: {}", e));
                return None;
            }
        };

        tracing::debug!(
            "Appended message {} to chat with {} (log length {})",
            message.id(),
            screen.contact.id,
            screen.log.len()
        );

        let outcome = deliver(self.delivery.as_ref(), &message);
        if outcome.is_none() {
            screen.set_status("Message kept locally; delivery failed".to_string());
        }
        outcome
    }

    /// Apply one event from a deferred task
    ///
    /// Events for a conversation that is no longer open are dropped.
    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::RefocusInput { screen } => match &mut self.chat_screen {
                Some(chat) if chat.id() == screen => chat.refocus(),
                _ => tracing::debug!("Dropped stale refocus for {}", screen),
            },
        }
    }

    /// Apply every event queued by deferred tasks, returning how many
    pub fn drain_ui_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_ui_event(event);
            handled += 1;
        }
        handled
    }

    /// Sender half of the UI event channel
    pub fn ui_events(&self) -> UnboundedSender<UiEvent> {
        self.events_tx.clone()
    }
}
