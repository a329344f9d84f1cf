//! Application settings and configuration

use crate::chat::ids::{IdGenerator, IdStrategy, DEFAULT_ID_LENGTH};
use crate::chat::message::{Message, SenderId};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Application settings
///
/// Settings are stored in JSON format. Missing fields fall back to their
/// defaults, so an older or hand-written file keeps loading.
///
/// # Example
/// ```rust,no_run
/// use parley::chat::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// settings.refocus_delay_ms = 250;
/// settings.save("settings.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sender id of the local user
    pub self_sender_id: String,
    /// Display name of the local user
    pub self_display_name: String,
    /// Seed each new conversation with a greeting
    pub seed_greeting: bool,
    /// Greeting text
    pub greeting_text: String,
    /// Sender id of the greeting's author
    pub greeting_sender_id: String,
    /// Display name of the greeting's author
    pub greeting_sender_name: String,
    /// Delay before focus returns to the input after picking an emoji
    pub refocus_delay_ms: u64,
    /// Message id generation strategy
    pub id_strategy: IdStrategy,
    /// Length of random message ids
    pub id_length: usize,
    /// JSON file with the contact directory (built-in sample if unset)
    pub contacts_path: Option<String>,
    /// Log file for the terminal frontend (logging disabled if unset)
    pub log_path: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if file doesn't exist
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a JSON file, creating parent directories
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// The local user's sender id
    pub fn self_sender(&self) -> SenderId {
        SenderId::new(self.self_sender_id.clone())
    }

    /// Refocus delay as a [`Duration`]
    pub fn refocus_delay(&self) -> Duration {
        Duration::from_millis(self.refocus_delay_ms)
    }

    /// Build the configured id generator
    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        self.id_strategy.build(self.id_length)
    }

    /// Initial content for a newly opened conversation
    pub fn initial_messages(&self, ids: &dyn IdGenerator, now: DateTime<Utc>) -> Vec<Message> {
        if !self.seed_greeting {
            return Vec::new();
        }

        let greeting = Message::new(
            ids.next_id(),
            self.greeting_text.clone(),
            now,
            SenderId::new(self.greeting_sender_id.clone()),
        )
        .with_sender_name(self.greeting_sender_name.clone());

        vec![greeting]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            self_sender_id: "1".to_string(),
            self_display_name: "You".to_string(),
            seed_greeting: true,
            greeting_text: "Hello! How can I help you today?".to_string(),
            greeting_sender_id: "2".to_string(),
            greeting_sender_name: "Support".to_string(),
            refocus_delay_ms: 100,
            id_strategy: IdStrategy::Random,
            id_length: DEFAULT_ID_LENGTH,
            contacts_path: None,
            log_path: None,
        }
    }
}
