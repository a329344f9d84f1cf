//! Contact records and the searchable contact directory

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Preview shown for contacts without a recent message
pub const NO_RECENT_MESSAGE: &str = "No recent message";

/// Represents a contact in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique, stable identifier
    pub id: String,
    /// Display name, also the search key
    pub username: String,
    /// Preview of the last message exchanged, if any
    #[serde(default, alias = "message", alias = "lastMessage")]
    pub last_message: Option<String>,
    /// Presence flag
    #[serde(default, alias = "isOnline")]
    pub is_online: bool,
}

impl Contact {
    /// Create a new contact with no recent message, offline
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            last_message: None,
            is_online: false,
        }
    }

    /// Set the last-message preview
    pub fn with_last_message(mut self, text: impl Into<String>) -> Self {
        self.last_message = Some(text.into());
        self
    }

    /// Set the presence flag
    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Preview text for the listing screen
    pub fn preview(&self) -> &str {
        self.last_message.as_deref().unwrap_or(NO_RECENT_MESSAGE)
    }

    /// Case-insensitive substring match on the username
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.username.to_lowercase().contains(needle)
    }
}

/// One row of a filtered contact listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRow<'a> {
    /// Position within the filtered result
    pub position: usize,
    /// The matching contact
    pub contact: &'a Contact,
}

impl ContactRow<'_> {
    /// Whether this row gets the alternate background
    ///
    /// Derived from the position in the filtered result, so narrowing the
    /// search changes which rows alternate.
    pub fn is_alternate(&self) -> bool {
        self.position % 2 == 1
    }
}

/// Read-only, ordered set of contacts
///
/// Cloning shares the underlying contacts.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Arc<[Contact]>,
}

impl ContactDirectory {
    /// Build a directory, rejecting repeated contact ids
    pub fn new(contacts: Vec<Contact>) -> Result<Self> {
        let mut seen = HashSet::new();
        for contact in &contacts {
            if !seen.insert(contact.id.as_str()) {
                return Err(Error::DuplicateId(contact.id.clone()));
            }
        }

        Ok(Self {
            contacts: contacts.into(),
        })
    }

    /// Parse a JSON array of contacts
    pub fn from_json(json: &str) -> Result<Self> {
        let contacts: Vec<Contact> = serde_json::from_str(json)?;
        Self::new(contacts)
    }

    /// Load a JSON array of contacts from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read contacts from {}: {}", path.display(), e)))?;
        let directory = Self::from_json(&data)?;

        tracing::debug!("Loaded {} contacts from {}", directory.len(), path.display());
        Ok(directory)
    }

    /// Built-in demo directory
    pub fn sample() -> Self {
        let contacts = vec![
            Contact::new("1", "Alice")
                .with_last_message("See you tomorrow!")
                .online(true),
            Contact::new("2", "Bob").with_last_message("Thanks for the help"),
            Contact::new("3", "Julia")
                .with_last_message("Did you get my photos?")
                .online(true),
            Contact::new("4", "Marcus"),
            Contact::new("5", "alison").with_last_message("lol"),
            Contact::new("6", "Priya")
                .with_last_message("Meeting moved to 3pm")
                .online(true),
            Contact::new("7", "Tom"),
            Contact::new("8", "Juan").with_last_message("Call me when you can"),
        ];

        Self {
            contacts: contacts.into(),
        }
    }

    /// Contacts matching `search_term`, in directory order
    ///
    /// A contact matches when its lowercased username contains the
    /// lowercased term. The empty term matches every contact.
    pub fn filter(&self, search_term: &str) -> Vec<&Contact> {
        let needle = search_term.to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| contact.matches_lowercase(&needle))
            .collect()
    }

    /// Filtered contacts paired with their position in the result
    pub fn rows(&self, search_term: &str) -> Vec<ContactRow<'_>> {
        self.filter(search_term)
            .into_iter()
            .enumerate()
            .map(|(position, contact)| ContactRow { position, contact })
            .collect()
    }

    /// Look up a contact by id
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in directory order
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}
