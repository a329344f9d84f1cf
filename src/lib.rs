//! Parley - conversation and composition state for a chat demo
//!
//! This library provides the state core behind a two-screen chat interface:
//! a contact directory with live search, a newest-first conversation log,
//! and a text composer with an emoji picker. All state is in-memory and
//! single-session; a terminal frontend lives in the `tui` module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod delivery;
pub mod schedule;
pub mod tui;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Mutex;

/// Result type alias for Parley operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Parley operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An identifier is already present where it must be unique
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Configuration could not be loaded or saved
    #[error("Config error: {0}")]
    Config(String),

    /// Message delivery stub reported a failure
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initialize the Parley library with logging to stdout
pub fn init() {
    tracing_subscriber::fmt::init();
}

/// Initialize logging into a file
///
/// Used by the terminal frontend, which owns stdout while running.
pub fn init_with_log_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install log subscriber: {}", e)))
}
