//! Pluggable message id generation
//!
//! Two strategies are provided:
//! - [`RandomIds`] draws a fixed-length alphanumeric token per id
//! - [`SequentialIds`] combines a per-session nonce with a monotonic counter
//!   and never repeats within a session

use crate::chat::message::MessageId;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default length of random message tokens
pub const DEFAULT_ID_LENGTH: usize = 16;

/// Longest random token a generator will produce
pub const MAX_ID_LENGTH: usize = 64;

/// Source of fresh message identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier
    fn next_id(&self) -> MessageId;
}

/// Random alphanumeric tokens
#[derive(Debug, Clone)]
pub struct RandomIds {
    length: usize,
}

impl RandomIds {
    /// Create a generator producing tokens of `length` characters
    ///
    /// The length is clamped to `1..=MAX_ID_LENGTH`.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(1, MAX_ID_LENGTH),
        }
    }

    /// Token length
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&self) -> MessageId {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        MessageId::new(token)
    }
}

/// Session nonce plus monotonic counter
#[derive(Debug)]
pub struct SequentialIds {
    nonce: String,
    counter: AtomicU64,
}

impl SequentialIds {
    /// Create a generator with a fresh random session nonce
    pub fn new() -> Self {
        Self::with_nonce(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Create a generator with a caller-chosen nonce
    pub fn with_nonce(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Session nonce shared by every id from this generator
    pub fn nonce(&self) -> &str {
        &self.nonce
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> MessageId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        MessageId::new(format!("{}-{}", self.nonce, n))
    }
}

/// Which generator the application should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random alphanumeric tokens
    #[default]
    Random,
    /// Session nonce plus counter
    Sequential,
}

impl IdStrategy {
    /// Build the generator for this strategy
    ///
    /// `length` only applies to [`IdStrategy::Random`].
    pub fn build(self, length: usize) -> Arc<dyn IdGenerator> {
        match self {
            Self::Random => Arc::new(RandomIds::new(length)),
            Self::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}
