//! Message delivery seam
//!
//! Messages are appended to the local conversation log first; a
//! [`Delivery`] implementation is then asked to send them. The log stays
//! the source of truth for what is displayed whatever the outcome.
//!
//! The bundled [`LocalOnly`] implementation transmits nothing.

use crate::chat::Message;
use crate::Result;

/// Result of handing a message to a delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Backend acknowledged the message
    Acknowledged,
    /// No backend is configured; the message exists only locally
    LocalOnly,
}

/// Sends messages after they have been appended locally
pub trait Delivery: Send + Sync {
    /// Hand one message to the backend
    fn send(&self, message: &Message) -> Result<DeliveryOutcome>;
}

/// Delivery that keeps every message local
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

impl Delivery for LocalOnly {
    fn send(&self, message: &Message) -> Result<DeliveryOutcome> {
        tracing::debug!("Message {} kept local (no delivery backend)", message.id());
        Ok(DeliveryOutcome::LocalOnly)
    }
}

/// Deliver a freshly appended message, logging the outcome
///
/// Failures are reported through the return value and the log only; the
/// caller never rolls back the local append.
pub fn deliver(delivery: &dyn Delivery, message: &Message) -> Option<DeliveryOutcome> {
    match delivery.send(message) {
        Ok(outcome) => {
            tracing::info!("Message {} delivery outcome: {:?}", message.id(), outcome);
            Some(outcome)
        }
        Err(e) => {
            tracing::warn!("Failed to deliver message {}: {}", message.id(), e);
            None
        }
    }
}
