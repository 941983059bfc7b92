//! Persisted contact-form submissions.
//!
//! Submissions accumulate as a JSON array under their own storage key,
//! separate from the main application state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::persist::{PersistError, Persister};

/// Storage key holding the submitted contact messages.
pub const CONTACT_KEY: &str = "contact-messages";

/// A submitted contact-form record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// Append-only log of contact-form submissions.
pub struct ContactLog {
    persister: Arc<dyn Persister>,
}

impl ContactLog {
    /// Create a log backed by `persister`.
    #[must_use]
    pub fn new(persister: Arc<dyn Persister>) -> Self {
        Self { persister }
    }

    /// Append a submission to the persisted array.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the backend fails to read or write.
    pub fn submit(&self, message: ContactMessage) -> Result<(), PersistError> {
        let mut all = self.all()?;
        all.push(message);
        let payload = serde_json::to_string(&all)?;
        self.persister.put(CONTACT_KEY, &payload)
    }

    /// All submissions so far. A corrupt payload is logged and treated as
    /// empty rather than blocking new submissions.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the backend fails to read.
    pub fn all(&self) -> Result<Vec<ContactMessage>, PersistError> {
        let Some(payload) = self.persister.get(CONTACT_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&payload) {
            Ok(messages) => Ok(messages),
            Err(error) => {
                tracing::error!(%error, "corrupt contact log, starting fresh");
                Ok(Vec::new())
            }
        }
    }
}
