//! The contact page, backed by the persisted submission log.

use askama::Template;

use crate::router::Params;
use crate::store::{ContactLog, ContactMessage};

use super::{RenderFuture, View, ViewContext};

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    submission_count: usize,
}

/// The contact view. Owns the submission log; the page shows how many
/// messages have been received so far.
pub struct ContactView {
    log: ContactLog,
}

impl ContactView {
    /// Create a contact view over `log`.
    #[must_use]
    pub fn new(log: ContactLog) -> Self {
        Self { log }
    }

    /// Record a form submission.
    ///
    /// # Errors
    ///
    /// Returns `PersistError` when the submission cannot be stored.
    pub fn submit(&self, message: ContactMessage) -> Result<(), crate::store::PersistError> {
        tracing::info!(name = %message.name, "contact form submitted");
        self.log.submit(message)
    }
}

impl View for ContactView {
    fn render<'a>(&'a self, _ctx: &'a ViewContext, _params: &'a Params) -> RenderFuture<'a> {
        Box::pin(async {
            let submission_count = self.log.all().map_or_else(
                |error| {
                    tracing::error!(%error, "failed to read contact log");
                    0
                },
                |messages| messages.len(),
            );
            Ok(ContactTemplate { submission_count }.render()?)
        })
    }
}
