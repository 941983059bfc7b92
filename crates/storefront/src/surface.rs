//! The presentation seam.
//!
//! The router does not touch the screen directly; it drives a [`Surface`],
//! which stands in for the document shell (view sections, title bar,
//! scroll position). The binary installs a printing surface;
//! [`BufferSurface`] records calls for inspection in tests.

use std::sync::{Arc, Mutex, PoisonError};

/// Where rendered views land.
pub trait Surface: Send {
    /// Hide all view sections and show `name` with the given markup.
    fn show_view(&mut self, name: &str, html: &str);

    /// Update the document title.
    fn set_title(&mut self, title: &str);

    /// Scroll the viewport back to the top.
    fn scroll_to_top(&mut self);
}

#[derive(Debug, Default)]
struct BufferInner {
    visible: Option<String>,
    title: String,
    html: String,
    shows: usize,
    scrolls: usize,
}

/// A surface that records every call; clones share the same buffer.
#[derive(Clone, Default)]
pub struct BufferSurface {
    inner: Arc<Mutex<BufferInner>>,
}

impl BufferSurface {
    /// Create an empty buffer surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BufferInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Name of the currently visible view section.
    #[must_use]
    pub fn visible(&self) -> Option<String> {
        self.lock().visible.clone()
    }

    /// Current document title.
    #[must_use]
    pub fn title(&self) -> String {
        self.lock().title.clone()
    }

    /// Markup of the last shown view.
    #[must_use]
    pub fn html(&self) -> String {
        self.lock().html.clone()
    }

    /// Number of `show_view` calls so far.
    #[must_use]
    pub fn shows(&self) -> usize {
        self.lock().shows
    }

    /// Number of `scroll_to_top` calls so far.
    #[must_use]
    pub fn scrolls(&self) -> usize {
        self.lock().scrolls
    }
}

impl Surface for BufferSurface {
    fn show_view(&mut self, name: &str, html: &str) {
        let mut inner = self.lock();
        inner.visible = Some(name.to_owned());
        inner.html = html.to_owned();
        inner.shows += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.lock().title = title.to_owned();
    }

    fn scroll_to_top(&mut self) {
        self.lock().scrolls += 1;
    }
}
