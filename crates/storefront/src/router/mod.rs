//! Hash-fragment router.
//!
//! A state machine over the four views. Navigation assigns a fragment of
//! the form `#/<view>[?key=value&...]`; the change handler parses it,
//! resolves the target view, renders it, and pushes the result to the
//! [`Surface`]. Renders are awaited in turn, so overlapping navigations are
//! serialized rather than racing to write the screen.

pub mod fragment;

pub use fragment::Params;

use crate::surface::Surface;
use crate::views::{View, ViewContext};

/// The view shown when no (or an unknown) route is given.
pub const DEFAULT_VIEW: &str = "home";

/// View sections that exist even without a registered render function.
const STATIC_VIEWS: &[&str] = &["about", "contact"];

/// Document title for each view.
fn view_title(view: &str) -> &'static str {
    match view {
        "home" => "Urban Gent - Men's Fashion Store",
        "shop" => "Shop - Urban Gent",
        "about" => "About - Urban Gent",
        "contact" => "Contact - Urban Gent",
        _ => "Urban Gent",
    }
}

/// Maps fragments to views and drives their renders.
pub struct Router {
    views: Vec<(String, Box<dyn View>)>,
    ctx: ViewContext,
    surface: Box<dyn Surface>,
    current_view: Option<String>,
    current_params: Params,
    current_hash: String,
}

impl Router {
    /// Create a router with no registered views.
    #[must_use]
    pub fn new(ctx: ViewContext, surface: Box<dyn Surface>) -> Self {
        Self {
            views: Vec::new(),
            ctx,
            surface,
            current_view: None,
            current_params: Params::new(),
            current_hash: String::new(),
        }
    }

    /// Register a view under `name`.
    pub fn register(&mut self, name: impl Into<String>, view: Box<dyn View>) {
        self.views.push((name.into(), view));
    }

    /// Handle the initial route, as on page load.
    pub async fn init(&mut self, initial_hash: &str) {
        self.handle_hash_change(initial_hash).await;
        tracing::debug!("router initialized");
    }

    /// React to a fragment change: parse it and switch views.
    pub async fn handle_hash_change(&mut self, hash: &str) {
        self.current_hash = if hash.starts_with('#') {
            hash.to_owned()
        } else {
            format!("#{hash}")
        };
        let (view, params) = fragment::parse(hash);
        self.switch_view(&view, params).await;
    }

    /// Switch to `name` with `params`.
    ///
    /// A no-op when the target view and params are structurally identical
    /// to the current ones. Unknown views outside the static allow-list
    /// fall back to [`DEFAULT_VIEW`]. A failed render is logged and leaves
    /// the section empty; it never propagates.
    pub async fn switch_view(&mut self, name: &str, params: Params) {
        let requested = if name.is_empty() { DEFAULT_VIEW } else { name };

        let target = if self.lookup(requested).is_some() || STATIC_VIEWS.contains(&requested) {
            requested.to_owned()
        } else {
            tracing::warn!(view = requested, "view not found, switching to home");
            DEFAULT_VIEW.to_owned()
        };

        if self.current_view.as_deref() == Some(target.as_str())
            && self.current_params == params
        {
            return;
        }

        let html = match self.lookup(&target) {
            Some(view) => match view.render(&self.ctx, &params).await {
                Ok(html) => html,
                Err(error) => {
                    tracing::error!(view = %target, %error, "error rendering view");
                    String::new()
                }
            },
            // A static section with no render function
            None => String::new(),
        };

        self.surface.show_view(&target, &html);
        self.surface.set_title(view_title(&target));
        self.surface.scroll_to_top();

        tracing::debug!(view = %target, params = ?params, "switched view");
        self.current_view = Some(target);
        self.current_params = params;
    }

    /// Navigate to `route` with `params` by assigning the corresponding
    /// fragment and delivering the change to the handler.
    pub async fn navigate(&mut self, route: &str, params: &Params) {
        let hash = fragment::build(route, params);
        self.handle_hash_change(&hash).await;
    }

    /// Name of the current view, if any navigation has happened.
    #[must_use]
    pub fn current_view(&self) -> Option<&str> {
        self.current_view.as_deref()
    }

    /// Params of the current view.
    #[must_use]
    pub fn current_params(&self) -> &Params {
        &self.current_params
    }

    /// The current fragment, as last assigned.
    #[must_use]
    pub fn current_hash(&self) -> &str {
        &self.current_hash
    }

    fn lookup(&self, name: &str) -> Option<&dyn View> {
        self.views
            .iter()
            .find(|(view_name, _)| view_name == name)
            .map(|(_, view)| view.as_ref())
    }
}
