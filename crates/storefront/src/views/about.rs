//! The static company page.

use askama::Template;

use crate::filters;
use crate::router::Params;

use super::{RenderFuture, View, ViewContext};

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

/// The about view. Fully static; kept as a registered view so it renders
/// like the others instead of through the router's empty-section fallback.
pub struct AboutView;

impl View for AboutView {
    fn render<'a>(&'a self, _ctx: &'a ViewContext, _params: &'a Params) -> RenderFuture<'a> {
        Box::pin(async { Ok(AboutTemplate.render()?) })
    }
}
