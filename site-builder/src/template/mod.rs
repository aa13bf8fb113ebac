//! Askama template integration with HTMX patterns
//!
//! - [`HxTemplate`]: full page for browser requests, partial for HTMX requests
//! - [`extract_partial`]: pulls the marked partial out of a rendered page
//! - [`helpers`]: HTMX attribute builders used by the view models
//!
//! # Examples
//!
//! ```rust
//! use askama::Template;
//! use site_builder::template::HxTemplate;
//! use axum_htmx::HxRequest;
//!
//! #[derive(Template)]
//! #[template(
//!     source = "<html><!-- partial:start --><p>{{ name }}</p><!-- partial:end --></html>",
//!     ext = "html"
//! )]
//! struct Greeting {
//!     name: String,
//! }
//!
//! async fn greet(HxRequest(is_htmx): HxRequest) -> impl axum::response::IntoResponse {
//!     Greeting { name: "World".to_string() }.render_htmx(is_htmx)
//! }
//! ```

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::borrow::Cow;

pub mod helpers;

const PARTIAL_START: &str = "<!-- partial:start -->";
const PARTIAL_END: &str = "<!-- partial:end -->";

/// Content between the `partial:start` and `partial:end` comment markers
///
/// Returns the whole input when the markers are missing.
///
/// ```rust
/// use site_builder::template::extract_partial;
///
/// let html = "<html><!-- partial:start --> <div>Body</div> <!-- partial:end --></html>";
/// assert_eq!(extract_partial(html), "<div>Body</div>");
/// assert_eq!(extract_partial("<p>plain</p>"), "<p>plain</p>");
/// ```
#[must_use]
pub fn extract_partial(html: &str) -> Cow<'_, str> {
    if let Some(start_pos) = html.find(PARTIAL_START) {
        let content_start = start_pos + PARTIAL_START.len();
        if let Some(end_pos) = html[content_start..].find(PARTIAL_END) {
            return Cow::Borrowed(html[content_start..content_start + end_pos].trim());
        }
    }
    Cow::Borrowed(html)
}

fn render_failed(err: &askama::Error) -> Response {
    tracing::error!("Template rendering error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
}

/// Extension trait for Askama templates with HTMX support
pub trait HxTemplate: Template {
    /// Render the partial for HTMX requests and the full page otherwise
    ///
    /// Responds with `500 Internal Server Error` if rendering fails.
    fn render_htmx(self, is_htmx: bool) -> Response
    where
        Self: Sized,
    {
        match self.render() {
            Ok(html) if is_htmx => Html(extract_partial(&html).into_owned()).into_response(),
            Ok(html) => Html(html).into_response(),
            Err(err) => render_failed(&err),
        }
    }

    /// Render the template as is
    ///
    /// Responds with `500 Internal Server Error` if rendering fails.
    fn render_html(self) -> Response
    where
        Self: Sized,
    {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => render_failed(&err),
        }
    }

    /// Render wrapped in an out-of-band swap target
    ///
    /// Returns the HTML as a `String` so it can be appended to another
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns [`askama::Error`] if template rendering fails.
    fn render_oob_str(
        self,
        target_id: &str,
        swap_strategy: Option<&str>,
    ) -> Result<String, askama::Error>
    where
        Self: Sized,
    {
        let html = self.render()?;
        let swap_attr = swap_strategy.unwrap_or("true");
        Ok(format!(
            r#"<div id="{target_id}" hx-swap-oob="{swap_attr}">{html}</div>"#
        ))
    }
}

impl<T> HxTemplate for T where T: Template {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Template)]
    #[template(
        source = "<html><body><!-- partial:start --><h1>{{ title }}</h1><!-- partial:end --></body></html>",
        ext = "html"
    )]
    struct PageTemplate {
        title: String,
    }

    fn page() -> PageTemplate {
        PageTemplate {
            title: "Add Section".to_string(),
        }
    }

    #[test]
    fn test_extract_partial() {
        let html = page().render().unwrap();
        assert_eq!(extract_partial(&html), "<h1>Add Section</h1>");
    }

    #[test]
    fn test_extract_partial_without_end_marker() {
        let html = "<!-- partial:start --><p>open</p>";
        assert_eq!(extract_partial(html), html);
    }

    #[test]
    fn test_render_htmx() {
        assert_eq!(page().render_htmx(false).status(), StatusCode::OK);
        assert_eq!(page().render_htmx(true).status(), StatusCode::OK);
        assert_eq!(page().render_html().status(), StatusCode::OK);
    }

    #[test]
    fn test_render_oob_str() {
        let oob = page().render_oob_str("section-grid", Some("innerHTML")).unwrap();
        assert!(oob.starts_with(r#"<div id="section-grid" hx-swap-oob="innerHTML">"#));
        assert!(oob.contains("<h1>Add Section</h1>"));
    }
}
