//! Container map produced by a page, and the per-widget fetch wrapper.

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Percent-encodes one path segment or query value.
#[must_use]
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Content of one widget after its fetch settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Ready(String),
    Failed(String),
}

impl Widget {
    /// Renders `result` with `render`, or logs the error and produces an
    /// explicit error fragment naming `what` failed to load.
    pub fn from_result<T, E, F>(container: &str, what: &str, result: Result<T, E>, render: F) -> Self
    where
        E: Display,
        F: FnOnce(T) -> String,
    {
        match settle(container, result) {
            Some(value) => Widget::Ready(render(value)),
            None => Widget::Failed(error_fragment(what)),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Widget::Ready(_))
    }

    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Widget::Ready(html) | Widget::Failed(html) => html,
        }
    }
}

/// Unwraps a fetch result for `container`, logging the failure.
pub fn settle<T, E: Display>(container: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(container, error = %err, "widget fetch failed");
            None
        }
    }
}

#[must_use]
pub fn error_fragment(what: &str) -> String {
    format!(
        r#"<p class="text-center text-red-600">Unable to load {}. Please try again later.</p>"#,
        html_escape(what)
    )
}

/// The containers a page filled, in the order they were filled.
///
/// Setting a container twice replaces its content, like assigning
/// `innerHTML`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    containers: Vec<(String, String)>,
}

impl PageView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &str, html: impl Into<String>) {
        let html = html.into();
        match self.containers.iter_mut().find(|(k, _)| k == id) {
            Some((_, slot)) => *slot = html,
            None => self.containers.push((id.to_string(), html)),
        }
    }

    pub fn set_widget(&mut self, id: &str, widget: Widget) {
        self.set(id, widget.into_html());
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|(k, _)| k.as_str())
    }

    /// Copies every container of `other` into `self`.
    pub fn merge(&mut self, other: PageView) {
        for (id, html) in other.containers {
            self.set(&id, html);
        }
    }

    /// Serializes all containers, each under an `<!-- #id -->` marker.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (id, html) in &self.containers {
            out.push_str("<!-- #");
            out.push_str(id);
            out.push_str(" -->\n");
            out.push_str(html.trim());
            out.push('\n');
        }
        out
    }
}
