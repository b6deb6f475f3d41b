//! Rendered HTML fragments.
//!
//! All text enters a fragment escaped unless it goes through [`Markup::trusted`],
//! which keeps the places that inject raw HTML easy to find.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Raw HTML inserted as-is. Only for content the upstream service vouches for.
    pub fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escaped text content.
    pub fn text(text: &str) -> Self {
        Self(escape(text))
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text));
    }

    pub(crate) fn push_raw(&mut self, html: &str) {
        self.0.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for m in iter {
            out.push(m);
        }
        out
    }
}

/// Escapes text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
