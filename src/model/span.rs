//! Inline span types.

use serde::{Deserialize, Serialize};

/// A typed fragment of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    /// The text content (alt text for images)
    pub text: String,

    /// Span kind, carrying the target URL for links and images
    pub kind: SpanKind,
}

impl InlineSpan {
    /// Create a span of the given kind.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Create a plain text span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Bold)
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Italic)
    }

    /// Create an inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Code)
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    /// Create an image span; `alt` becomes the span text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    /// Target URL, present only for links and images.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }

    /// Check if this span is still untyped text.
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }
}

/// Kind of an inline span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpanKind {
    /// Untyped text
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*` or `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link {
        /// Link target
        url: String,
    },
    /// `![alt](url)`
    Image {
        /// Image source
        url: String,
    },
}
