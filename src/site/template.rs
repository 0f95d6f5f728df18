//! Page template substitution.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Placeholder replaced by the document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered document body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Create a template from its source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load a template from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| Error::Template(format!("{}: {}", path.display(), e)))?;
        if !source.contains(CONTENT_PLACEHOLDER) {
            log::warn!("template {} has no {} placeholder", path.display(), CONTENT_PLACEHOLDER);
        }
        Ok(Self::new(source))
    }

    /// Substitute every title and content placeholder.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Point root-relative `href="/` and `src="/` values at `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path))
}
