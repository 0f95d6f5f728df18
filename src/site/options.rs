//! Site build options and configuration.

use std::path::PathBuf;

/// Options for building a site from a content directory.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Directory holding the markdown sources
    pub content_dir: PathBuf,

    /// HTML template containing `{{ Title }}` and `{{ Content }}`
    pub template_path: PathBuf,

    /// Directory of static assets copied verbatim
    pub static_dir: PathBuf,

    /// Output directory; replaced on every build
    pub output_dir: PathBuf,

    /// Prefix substituted for root-relative `href="/` and `src="/` values
    pub base_path: String,

    /// Render pages in parallel
    pub parallel: bool,
}

impl SiteOptions {
    /// Create new site options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content directory.
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Set the template path.
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// Set the static assets directory.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the base path used for root-relative links.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Enable or disable parallel page rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
            parallel: true,
        }
    }
}
