//! Static page generation around the Markdown converter.
//!
//! Every file of a content directory is rendered to HTML, placed into a page
//! template, and written under the output directory with the same relative
//! layout. Static assets are copied alongside.

mod generate;
mod options;
mod template;

pub use generate::{build_site, copy_static, generate_page, generate_pages_recursive, BuildReport};
pub use options::SiteOptions;
pub use template::{rewrite_base_path, Template, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
