//! # mdsite
//!
//! Restricted Markdown to HTML conversion, plus a small static page generator.
//!
//! The converter is a two-stage pipeline: a block parser splits the document
//! on blank lines and classifies each block, then an inline lexer types the
//! text inside each block. The resulting block tree is rendered into an HTML
//! node tree and serialized.
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> mdsite::Result<()> {
//!     let markdown = "# Title\n\nBody with **bold** text";
//!
//!     let html = mdsite::render_document(markdown)?;
//!     assert_eq!(html, "<div><h1>Title</h1><p>Body with <b>bold</b> text</p></div>");
//!
//!     let title = mdsite::extract_title(markdown)?;
//!     assert_eq!(title, "Title");
//!     Ok(())
//! }
//! ```
//!
//! ## Supported syntax
//!
//! - **Blocks**: `#`..`######` headings, fenced code, `>` quotes, `-` lists,
//!   `1.` lists, paragraphs
//! - **Inline**: `**bold**`, `*italic*`/`_italic_`, `` `code` ``,
//!   `[links](url)`, `![images](url)`
//!
//! Emphasis does not nest, and text is emitted without HTML escaping.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Attributes, BlockChildren, BlockKind, BlockNode, BlockProps, HeadingLevel, HtmlNode,
    InlineSpan, SpanKind,
};
pub use parser::{extract_title, parse_document};
pub use render::JsonFormat;
pub use site::{build_site, BuildReport, SiteOptions, Template};

/// Convert a Markdown document to its HTML node tree (a root `div`).
///
/// # Example
///
/// ```
/// let node = mdsite::to_html_node("- one\n- two").unwrap();
/// assert_eq!(node.tag(), Some("div"));
/// assert_eq!(node.children().len(), 1);
/// ```
pub fn to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = parse_document(markdown)?;
    Ok(render::render_document(&blocks))
}

/// Convert a Markdown document to an HTML string.
///
/// # Errors
///
/// Fails with [`Error::UnbalancedDelimiter`] when an emphasis or code
/// delimiter is left open on a line.
///
/// # Example
///
/// ```
/// let html = mdsite::render_document("```\ncode line\n```").unwrap();
/// assert_eq!(html, "<div><pre><code>code line\n</code></pre></div>");
/// ```
pub fn render_document(markdown: &str) -> Result<String> {
    to_html_node(markdown)?.to_html()
}

/// Convert a Markdown document to a JSON dump of its block tree.
///
/// # Example
///
/// ```
/// use mdsite::JsonFormat;
///
/// let json = mdsite::to_json("# Title", JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"Title\""));
/// ```
pub fn to_json(markdown: &str, format: JsonFormat) -> Result<String> {
    let blocks = parse_document(markdown)?;
    render::to_json(&blocks, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document_title_and_body() {
        let md = "# Title\n\nBody text";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><h1>Title</h1><p>Body text</p></div>"
        );
        assert_eq!(extract_title(md).unwrap(), "Title");
    }

    #[test]
    fn test_render_document_empty() {
        assert_eq!(render_document("").unwrap(), "<div></div>");
        assert_eq!(render_document("\n\n\n").unwrap(), "<div></div>");
    }

    #[test]
    fn test_render_document_unbalanced() {
        assert!(matches!(
            render_document("# Fine\n\nnot **fine"),
            Err(Error::UnbalancedDelimiter { .. })
        ));
    }

    #[test]
    fn test_to_html_node_structure() {
        let node = to_html_node("1. a\n2. b").unwrap();
        assert_eq!(
            node,
            HtmlNode::parent(
                "div",
                vec![HtmlNode::parent(
                    "ol",
                    vec![
                        HtmlNode::parent("li", vec![HtmlNode::text("a")]),
                        HtmlNode::parent("li", vec![HtmlNode::text("b")]),
                    ]
                )]
            )
        );
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json("- a", JsonFormat::Compact).unwrap();
        assert!(json.contains("unordered_list"));
        assert!(!json.contains('\n'));
    }
}
