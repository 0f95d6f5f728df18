//! Node model types for the conversion pipeline.
//!
//! Inline spans and block nodes are produced by the parser; HTML nodes are
//! produced by the renderer and serialized to a string. All types are plain
//! values compared structurally.

mod block;
mod html;
mod span;

pub use block::{BlockChildren, BlockKind, BlockNode, BlockProps, HeadingLevel};
pub use html::{Attributes, HtmlNode};
pub use span::{InlineSpan, SpanKind};
