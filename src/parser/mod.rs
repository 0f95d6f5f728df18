//! Markdown parsing: block structure and inline spans.

mod block;
mod inline;

pub use block::{classify, extract_title, parse, parse_document, split};
pub use inline::{
    extract_images, extract_links, lex, split_delimiter, split_images, split_links,
};
