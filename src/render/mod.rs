//! Rendering module for converting parsed blocks to output formats.

mod html;
mod json;

pub use html::{render_block, render_document, render_span};
pub use json::{to_json, JsonFormat};
