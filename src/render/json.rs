//! JSON rendering of the parsed block tree.

use crate::error::{Error, Result};
use crate::model::BlockNode;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert parsed blocks to JSON.
pub fn to_json(blocks: &[BlockNode], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(blocks),
        JsonFormat::Compact => serde_json::to_string(blocks),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
