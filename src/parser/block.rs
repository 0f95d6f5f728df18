//! Block splitting, classification and parsing.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::inline::lex;
use crate::error::{Error, Result};
use crate::model::{BlockKind, BlockNode, HeadingLevel};

const FENCE: &str = "```";

/// One anchored pattern per heading level, in ascending order.
static HEADING_PATTERNS: Lazy<Vec<(HeadingLevel, Regex)>> = Lazy::new(|| {
    HeadingLevel::ALL
        .iter()
        .map(|&level| {
            let pattern = format!(r"^#{{{}}} (.*)", level.level());
            (level, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static QUOTE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> ?(.*)").unwrap());

static UNORDERED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- ?(.*)").unwrap());

static ORDERED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\. ?(.*)").unwrap());

/// Split a document into blocks separated by blank lines.
///
/// Blocks are trimmed and empty blocks are dropped; order is preserved.
pub fn split(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. Never fails: anything unrecognized is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    let kind = if let Some((level, _)) = match_heading(block) {
        BlockKind::Heading(level)
    } else if is_code_fence(block) {
        BlockKind::Code
    } else if all_lines_match(block, &QUOTE_PATTERN) {
        BlockKind::Quote
    } else if all_lines_match(block, &UNORDERED_PATTERN) {
        BlockKind::UnorderedList
    } else if all_lines_match(block, &ORDERED_PATTERN) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    log::trace!("classified block as {:?}", kind);
    kind
}

/// Parse one block into a block node, lexing its inline content.
pub fn parse(block: &str) -> Result<BlockNode> {
    match classify(block) {
        BlockKind::Heading(level) => {
            let text = match_heading(block)
                .map(|(_, caps)| capture(&caps, 1))
                .unwrap_or_default();
            Ok(BlockNode::heading(level, lex(text.trim())?))
        }
        BlockKind::Code => Ok(BlockNode::code(code_body(block))),
        BlockKind::Quote => {
            let text = block
                .split('\n')
                .map(|line| strip_marker(line, &QUOTE_PATTERN))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(BlockNode::quote(lex(&text)?))
        }
        BlockKind::UnorderedList => {
            let items = block
                .split('\n')
                .map(|line| -> Result<BlockNode> {
                    let text = strip_marker(line, &UNORDERED_PATTERN);
                    Ok(BlockNode::unordered_item(lex(text.trim())?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(BlockNode::unordered_list(items))
        }
        BlockKind::OrderedList => {
            let items = block
                .split('\n')
                .map(parse_ordered_item)
                .collect::<Result<Vec<_>>>()?;
            Ok(BlockNode::ordered_list(items))
        }
        // Item kinds are only produced inside lists; a bare block never
        // classifies as one.
        BlockKind::Paragraph | BlockKind::UnorderedListItem | BlockKind::OrderedListItem => {
            Ok(BlockNode::paragraph(lex(block.trim())?))
        }
    }
}

/// Parse a whole document into its block nodes.
pub fn parse_document(document: &str) -> Result<Vec<BlockNode>> {
    let blocks = split(document);
    log::debug!("document split into {} blocks", blocks.len());
    blocks.into_iter().map(parse).collect()
}

/// Extract the document title from its leading level-1 heading.
///
/// Returns the text after `# ` on the heading line, as written.
pub fn extract_title(document: &str) -> Result<String> {
    let first = split(document).into_iter().next().ok_or(Error::MissingTitle)?;
    match match_heading(first) {
        Some((HeadingLevel::H1, caps)) => Ok(capture(&caps, 1).to_string()),
        _ => Err(Error::MissingTitle),
    }
}

fn match_heading(block: &str) -> Option<(HeadingLevel, Captures<'_>)> {
    HEADING_PATTERNS
        .iter()
        .find_map(|(level, pattern)| pattern.captures(block).map(|caps| (*level, caps)))
}

fn is_code_fence(block: &str) -> bool {
    let lines: Vec<&str> = block.trim().split('\n').collect();
    lines.len() > 1
        && lines.first().map(|l| l.trim()) == Some(FENCE)
        && lines.last().map(|l| l.trim()) == Some(FENCE)
}

/// Fence lines removed, each remaining line dedented.
fn code_body(block: &str) -> String {
    let lines: Vec<&str> = block.trim().split('\n').collect();
    lines
        .get(1..lines.len() - 1)
        .unwrap_or_default()
        .iter()
        .map(|line| line.trim_start())
        .collect::<Vec<_>>()
        .join("\n")
}

fn all_lines_match(block: &str, pattern: &Regex) -> bool {
    block.split('\n').all(|line| pattern.is_match(line))
}

fn strip_marker<'a>(line: &'a str, pattern: &Regex) -> &'a str {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(line, |m| m.as_str())
}

fn parse_ordered_item(line: &str) -> Result<BlockNode> {
    let caps = ORDERED_PATTERN
        .captures(line)
        .ok_or_else(|| Error::InvalidListNumber(line.to_string()))?;
    let label = capture(&caps, 1);
    let number = label
        .parse::<u64>()
        .map_err(|_| Error::InvalidListNumber(label.to_string()))?;
    Ok(BlockNode::ordered_item(number, lex(capture(&caps, 2).trim())?))
}

fn capture<'a>(caps: &Captures<'a>, group: usize) -> &'a str {
    caps.get(group).map_or("", |m| m.as_str())
}
