//! Block-level types.

use super::InlineSpan;
use serde::{Deserialize, Serialize};

/// A node of the block tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    /// Leaf spans or nested blocks, depending on `kind`
    pub children: BlockChildren,

    /// Block kind
    pub kind: BlockKind,

    /// Extra attributes (ordered list items only)
    pub props: Option<BlockProps>,
}

impl BlockNode {
    /// Create a leaf block holding inline spans.
    pub fn with_spans(kind: BlockKind, spans: Vec<InlineSpan>) -> Self {
        Self {
            children: BlockChildren::Spans(spans),
            kind,
            props: None,
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        Self::with_spans(BlockKind::Paragraph, spans)
    }

    /// Create a heading block.
    pub fn heading(level: HeadingLevel, spans: Vec<InlineSpan>) -> Self {
        Self::with_spans(BlockKind::Heading(level), spans)
    }

    /// Create a code block holding the raw fenced text.
    pub fn code(text: impl Into<String>) -> Self {
        Self::with_spans(BlockKind::Code, vec![InlineSpan::plain(text)])
    }

    /// Create a quote block.
    pub fn quote(spans: Vec<InlineSpan>) -> Self {
        Self::with_spans(BlockKind::Quote, spans)
    }

    /// Create an unordered list item.
    pub fn unordered_item(spans: Vec<InlineSpan>) -> Self {
        Self::with_spans(BlockKind::UnorderedListItem, spans)
    }

    /// Create an ordered list item with its literal label.
    pub fn ordered_item(number: u64, spans: Vec<InlineSpan>) -> Self {
        Self {
            children: BlockChildren::Spans(spans),
            kind: BlockKind::OrderedListItem,
            props: Some(BlockProps { number }),
        }
    }

    /// Create an unordered list from its items.
    pub fn unordered_list(items: Vec<BlockNode>) -> Self {
        Self {
            children: BlockChildren::Blocks(items),
            kind: BlockKind::UnorderedList,
            props: None,
        }
    }

    /// Create an ordered list from its items.
    pub fn ordered_list(items: Vec<BlockNode>) -> Self {
        Self {
            children: BlockChildren::Blocks(items),
            kind: BlockKind::OrderedList,
            props: None,
        }
    }

    /// Inline spans of a leaf block; empty for containers.
    pub fn spans(&self) -> &[InlineSpan] {
        match &self.children {
            BlockChildren::Spans(spans) => spans,
            BlockChildren::Blocks(_) => &[],
        }
    }

    /// Child blocks of a container; empty for leaf blocks.
    pub fn blocks(&self) -> &[BlockNode] {
        match &self.children {
            BlockChildren::Blocks(blocks) => blocks,
            BlockChildren::Spans(_) => &[],
        }
    }

    /// Ordered list label, if any.
    pub fn number(&self) -> Option<u64> {
        self.props.as_ref().map(|p| p.number)
    }
}

/// Homogeneous children of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum BlockChildren {
    /// Inline content of a leaf block
    Spans(Vec<InlineSpan>),
    /// Items of a list container
    Blocks(Vec<BlockNode>),
}

/// Attributes attached to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockProps {
    /// Ordered list label exactly as written in the source
    pub number: u64,
}

/// Kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Plain paragraph (fallback)
    Paragraph,
    /// `#` .. `######` heading
    Heading(HeadingLevel),
    /// Fenced code block
    Code,
    /// `>` quote
    Quote,
    /// `-` list
    UnorderedList,
    /// One line of an unordered list
    UnorderedListItem,
    /// `1.` list
    OrderedList,
    /// One line of an ordered list
    OrderedListItem,
}

/// Heading level (1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels in ascending order.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Numeric level.
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}
