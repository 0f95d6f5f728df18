//! HTML rendering for parsed Markdown.

use crate::model::{
    Attributes, BlockChildren, BlockKind, BlockNode, HtmlNode, InlineSpan, SpanKind,
};

/// Render an inline span as a leaf node.
pub fn render_span(span: &InlineSpan) -> HtmlNode {
    match &span.kind {
        SpanKind::Plain => HtmlNode::text(&span.text),
        SpanKind::Bold => HtmlNode::leaf("b", &span.text),
        SpanKind::Italic => HtmlNode::leaf("i", &span.text),
        SpanKind::Code => HtmlNode::leaf("code", &span.text),
        SpanKind::Link { url } => HtmlNode::leaf("a", &span.text)
            .with_props(Attributes::new().with("href", url)),
        // The alt text goes into the attributes, never the element content.
        SpanKind::Image { url } => HtmlNode::leaf("img", "").with_props(
            Attributes::new()
                .with("src", url)
                .with("alt", &span.text),
        ),
    }
}

/// Render a block node as a parent node.
pub fn render_block(block: &BlockNode) -> HtmlNode {
    let tag = match block.kind {
        BlockKind::Heading(level) => level.tag(),
        BlockKind::Quote => "blockquote",
        BlockKind::UnorderedListItem | BlockKind::OrderedListItem => "li",
        BlockKind::UnorderedList => "ul",
        BlockKind::OrderedList => "ol",
        BlockKind::Code => return render_code(block),
        BlockKind::Paragraph => "p",
    };
    HtmlNode::parent(tag, render_children(&block.children))
}

/// Render blocks as the children of a root `div`.
pub fn render_document(blocks: &[BlockNode]) -> HtmlNode {
    HtmlNode::parent("div", blocks.iter().map(render_block).collect())
}

fn render_children(children: &BlockChildren) -> Vec<HtmlNode> {
    match children {
        BlockChildren::Spans(spans) => spans.iter().map(render_span).collect(),
        BlockChildren::Blocks(blocks) => blocks.iter().map(render_block).collect(),
    }
}

/// `<pre><code>` around the raw text plus a trailing newline.
fn render_code(block: &BlockNode) -> HtmlNode {
    let text: String = block.spans().iter().map(|span| span.text.as_str()).collect();
    HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent(
            "code",
            vec![HtmlNode::text(format!("{}\n", text))],
        )],
    )
}
