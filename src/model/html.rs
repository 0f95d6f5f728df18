//! HTML node tree and its serialization.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tags rendered as self-closing void elements.
const VOID_TAGS: &[&str] = &["img"];

/// A renderable HTML node.
///
/// `value` and `children` are optional so that malformed nodes can be
/// represented; [`HtmlNode::to_html`] rejects them. The constructors always
/// produce well-formed nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HtmlNode {
    /// A node holding a textual value and no children.
    Leaf {
        /// Tag name; `None` renders the raw value
        tag: Option<String>,
        /// Text content
        value: Option<String>,
        /// Attributes
        props: Attributes,
    },

    /// A node holding children and no value.
    Parent {
        /// Tag name
        tag: Option<String>,
        /// Child nodes
        children: Option<Vec<HtmlNode>>,
        /// Attributes
        props: Attributes,
    },
}

impl HtmlNode {
    /// Create a tagged leaf.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: Attributes::new(),
        }
    }

    /// Create an untagged leaf rendering its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            props: Attributes::new(),
        }
    }

    /// Create a parent node.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            props: Attributes::new(),
        }
    }

    /// Replace the attributes of this node.
    pub fn with_props(mut self, attrs: Attributes) -> Self {
        match &mut self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => *props = attrs,
        }
        self
    }

    /// Tag name, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Attributes of this node.
    pub fn props(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Serialize this node and its descendants to an HTML string.
    pub fn to_html(&self) -> Result<String> {
        let mut output = String::new();
        self.write_html(&mut output)?;
        Ok(output)
    }

    fn write_html(&self, output: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf { tag, value, props } => {
                let value = value.as_deref().ok_or(Error::MissingLeafValue)?;
                match tag.as_deref() {
                    None => output.push_str(value),
                    Some(tag) if VOID_TAGS.contains(&tag) => {
                        output.push('<');
                        output.push_str(tag);
                        props.write_html(output);
                        output.push_str(" />");
                    }
                    Some(tag) => {
                        open_tag(output, tag, props);
                        output.push_str(value);
                        close_tag(output, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                props,
            } => {
                let (Some(tag), Some(children)) = (tag.as_deref(), children.as_ref()) else {
                    return Err(Error::MissingParentContract);
                };
                open_tag(output, tag, props);
                for child in children {
                    child.write_html(output)?;
                }
                close_tag(output, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(output: &mut String, tag: &str, props: &Attributes) {
    output.push('<');
    output.push_str(tag);
    props.write_html(output);
    output.push('>');
}

fn close_tag(output: &mut String, tag: &str) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

/// Insertion-ordered HTML attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as ` key="value"` pairs.
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        self.write_html(&mut output);
        output
    }

    fn write_html(&self, output: &mut String) {
        for (key, value) in &self.0 {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(value);
            output.push('"');
        }
    }
}
