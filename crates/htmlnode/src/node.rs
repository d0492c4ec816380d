//! HTML node tree
//!
//! A tree is built from two concrete node kinds: [`LeafNode`] holds literal
//! text, optionally wrapped in a single tag, and [`ParentNode`] wraps its
//! rendered children in a tag pair. [`Node`] is the closed sum of the two,
//! so a child that is not a node cannot be put into a tree at all.
//!
//! [`HtmlNode`] is the untyped base record (tag, value, children,
//! attributes). It cannot be rendered itself; use `Node::try_from` to turn
//! one into a concrete node.

use std::fmt;

use crate::attributes::{self, Attributes};
use crate::options::RenderOptions;
use crate::serialize::{self, is_blank_tag};
use crate::{HtmlNodeError, Result};

/// Untyped node record with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Node>>,
    pub attributes: Option<Attributes>,
}

impl HtmlNode {
    pub fn new(
        tag: Option<&str>,
        value: Option<&str>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            children,
            attributes,
        }
    }

    /// Always fails: only [`LeafNode`] and [`ParentNode`] know how to render.
    pub fn to_html(&self) -> Result<String> {
        Err(HtmlNodeError::NotImplemented)
    }

    pub fn attributes_to_html(&self) -> String {
        attributes::optional_to_html(self.attributes.as_ref())
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HtmlNode({}, {}, children: ",
            self.tag.as_deref().unwrap_or("None"),
            self.value.as_deref().unwrap_or("None"),
        )?;
        match &self.children {
            Some(children) => write!(f, "{}", children.len())?,
            None => f.write_str("None")?,
        }
        f.write_str(", ")?;
        match &self.attributes {
            Some(attrs) => {
                f.write_str("{")?;
                for (i, (name, value)) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {:?}", name, value)?;
                }
                f.write_str("})")
            }
            None => f.write_str("None)"),
        }
    }
}

/// Text, either raw or wrapped in a single tag.
///
/// A leaf never carries attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: Option<String>,
}

impl LeafNode {
    /// Create a leaf. A missing value is accepted here and rejected when
    /// rendering.
    pub fn new(tag: Option<&str>, value: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
        }
    }

    /// Create a raw text leaf
    pub fn text(value: &str) -> Self {
        Self::new(None, Some(value))
    }

    /// Create a leaf wrapped in `tag`
    pub fn element(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), Some(value))
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Check if this leaf renders as raw text
    pub fn is_text(&self) -> bool {
        is_blank_tag(self.tag())
    }

    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        serialize::serialize_leaf(self, &mut out)?;
        Ok(out)
    }
}

/// Element wrapping an ordered list of child nodes.
///
/// The tag is validated on construction. Children may be empty at
/// construction time, but rendering then fails with
/// [`HtmlNodeError::EmptyChildren`].
///
/// Dropping a tree is iterative, so trees of any depth can be released.
/// Cloning, comparing and debug-formatting still recurse once per level
/// and can overflow the stack on very deep trees.
///
/// Children must be nodes:
///
/// ```compile_fail
/// use htmlnode::ParentNode;
///
/// let node = ParentNode::new("div", vec!["not a node"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<Node>,
    attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<Node>) -> Result<Self> {
        Self::from_parts(Some(tag), Some(children), None)
    }

    /// Create a parent from optional parts, rejecting a missing or empty tag
    /// and missing children.
    pub fn from_parts(
        tag: Option<&str>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Result<Self> {
        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                log::debug!("rejected parent node without a tag");
                return Err(HtmlNodeError::EmptyTag);
            }
        };
        let Some(children) = children else {
            log::debug!("rejected <{}> parent node without children", tag);
            return Err(HtmlNodeError::EmptyChildren);
        };

        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes,
        })
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn attributes_to_html(&self) -> String {
        attributes::optional_to_html(self.attributes.as_ref())
    }

    pub fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&RenderOptions::default())
    }

    pub fn to_html_with_options(&self, options: &RenderOptions) -> Result<String> {
        let mut out = String::with_capacity(256);
        serialize::serialize_parent(self, options, 0, &mut out)?;
        Ok(out)
    }
}

impl Drop for ParentNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(node) = stack.pop() {
            if let Node::Parent(mut parent) = node {
                stack.append(&mut parent.children);
            }
        }
    }
}

/// A node in an HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Literal text; always `None` for parents
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.value(),
            Node::Parent(_) => None,
        }
    }

    /// Child nodes; always `None` for leaves
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Leaf(_) => None,
            Node::Parent(parent) => Some(parent.children()),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Leaf(_) => None,
            Node::Parent(parent) => parent.attributes(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent(_))
    }

    /// Render this node and its subtree with default options
    pub fn to_html(&self) -> Result<String> {
        serialize::render(self, &RenderOptions::default())
    }

    pub fn to_html_with_options(&self, options: &RenderOptions) -> Result<String> {
        serialize::render(self, options)
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

impl TryFrom<HtmlNode> for Node {
    type Error = HtmlNodeError;

    /// Classify a record: children make a parent, a lone value makes a leaf.
    /// A record with both, or with neither, is not a node.
    fn try_from(record: HtmlNode) -> Result<Self> {
        match (record.value, record.children) {
            (None, Some(children)) => {
                ParentNode::from_parts(record.tag.as_deref(), Some(children), record.attributes)
                    .map(Node::Parent)
            }
            (Some(value), None) if record.attributes.is_none() => Ok(Node::Leaf(LeafNode {
                tag: record.tag,
                value: Some(value),
            })),
            _ => {
                log::debug!("record is neither a leaf nor a parent node");
                Err(HtmlNodeError::InvalidChildType)
            }
        }
    }
}
