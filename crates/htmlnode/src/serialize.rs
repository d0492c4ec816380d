//! HTML node serialization
//!
//! Converts a node tree into an HTML fragment. Output is written into a
//! single buffer; text and attribute values are copied verbatim.

use crate::node::{LeafNode, Node, ParentNode};
use crate::options::RenderOptions;
use crate::{HtmlNodeError, Result};

/// Serialize a node and its subtree to an HTML string
pub fn render(node: &Node, options: &RenderOptions) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_node(node, options, 0, &mut output)?;
    Ok(output)
}

/// A leaf with no tag, or an empty one, renders as raw text
pub(crate) fn is_blank_tag(tag: Option<&str>) -> bool {
    tag.map_or(true, str::is_empty)
}

fn serialize_node(
    node: &Node,
    options: &RenderOptions,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    match node {
        Node::Leaf(leaf) => serialize_leaf(leaf, out),
        Node::Parent(parent) => serialize_parent(parent, options, depth, out),
    }
}

pub(crate) fn serialize_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    // An empty string is a value; only a missing one is rejected.
    let Some(value) = leaf.value() else {
        log::debug!("leaf node {:?} has no value", leaf.tag());
        return Err(HtmlNodeError::InvalidValue);
    };

    match leaf.tag() {
        tag if is_blank_tag(tag) => out.push_str(value),
        tag => {
            let tag = tag.unwrap_or_default();
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push_str(value);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
    Ok(())
}

pub(crate) fn serialize_parent(
    parent: &ParentNode,
    options: &RenderOptions,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if depth > options.max_depth {
        log::debug!("node tree exceeds {} levels", options.max_depth);
        return Err(HtmlNodeError::DepthExceeded {
            limit: options.max_depth,
        });
    }

    let tag = parent.tag();
    if tag.is_empty() {
        return Err(HtmlNodeError::EmptyTag);
    }
    let children = parent.children();
    if children.is_empty() {
        log::debug!("<{}> has no children to render", tag);
        return Err(HtmlNodeError::EmptyChildren);
    }

    log::trace!("rendering <{}> with {} children at depth {}", tag, children.len(), depth);

    out.push('<');
    out.push_str(tag);
    if let Some(attrs) = parent.attributes() {
        attrs.write_html(out);
    }
    out.push('>');

    for child in children {
        serialize_node(child, options, depth + 1, out)?;
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}
