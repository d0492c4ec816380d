//! htmlnode - typed HTML node tree and markup rendering
//!
//! This crate is the rendering backbone of a static site generator. Tree
//! builders (for example a Markdown converter) assemble [`LeafNode`]s and
//! [`ParentNode`]s into a [`Node`] tree, and page assembly renders the root
//! into an HTML fragment.
//!
//! # Architecture
//!
//! ```text
//! Markdown converter ──builds──▶ ┌───────────┐
//!                                │ Node tree │ ──render──▶ HTML fragment
//! Page templates ───────builds──▶└───────────┘
//! ```
//!
//! # Escaping
//!
//! Text values and attribute values are written verbatim. Callers must
//! escape untrusted text before putting it into a node.
//!
//! # Nesting depth
//!
//! Rendering recurses once per level and fails with
//! [`HtmlNodeError::DepthExceeded`] past [`RenderOptions::max_depth`]
//! (default [`DEFAULT_MAX_DEPTH`]). Dropping a tree does not recurse.
//! `Clone`, `==` and `Debug` do, so on trees thousands of levels deep they
//! can overflow the stack and abort the process.
//!
//! # Example
//!
//! ```rust
//! use htmlnode::{Attributes, LeafNode, Node, ParentNode};
//!
//! let page = ParentNode::new(
//!     "div",
//!     vec![
//!         LeafNode::text("Hello ").into(),
//!         LeafNode::element("b", "World").into(),
//!     ],
//! )
//! .unwrap()
//! .with_attributes(Attributes::from([("class", "greeting")]));
//!
//! let html = Node::from(page).to_html().unwrap();
//! assert_eq!(html, r#"<div class="greeting">Hello <b>World</b></div>"#);
//! ```

mod attributes;
mod node;
mod options;
mod serialize;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, Node, ParentNode};
pub use options::{RenderOptions, DEFAULT_MAX_DEPTH};
pub use serialize::render;

/// Error type for node construction and rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlNodeError {
    #[error("Rendering is not implemented for a bare HtmlNode")]
    NotImplemented,

    #[error("Leaf node has no value")]
    InvalidValue,

    #[error("Tag cannot be empty")]
    EmptyTag,

    #[error("Children cannot be empty")]
    EmptyChildren,

    #[error("Children must be leaf or parent nodes")]
    InvalidChildType,

    #[error("Node tree is nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, HtmlNodeError>;
