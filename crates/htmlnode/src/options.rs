//! Configuration options for HTML rendering

/// Default nesting limit for [`RenderOptions::max_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for rendering a node tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest nesting level rendered before failing with
    /// [`HtmlNodeError::DepthExceeded`](crate::HtmlNodeError::DepthExceeded).
    /// The root is level 0.
    ///
    /// This only bounds rendering. Dropping a tree is iterative, but
    /// `Clone`, `==` and `Debug` recurse once per level and can still
    /// overflow the stack on very deep trees.
    pub max_depth: usize,
}

impl RenderOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
