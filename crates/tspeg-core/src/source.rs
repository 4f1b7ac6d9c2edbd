//! Owned tree of generated source text.
//!
//! The host compiler emits its parser as nested text fragments. This module
//! models that output as an owned tree: a [`SourceTree`] exclusively owns an
//! ordered list of children, each either a raw text fragment or a nested
//! tree. No node is ever referenced from two places, so restructuring is
//! plain ownership transfer.
//!
//! Leaves created by [`SourceTree::from_source`] carry a line/column origin
//! for downstream diagnostics; fragments synthesized during splicing do not.

use std::fmt;

/// Position of a fragment in the original generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub line: u32,
    pub column: u32,
}

/// A child of a [`SourceTree`]: raw text or a nested tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceChild {
    Text(String),
    Node(SourceTree),
}

impl From<&str> for SourceChild {
    fn from(text: &str) -> Self {
        SourceChild::Text(text.to_string())
    }
}

impl From<String> for SourceChild {
    fn from(text: String) -> Self {
        SourceChild::Text(text)
    }
}

impl From<SourceTree> for SourceChild {
    fn from(node: SourceTree) -> Self {
        SourceChild::Node(node)
    }
}

/// Container node owning an ordered list of source fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTree {
    origin: Option<Origin>,
    children: Vec<SourceChild>,
}

impl SourceTree {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container anchored to a position in the original
    /// generated source.
    pub fn with_origin(line: u32, column: u32) -> Self {
        Self {
            origin: Some(Origin { line, column }),
            children: Vec::new(),
        }
    }

    /// Split raw generated source into a tree of per-line text fragments,
    /// each anchored to its 1-based source line. Line terminators stay
    /// attached to their line so rendering reproduces the input exactly.
    pub fn from_source(source: &str) -> Self {
        let mut root = Self::new();
        let mut rest = source;
        let mut line = 1u32;
        while !rest.is_empty() {
            let (fragment, tail) = match rest.find('\n') {
                Some(idx) => rest.split_at(idx + 1),
                None => (rest, ""),
            };
            let mut node = Self::with_origin(line, 1);
            node.add(fragment);
            root.add(node);
            rest = tail;
            line += 1;
        }
        root
    }

    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// Append a child.
    pub fn add(&mut self, child: impl Into<SourceChild>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Insert a child before everything currently in the container.
    pub fn prepend(&mut self, child: impl Into<SourceChild>) -> &mut Self {
        self.children.insert(0, child.into());
        self
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[SourceChild] {
        &self.children
    }

    /// Take ownership of the children, leaving the container empty.
    pub fn take_children(&mut self) -> Vec<SourceChild> {
        std::mem::take(&mut self.children)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Display for SourceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            match child {
                SourceChild::Text(text) => f.write_str(text)?,
                SourceChild::Node(node) => write!(f, "{node}")?,
            }
        }
        Ok(())
    }
}
