//! The content store: one object-rooted tree addressed by paths

use crate::error::{Error, Result};
use crate::handle::ValueHandle;
use crate::merge::merge_value;
use crate::navigate;
use crate::tree::{Map, Tree};

/// A configuration store rooted at an object.
///
/// Created empty, filled by one [`merge`](Content::merge) per loaded source
/// in priority order (later sources win), mutated by
/// [`set`](Content::set) and read by [`get`](Content::get).
///
/// `Content` imposes no locking of its own; `&mut self` on the writers is
/// the single-writer rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    // Always a `Tree::Object`: every constructor checks it, and `set`
    // rejects the empty path so it never replaces the root itself.
    root: Tree,
}

impl Content {
    pub fn new() -> Self {
        Self::from_object(Map::new())
    }

    pub fn from_object(root: Map) -> Self {
        Self {
            root: Tree::Object(root),
        }
    }

    /// Read the node at `path`; see [`navigate::get`].
    pub fn get(&self, path: &str) -> ValueHandle<'_> {
        navigate::get(&self.root, path)
    }

    /// Read the node at `path`, or `fallback` when absent or null.
    pub fn get_default(&self, path: &str, fallback: impl Into<Tree>) -> ValueHandle<'_> {
        navigate::get_default(&self.root, path, fallback)
    }

    /// Write `value` at `path`; see [`navigate::set`].
    pub fn set(&mut self, path: &str, value: impl Into<Tree>) -> Result<()> {
        navigate::set(&mut self.root, path, value)
    }

    /// Write a top-level key verbatim, without path parsing.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tree>) {
        if let Tree::Object(map) = &mut self.root {
            map.insert(key.into(), value.into());
        }
    }

    /// Layer `other` on top of this store.
    pub fn merge(&mut self, other: Content) {
        merge_value(&mut self.root, other.root);
    }

    /// Layer an arbitrary tree on top of this store.
    ///
    /// # Errors
    ///
    /// [`Error::NotAnObject`] when `tree` is not an object.
    pub fn merge_tree(&mut self, tree: Tree) -> Result<()> {
        let other = Content::try_from(tree)?;
        self.merge(other);
        Ok(())
    }

    /// The root node, always an object
    pub fn root(&self) -> &Tree {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.as_object().is_none_or(Map::is_empty)
    }

    pub fn into_tree(self) -> Tree {
        self.root
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.root.to_json()
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Tree> for Content {
    type Error = Error;

    fn try_from(tree: Tree) -> Result<Self> {
        match tree {
            Tree::Object(root) => Ok(Self::from_object(root)),
            other => Err(Error::NotAnObject {
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for Content {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Content::try_from(Tree::from(value))
    }
}

impl From<Map> for Content {
    fn from(root: Map) -> Self {
        Self::from_object(root)
    }
}
