//! Deep merge of configuration trees
//!
//! Layering rules, applied recursively for every key of the source:
//!
//! - key missing in the destination: the source value is moved in
//! - both objects: merged key by key
//! - both arrays: merged position by position
//! - anything else: the source value replaces the destination value
//!
//! Positional array merge lets a later source patch a single element (say,
//! one field of `servers[0]`) without restating the whole list.

use crate::tree::{Map, Tree};

/// Merge `src` into `dst`, with `src` taking precedence on conflicts.
///
/// # Examples
///
/// ```
/// use layercfg_tree::{merge, Tree};
/// use serde_json::json;
///
/// let Tree::Object(mut dst) = Tree::from(json!({"list": [{"x": 1, "y": 2}]})) else { unreachable!() };
/// let Tree::Object(src) = Tree::from(json!({"list": [{"x": 9}]})) else { unreachable!() };
///
/// merge(&mut dst, src);
/// assert_eq!(Tree::Object(dst), Tree::from(json!({"list": [{"x": 9, "y": 2}]})));
/// ```
pub fn merge(dst: &mut Map, src: Map) {
    for (key, value) in src {
        match dst.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                dst.insert(key, value);
            }
        }
    }
}

/// Merge any two nodes.
///
/// Objects merge key by key, arrays position by position, and every other
/// combination (including mismatched container kinds) is a replacement.
pub fn merge_value(dst: &mut Tree, src: Tree) {
    match (dst, src) {
        (Tree::Object(dst_map), Tree::Object(src_map)) => merge(dst_map, src_map),
        (Tree::Array(dst_items), Tree::Array(src_items)) => merge_arrays(dst_items, src_items),
        (dst, src) => {
            tracing::trace!(from = %dst.kind(), to = %src.kind(), "replacing value");
            *dst = src;
        }
    }
}

/// Positional merge. Elements past the end of `dst` are appended to the
/// vector the enclosing slot owns, so growth is always visible to the parent.
fn merge_arrays(dst: &mut Vec<Tree>, src: Vec<Tree>) {
    for (index, value) in src.into_iter().enumerate() {
        match dst.get_mut(index) {
            Some(existing) => merge_value(existing, value),
            None => dst.push(value),
        }
    }
}
