//! Path traversal: reading and writing nodes inside a tree

use crate::error::{Error, Result};
use crate::handle::ValueHandle;
use crate::path::{Segment, SegmentKind, parse_path, render_path};
use crate::tree::{Kind, Tree};

/// Get the node at `path`.
///
/// Any structural miss (wrong node kind, missing key, out-of-range or
/// unparsable index) yields an absent handle. The empty path addresses
/// `tree` itself.
///
/// # Examples
///
/// ```
/// use layercfg_tree::{get, Tree};
/// use serde_json::json;
///
/// let tree = Tree::from(json!({"servers": [{"host": "a"}, {"host": "b"}]}));
/// assert_eq!(get(&tree, "servers[1].host"), "b");
/// assert!(get(&tree, "servers[2].host").is_nil());
/// assert!(get(&tree, "servers.host").is_nil());
/// ```
pub fn get<'a>(tree: &'a Tree, path: &str) -> ValueHandle<'a> {
    get_segments(tree, &parse_path(path))
}

/// Get the node addressed by already-parsed segments.
pub fn get_segments<'a>(tree: &'a Tree, segments: &[Segment]) -> ValueHandle<'a> {
    let mut current = tree;

    for segment in segments {
        let next = match (segment.kind, current) {
            (SegmentKind::Key, Tree::Object(map)) => map.get(&segment.value),
            (SegmentKind::Index, Tree::Array(items)) => segment
                .parse_index()
                .ok()
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| items.get(index)),
            (SegmentKind::Key, Tree::Array(_) | Tree::Scalar(_))
            | (SegmentKind::Index, Tree::Object(_) | Tree::Scalar(_)) => None,
        };

        match next {
            Some(node) => current = node,
            None => return ValueHandle::absent(),
        }
    }

    ValueHandle::borrowed(current)
}

/// Get the node at `path`, or `fallback` when it is absent or null.
///
/// ```
/// use layercfg_tree::{get_default, Tree};
/// use serde_json::json;
///
/// let tree = Tree::from(json!({"db": {"port": null}}));
/// assert_eq!(get_default(&tree, "db.port", 5432).to_int(), 5432);
/// assert_eq!(get_default(&tree, "db.host", "localhost"), "localhost");
/// ```
pub fn get_default<'a>(tree: &'a Tree, path: &str, fallback: impl Into<Tree>) -> ValueHandle<'a> {
    let value = get(tree, path);
    if value.is_nil() {
        ValueHandle::owned(fallback.into())
    } else {
        value
    }
}

/// Set the node at `path`, creating missing intermediate containers.
///
/// A missing (or null) intermediate node becomes an empty object when the
/// following segment is a key, or an empty array when it is an index. An
/// array may grow by exactly one slot: writing at index `len` appends.
///
/// Writes are not transactional. Containers created before a failing
/// segment stay in place.
///
/// # Errors
///
/// - [`Error::InvalidType`] when a node is not the container kind a segment requires
/// - [`Error::IndexOutOfRange`] when an index is negative or greater than the array length
/// - [`Error::InvalidIndex`] when index text is not an integer
/// - [`Error::EmptyPath`] when the path has no segments
///
/// # Examples
///
/// ```
/// use layercfg_tree::{get, set, Error, Tree};
///
/// let mut tree = Tree::object();
/// set(&mut tree, "mytest.version[0]", "1.0.0").unwrap();
/// assert_eq!(get(&tree, "mytest.version[0]"), "1.0.0");
///
/// let err = set(&mut tree, "mytest.version[5]", "x").unwrap_err();
/// assert!(matches!(err, Error::IndexOutOfRange { .. }));
/// ```
pub fn set(tree: &mut Tree, path: &str, value: impl Into<Tree>) -> Result<()> {
    set_segments(tree, &parse_path(path), value.into())
}

/// Set the node addressed by already-parsed segments.
///
/// The chain of mutable borrows held while descending is the stack of
/// visited containers: a grown array is always the one its parent slot
/// owns, so growth never has to be patched back into an ancestor.
pub fn set_segments(tree: &mut Tree, segments: &[Segment], value: Tree) -> Result<()> {
    if segments.is_empty() {
        return Err(Error::EmptyPath);
    }

    let mut current = tree;

    for (position, segment) in segments.iter().enumerate() {
        let at = || render_path(&segments[..=position]);
        let found = current.kind();
        // The last segment is the leaf regardless of its flag
        let is_leaf = position + 1 == segments.len();

        let slot = match segment.kind {
            SegmentKind::Key => {
                let Tree::Object(map) = current else {
                    return Err(Error::InvalidType {
                        path: at(),
                        expected: Kind::Object,
                        found,
                    });
                };

                if is_leaf {
                    map.insert(segment.value.clone(), value);
                    return Ok(());
                }

                map.entry(segment.value.clone()).or_insert(Tree::NULL)
            }
            SegmentKind::Index => {
                let index = segment.parse_index().map_err(|_| Error::InvalidIndex {
                    path: at(),
                    index: segment.value.clone(),
                })?;

                let Tree::Array(items) = current else {
                    return Err(Error::InvalidType {
                        path: at(),
                        expected: Kind::Array,
                        found,
                    });
                };

                let len = items.len();
                let slot_index = usize::try_from(index)
                    .ok()
                    .filter(|slot_index| *slot_index <= len)
                    .ok_or_else(|| Error::IndexOutOfRange {
                        path: at(),
                        index,
                        len,
                    })?;

                if slot_index == len {
                    tracing::trace!(path = %at(), len, "growing array by one slot");
                    items.push(Tree::NULL);
                }

                if is_leaf {
                    items[slot_index] = value;
                    return Ok(());
                }

                &mut items[slot_index]
            }
        };

        if slot.is_null() {
            *slot = match segments[position + 1].kind {
                SegmentKind::Key => Tree::object(),
                SegmentKind::Index => Tree::array(),
            };
        }

        current = slot;
    }

    Ok(())
}
