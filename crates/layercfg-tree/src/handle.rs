//! Type-coercing value handles returned by reads

use std::borrow::Cow;
use std::fmt;

use crate::tree::{Kind, Scalar, Tree};

/// An immutable view of one tree node, or of nothing at all.
///
/// Handles are produced by [`get`](crate::get) and never fail: a missing
/// path yields an *absent* handle, which compares equal to null. Every
/// accessor is total and reports a type mismatch as a zero value (or
/// `None` for the `try_*` variants) instead of panicking.
#[derive(Debug, Clone)]
pub struct ValueHandle<'a> {
    node: Option<Cow<'a, Tree>>,
}

impl<'a> ValueHandle<'a> {
    /// A handle wrapping nothing
    pub fn absent() -> Self {
        Self { node: None }
    }

    pub fn borrowed(node: &'a Tree) -> Self {
        Self {
            node: Some(Cow::Borrowed(node)),
        }
    }

    pub fn owned(node: Tree) -> Self {
        Self {
            node: Some(Cow::Owned(node)),
        }
    }

    /// True iff the handle is absent or wraps a null scalar
    pub fn is_nil(&self) -> bool {
        self.as_tree().is_none_or(Tree::is_null)
    }

    /// True iff the path resolved to a node (which may itself be null)
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        self.node.as_deref()
    }

    pub fn into_owned(self) -> Option<Tree> {
        self.node.map(Cow::into_owned)
    }

    pub fn kind(&self) -> Option<Kind> {
        self.as_tree().map(Tree::kind)
    }

    fn scalar(&self) -> Option<&Scalar> {
        self.as_tree().and_then(Tree::as_scalar)
    }

    /// The wrapped string, without any coercion
    pub fn as_str(&self) -> Option<&str> {
        match self.scalar()? {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn try_int(&self) -> Option<i64> {
        match self.scalar()? {
            Scalar::Integer(i) => Some(*i),
            Scalar::Float(x) => float_to_int(*x),
            Scalar::Boolean(b) => Some(i64::from(*b)),
            Scalar::String(s) => parse_int(s),
            Scalar::Null | Scalar::Opaque { .. } => None,
        }
    }

    /// Integer value, or `0` when the node is missing or not numeric
    pub fn to_int(&self) -> i64 {
        self.try_int().unwrap_or(0)
    }

    pub fn try_float(&self) -> Option<f64> {
        match self.scalar()? {
            Scalar::Integer(i) => Some(*i as f64),
            Scalar::Float(x) => Some(*x),
            Scalar::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::String(s) => s.trim().parse::<f64>().ok(),
            Scalar::Null | Scalar::Opaque { .. } => None,
        }
    }

    /// Float value, or `0.0` when the node is missing or not numeric
    pub fn to_float(&self) -> f64 {
        self.try_float().unwrap_or(0.0)
    }

    pub fn try_bool(&self) -> Option<bool> {
        match self.scalar()? {
            Scalar::Boolean(b) => Some(*b),
            Scalar::Integer(i) => Some(*i != 0),
            Scalar::Float(x) => Some(*x != 0.0),
            Scalar::String(s) => parse_bool(s),
            Scalar::Null | Scalar::Opaque { .. } => None,
        }
    }

    /// Boolean value, or `false` when the node is missing or not boolean-like
    pub fn to_bool(&self) -> bool {
        self.try_bool().unwrap_or(false)
    }

    /// JSON rendering of the wrapped node; absent renders as `null`
    pub fn to_json(&self) -> serde_json::Value {
        self.as_tree()
            .map_or(serde_json::Value::Null, Tree::to_json)
    }
}

impl Default for ValueHandle<'_> {
    fn default() -> Self {
        Self::absent()
    }
}

fn float_to_int(x: f64) -> Option<i64> {
    if x.is_nan() {
        return None;
    }
    // `as` truncates toward zero and saturates at the i64 bounds
    Some(x as i64)
}

fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Scalars render naturally, containers as compact JSON, nil as `""`.
impl fmt::Display for ValueHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_tree() {
            None => Ok(()),
            Some(Tree::Scalar(scalar)) => fmt::Display::fmt(scalar, f),
            Some(container) => write!(f, "{}", container.to_json()),
        }
    }
}

impl PartialEq for ValueHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_tree(), other.as_tree()) {
            (Some(a), Some(b)) => a == b,
            _ => self.is_nil() && other.is_nil(),
        }
    }
}

impl PartialEq<Tree> for ValueHandle<'_> {
    fn eq(&self, other: &Tree) -> bool {
        match self.as_tree() {
            Some(node) => node == other,
            None => other.is_null(),
        }
    }
}

impl PartialEq<&str> for ValueHandle<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for ValueHandle<'_> {
    fn eq(&self, other: &i64) -> bool {
        matches!(self.scalar(), Some(Scalar::Integer(i)) if i == other)
    }
}

impl PartialEq<bool> for ValueHandle<'_> {
    fn eq(&self, other: &bool) -> bool {
        matches!(self.scalar(), Some(Scalar::Boolean(b)) if b == other)
    }
}
