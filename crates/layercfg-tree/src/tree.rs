//! The configuration tree data model
//!
//! A [`Tree`] is exactly one of an object, an array or a scalar leaf. Every
//! traversal matches on it exhaustively, so a container-kind mismatch is an
//! explicit branch rather than a failed cast.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Object node storage. Key order carries no meaning; a sorted map keeps
/// rendering deterministic.
pub type Map = BTreeMap<String, Tree>;

/// A leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
    /// A decoder-supplied leaf with no native mapping (e.g. a TOML datetime)
    Opaque { kind: String, repr: String },
}

/// A configuration tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Object(Map),
    Array(Vec<Tree>),
    Scalar(Scalar),
}

/// The runtime kind of a node, used in error reports and coercions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Boolean(_) => Kind::Boolean,
            Self::Null => Kind::Null,
            Self::Opaque { .. } => Kind::Opaque,
        }
    }

    pub fn opaque(kind: impl Into<String>, repr: impl Into<String>) -> Self {
        Self::Opaque {
            kind: kind.into(),
            repr: repr.into(),
        }
    }
}

/// Natural textual form of a leaf. Null renders as the empty string.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
            Self::Opaque { repr, .. } => f.write_str(repr),
        }
    }
}

impl Tree {
    pub const NULL: Tree = Tree::Scalar(Scalar::Null);

    /// An empty object node
    pub fn object() -> Self {
        Self::Object(Map::new())
    }

    /// An empty array node
    pub fn array() -> Self {
        Self::Array(Vec::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Self::Object(_) => Kind::Object,
            Self::Array(_) => Kind::Array,
            Self::Scalar(scalar) => scalar.kind(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Tree]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Deep-merge `other` into this node; see [`crate::merge_value`].
    pub fn merge(&mut self, other: Tree) {
        crate::merge::merge_value(self, other);
    }

    /// Convert into a JSON value.
    ///
    /// Opaque leaves become their textual representation and non-finite
    /// floats become `null`, since JSON has no way to express either.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Self::Array(items) => Value::Array(items.iter().map(Tree::to_json).collect()),
            Self::Scalar(Scalar::String(s)) => Value::String(s.clone()),
            Self::Scalar(Scalar::Integer(i)) => Value::from(*i),
            Self::Scalar(Scalar::Float(x)) => serde_json::Number::from_f64(*x)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Scalar(Scalar::Boolean(b)) => Value::Bool(*b),
            Self::Scalar(Scalar::Null) => Value::Null,
            Self::Scalar(Scalar::Opaque { repr, .. }) => Value::String(repr.clone()),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::NULL,
            Value::Bool(b) => Self::Scalar(Scalar::Boolean(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Scalar(Scalar::Integer(i))
                } else {
                    // u64 beyond i64::MAX, or a genuine float
                    Self::Scalar(Scalar::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Array(items.into_iter().map(Tree::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Tree::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Scalar> for Tree {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Map> for Tree {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl From<Vec<Tree>> for Tree {
    fn from(items: Vec<Tree>) -> Self {
        Self::Array(items)
    }
}

impl From<&str> for Tree {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Tree {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Tree {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Integer(i))
    }
}

impl From<i32> for Tree {
    fn from(i: i32) -> Self {
        Self::Scalar(Scalar::Integer(i64::from(i)))
    }
}

impl From<u32> for Tree {
    fn from(i: u32) -> Self {
        Self::Scalar(Scalar::Integer(i64::from(i)))
    }
}

impl From<f64> for Tree {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<bool> for Tree {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Boolean(b))
    }
}

impl<T: Into<Tree>> From<Option<T>> for Tree {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NULL, Into::into)
    }
}
