//! Path-addressable configuration tree for layercfg
//!
//! Holds hierarchical configuration data (objects and arrays nesting to
//! arbitrary depth) and exposes dot/bracket path access for reading,
//! writing and deep-merging values.
//!
//! - **Path parser**: `servers[0].host` → ordered [`Segment`]s
//! - **Navigator**: [`get`], [`get_default`] and [`set`] over a [`Tree`]
//! - **Merge engine**: [`merge`] layers one object tree onto another
//! - **Value handle**: [`ValueHandle`] with total, non-panicking coercions
//!
//! # Example
//!
//! ```
//! use layercfg_tree::Content;
//! use serde_json::json;
//!
//! let mut content = Content::try_from(json!({"db": {"port": 5432}})).unwrap();
//! assert_eq!(content.get("db.port").to_int(), 5432);
//! assert!(content.get("db.host").is_nil());
//!
//! content.set("db.host", "localhost").unwrap();
//! assert_eq!(content.get("db.host").to_string(), "localhost");
//! ```

pub mod content;
pub mod error;
pub mod handle;
pub mod merge;
pub mod navigate;
pub mod path;
pub mod tree;

pub use content::Content;
pub use error::{Error, Result};
pub use handle::ValueHandle;
pub use merge::{merge, merge_value};
pub use navigate::{get, get_default, get_segments, set, set_segments};
pub use path::{Segment, SegmentKind, parse_path, render_path};
pub use tree::{Kind, Map, Scalar, Tree};
