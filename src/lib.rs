//! Assorted helpers for JSON-like values, sequences, sets, and text.
//!
//! The heart of the crate is the deep structural [`merge`]/[`clone_value`]
//! engine over [`serde_json::Value`] together with the collection utilities
//! in [`list`] and [`set`]. The remaining modules are small, context-free
//! helpers (number words, text casing, identifiers, MIME types, compression,
//! environment lookups) that share the same defensive conventions: absent
//! inputs travel as [`Option`], and the few fallible seams return
//! [`SundryResult`].
//!
//! # Example
//!
//! ```rust
//! use serde_json::{Value, json};
//! use sundry::merge;
//!
//! let base = json!({"server": {"host": "localhost", "port": 3000}});
//! let base = base.as_object().expect("object literal");
//!
//! let merged = merge(base, &[json!({"server": {"port": 4000}})]);
//! assert_eq!(
//!     Value::Object(merged),
//!     json!({"server": {"host": "localhost", "port": 4000}})
//! );
//! ```

pub mod compress;
pub mod env;
mod error;
pub mod id;
pub mod list;
pub mod merge;
pub mod mime;
pub mod number;
pub mod set;
pub mod text;

pub use error::{SundryError, SundryResult};
pub use list::{
    add_unique, for_each_key_value, includes_all, intersects, is_equal_list, list_difference,
    remove_item, shuffle, unlist,
};
pub use merge::{clone_value, merge, merge_into};
pub use mime::{CharSet, MimeType, add_char_set, infer_mime_type};
pub use set::{filter_set, find_in_set, map_set};
