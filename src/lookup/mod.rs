//! Slash-delimited lookups into nested `serde_json::Value` mappings.
//!
//! `path` turns a raw path string into its segments, `resolve` walks a root
//! value along those segments and `error` holds the single failure a caller
//! can observe (a path that is not a string).

pub mod error;
pub mod path;
pub mod resolve;

pub use error::LookupError;
pub use path::{SegmentPath, DELIMITER};
pub use resolve::{get_or, lookup, resolve, resolve_value};
