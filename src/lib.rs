pub mod cli;
pub mod document;
pub mod harness;
pub mod logging;
pub mod lookup;
pub mod settings;

pub use crate::lookup::{get_or, lookup, resolve, resolve_value, LookupError, SegmentPath};
