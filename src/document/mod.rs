//! Loading root documents for lookups.
//!
//! Every supported format is read into a `serde_json::Value` so the lookup
//! code only ever sees one tree type.

pub mod format;

pub use format::Format;

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML: {0}")]
    Yaml(String),

    #[error("unknown document format `{0}` (expected json, toml or yaml)")]
    UnknownFormat(String),
}

/// Parse `text` as `format`.
pub fn parse_str(text: &str, format: Format) -> Result<Value, DocumentError> {
    let value = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Toml => from_toml(toml::from_str(text)?),
        Format::Yaml => {
            serde_saphyr::from_str(text).map_err(|e| DocumentError::Yaml(e.to_string()))?
        }
    };
    Ok(value)
}

// Datetimes become their RFC 3339 text; non-finite floats become null.
fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(d) => Value::String(d.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => Value::Object(
            table.into_iter().map(|(k, v)| (k, from_toml(v))).collect(),
        ),
    }
}

/// Read and parse the file at `path`.
///
/// When `format` is `None` it is guessed from the extension, falling back
/// to JSON.
pub fn load_file(path: &Path, format: Option<Format>) -> Result<Value, DocumentError> {
    let format = format
        .or_else(|| Format::from_path(path))
        .unwrap_or_default();
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loading {} as {}", path.display(), format);
    parse_str(&text, format)
}
