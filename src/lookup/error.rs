use serde_json::Value;
use thiserror::Error;

/// Errors produced by the lookup entry points.
///
/// A missing key or a non-mapping value along the way is not an error: the
/// caller's default is returned instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The path argument was not a string.
    #[error("path must be a string, got {found}")]
    InvalidArgument { found: &'static str },
}

impl LookupError {
    pub fn invalid_argument(path: &Value) -> Self {
        LookupError::InvalidArgument {
            found: json_type_name(path),
        }
    }

    /// Short name of the variant, used by the scenario report.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidArgument { .. } => "InvalidArgument",
        }
    }
}

/// Name of the JSON type held by `value`.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_names_received_type() {
        let err = LookupError::invalid_argument(&json!(42));
        assert_eq!(err.to_string(), "path must be a string, got number");
        assert_eq!(err.kind(), "InvalidArgument");
    }

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!("s")), "string");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
