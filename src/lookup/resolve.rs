use serde_json::Value;

use super::error::LookupError;
use super::path::SegmentPath;

/// Resolve `path` inside `root`, falling back to `default`.
///
/// Behaviour:
/// - A path with no segments (`""`, `"/"`, `"///"`) returns `root` itself.
/// - Each segment descends one level into a JSON object by exact key match.
/// - If a step meets a value that is not an object, or the key is absent,
///   `default` is returned and the remaining segments are ignored.
/// - A value found at the end of the path is returned as-is, `null`
///   included.
pub fn resolve<'a>(root: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    lookup(root, path).unwrap_or(default)
}

/// Like [`resolve`] but takes the path as a dynamic value.
///
/// A path that is not a JSON string is rejected with
/// [`LookupError::InvalidArgument`] before `root` is looked at.
pub fn resolve_value<'a>(
    root: &'a Value,
    path: &Value,
    default: &'a Value,
) -> Result<&'a Value, LookupError> {
    let path = path
        .as_str()
        .ok_or_else(|| LookupError::invalid_argument(path))?;
    Ok(resolve(root, path, default))
}

/// Find the value at `path`, or `None` when the path cannot be followed.
///
/// `Some(&Value::Null)` means a null was found, which is different from
/// `None`.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = SegmentPath::parse(path);
    let found = walk(root, &segments);
    tracing::trace!(path = %segments, depth = segments.len(), found = found.is_some(), "lookup");
    found
}

/// Owned variant of [`resolve`]: clones the found value or hands back
/// `default`.
pub fn get_or(root: &Value, path: &str, default: Value) -> Value {
    match lookup(root, path) {
        Some(v) => v.clone(),
        None => default,
    }
}

fn walk<'a>(root: &'a Value, path: &SegmentPath<'_>) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}
