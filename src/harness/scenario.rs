use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use std::path::Path;

use crate::document::{self, DocumentError, Format};

/// What a scenario expects `resolve_value` to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    Value(Value),
    /// The call must fail with `InvalidArgument`.
    InvalidArgument,
}

/// One literal lookup case.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub description: String,
    pub root: Value,
    /// Kept as a dynamic value so non-string paths can be exercised.
    pub path: Value,
    pub default: Value,
    pub expect: Expectation,
}

impl Scenario {
    pub fn new(description: &str, root: Value, path: &str, default: Value, expected: Value) -> Self {
        Scenario {
            description: description.to_string(),
            root,
            path: Value::String(path.to_string()),
            default,
            expect: Expectation::Value(expected),
        }
    }
}

// On-disk shape of a scenario. `expected` must tell "absent" apart from an
// explicit `null`, hence the custom deserializer.
#[derive(Deserialize)]
struct RawScenario {
    description: String,
    #[serde(default)]
    root: Value,
    path: Value,
    #[serde(default)]
    default: Value,
    #[serde(default, deserialize_with = "present")]
    expected: Option<Value>,
    #[serde(default)]
    expect_error: bool,
}

#[derive(Deserialize)]
struct ScenarioFile {
    scenarios: Vec<RawScenario>,
}

fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("malformed scenario list: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("scenario `{0}` sets both `expected` and `expect_error`")]
    Conflicting(String),
}

impl TryFrom<RawScenario> for Scenario {
    type Error = ScenarioError;

    fn try_from(raw: RawScenario) -> Result<Self, Self::Error> {
        let expect = match (raw.expected, raw.expect_error) {
            (Some(_), true) => return Err(ScenarioError::Conflicting(raw.description)),
            (None, true) => Expectation::InvalidArgument,
            // TOML has no null, so an absent `expected` means null.
            (expected, false) => Expectation::Value(expected.unwrap_or(Value::Null)),
        };
        Ok(Scenario {
            description: raw.description,
            root: raw.root,
            path: raw.path,
            default: raw.default,
            expect,
        })
    }
}

/// Build scenarios from an already-parsed document with a top-level
/// `scenarios` array.
pub fn scenarios_from_value(doc: Value) -> Result<Vec<Scenario>, ScenarioError> {
    let file: ScenarioFile = serde_json::from_value(doc)?;
    file.scenarios.into_iter().map(Scenario::try_from).collect()
}

/// Read a scenario file in any supported document format. `fallback` is
/// used when the extension does not name a format.
pub fn load_scenarios(path: &Path, fallback: Format) -> Result<Vec<Scenario>, ScenarioError> {
    let format = Format::from_path(path).unwrap_or(fallback);
    let doc = document::load_file(path, Some(format))?;
    let scenarios = scenarios_from_value(doc)?;
    tracing::info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// The scenarios shipped with the binary.
pub fn builtin_scenarios() -> Vec<Scenario> {
    let abc = || json!({"a": {"b": {"c": "d"}}});
    let mut list = vec![
        Scenario::new("challenge example #1", abc(), "a/b/c", Value::Null, json!("d")),
        Scenario::new("challenge example #2", json!({"x": {"y": {"z": "a"}}}), "x/y/z", Value::Null, json!("a")),
        Scenario::new("non-existent key returns default", abc(), "a/x/y", Value::Null, Value::Null),
        Scenario::new("empty object", json!({}), "a/b/c", Value::Null, Value::Null),
        Scenario::new("partial path returns nested object", abc(), "a/b", Value::Null, json!({"c": "d"})),
        Scenario::new("custom default value", abc(), "a/x", json!("NOT FOUND"), json!("NOT FOUND")),
        Scenario::new("leading/trailing slashes ignored", json!({"a": {"b": "c"}}), "/a/b/", Value::Null, json!("c")),
        Scenario::new("non-object intermediate returns default", json!({"a": 1}), "a/b", Value::Null, Value::Null),
        Scenario::new("repeated slashes are ignored", abc(), "a//b///c", Value::Null, json!("d")),
        Scenario::new("empty path returns original object", abc(), "", Value::Null, abc()),
        Scenario::new("found null is not the default", json!({"a": null}), "a", json!("fallback"), Value::Null),
    ];
    list.push(Scenario {
        description: "non-string path is rejected".to_string(),
        root: abc(),
        path: json!(42),
        default: Value::Null,
        expect: Expectation::InvalidArgument,
    });
    list
}
