//! Scenario runner: executes literal lookup cases in order and prints a
//! pass/fail block for each, followed by a tally.

pub mod report;
pub mod scenario;

pub use report::Summary;
pub use scenario::{builtin_scenarios, load_scenarios, Expectation, Scenario, ScenarioError};

use serde_json::Value;
use std::io::{self, Write};

use crate::lookup::{resolve_value, LookupError};

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub got: Result<Value, LookupError>,
    pub passed: bool,
}

/// Run a single scenario. Errors from the lookup are captured in the
/// outcome rather than propagated.
pub fn run_scenario(scenario: &Scenario) -> Outcome {
    let got = resolve_value(&scenario.root, &scenario.path, &scenario.default).cloned();
    let passed = match (&scenario.expect, &got) {
        (Expectation::Value(want), Ok(v)) => want == v,
        (Expectation::InvalidArgument, Err(LookupError::InvalidArgument { .. })) => true,
        _ => false,
    };
    Outcome { got, passed }
}

/// Run every scenario in order, writing the report to `out`.
pub fn run_all<W: Write>(scenarios: &[Scenario], out: &mut W) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for (i, scenario) in scenarios.iter().enumerate() {
        let outcome = run_scenario(scenario);
        if outcome.passed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
            tracing::warn!("scenario {} failed: {}", i + 1, scenario.description);
        }
        report::write_outcome(out, i + 1, scenario, &outcome)?;
    }
    report::write_summary(out, &summary)?;
    Ok(summary)
}
