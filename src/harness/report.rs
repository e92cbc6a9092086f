use serde_json::Value;
use std::io::{self, Write};

use super::scenario::{Expectation, Scenario};
use super::Outcome;

const RULE_WIDTH: usize = 40;

/// Tally of a scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

fn show_path(path: &Value) -> String {
    match path {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn show_expected(expect: &Expectation) -> String {
    match expect {
        Expectation::Value(v) => v.to_string(),
        Expectation::InvalidArgument => "<exception: InvalidArgument>".to_string(),
    }
}

/// Write the block for a single scenario.
pub fn write_outcome<W: Write>(out: &mut W, index: usize, scenario: &Scenario, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "Test {}: {}", index, scenario.description)?;
    writeln!(
        out,
        "  Input: {}, path='{}', default={}",
        scenario.root,
        show_path(&scenario.path),
        scenario.default
    )?;
    writeln!(out, "  Expected: {}", show_expected(&scenario.expect))?;
    match &outcome.got {
        Ok(v) => writeln!(out, "  Got: {}", v)?,
        Err(e) => writeln!(out, "  Got: <exception: {}>", e.kind())?,
    }
    writeln!(out, "  Status: {}", if outcome.passed { "PASSED" } else { "FAILED" })?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Write the closing tally.
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "Results: {}/{} tests passed", summary.passed, summary.total())?;
    if summary.all_passed() {
        writeln!(out, "[SUCCESS] - all tests passed")
    } else {
        writeln!(out, "[FAILED] - {} test(s) failed", summary.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;
    use serde_json::json;

    fn render(scenario: &Scenario, outcome: &Outcome) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, 3, scenario, outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn passed_block_layout() {
        let s = Scenario::new("leaf", json!({"a": "b"}), "/a", Value::Null, json!("b"));
        let o = Outcome { got: Ok(json!("b")), passed: true };
        let text = render(&s, &o);
        let expected = format!(
            "Test 3: leaf\n  Input: {{\"a\":\"b\"}}, path='/a', default=null\n  Expected: \"b\"\n  Got: \"b\"\n  Status: PASSED\n{}\n",
            "-".repeat(40)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn error_is_shown_as_exception() {
        let s = Scenario::new("bad", json!({}), "a", Value::Null, Value::Null);
        let o = Outcome {
            got: Err(LookupError::invalid_argument(&json!(1))),
            passed: false,
        };
        let text = render(&s, &o);
        assert!(text.contains("  Got: <exception: InvalidArgument>\n"));
        assert!(text.contains("  Status: FAILED\n"));
    }

    #[test]
    fn summary_lines() {
        let mut buf = Vec::new();
        write_summary(&mut buf, &Summary { passed: 2, failed: 1 }).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Results: 2/3 tests passed\n[FAILED] - 1 test(s) failed\n"
        );

        let mut buf = Vec::new();
        write_summary(&mut buf, &Summary { passed: 4, failed: 0 }).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("[SUCCESS] - all tests passed\n"));
    }
}
