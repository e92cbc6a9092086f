//! Command-line surface of the `nestpath` binary.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::document::{self, Format};
use crate::harness;
use crate::lookup;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "nestpath", version, about = "Look up values in nested documents by slash-delimited path")]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the value at PATH.
    Get(GetArgs),
    /// Run lookup scenarios and report pass/fail.
    Check(CheckArgs),
    /// Write a settings file with default values (refuses to overwrite).
    InitConfig,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Slash-delimited path, e.g. `a/b/c`. An empty path selects the whole document.
    pub path: String,

    /// Document to read; stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input format (json, toml, yaml). Guessed from the file extension when omitted.
    #[arg(long)]
    pub format: Option<Format>,

    /// Value printed when the path does not resolve. Parsed as JSON, or taken
    /// as a plain string when it is not valid JSON.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Scenario file (json, toml or yaml). Built-in scenarios when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub scenarios: Option<PathBuf>,
}

/// Interpret a `--default` argument.
pub fn parse_default(raw: Option<&str>) -> Value {
    match raw {
        None => Value::Null,
        Some(s) => serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_string())),
    }
}

/// Execute `get`, reading from `input` when no file is given.
pub fn run_get<R: Read, W: Write>(args: &GetArgs, settings: &Settings, mut input: R, out: &mut W) -> Result<()> {
    let root = match &args.file {
        Some(path) => {
            let format = args
                .format
                .or_else(|| Format::from_path(path))
                .unwrap_or(settings.default_format);
            document::load_file(path, Some(format))?
        }
        None => {
            let mut text = String::new();
            input.read_to_string(&mut text).context("failed to read stdin")?;
            document::parse_str(&text, args.format.unwrap_or(settings.default_format))?
        }
    };

    let default = parse_default(args.default.as_deref());
    let value = lookup::resolve(&root, &args.path, &default);
    let rendered = if args.compact || !settings.pretty {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Execute `check`. Returns the run's tally; the caller decides the exit code.
pub fn run_check<W: Write>(args: &CheckArgs, settings: &Settings, out: &mut W) -> Result<harness::Summary> {
    let source = args.scenarios.as_ref().or(settings.scenarios.as_ref());
    let scenarios = match source {
        Some(path) => harness::load_scenarios(path, settings.default_format)
            .with_context(|| format!("failed to load scenarios from {}", path.display()))?,
        None => harness::builtin_scenarios(),
    };
    let summary = harness::run_all(&scenarios, out)?;
    Ok(summary)
}

/// Write `settings` to `path` as TOML. An existing file is left alone and
/// reported as an error.
pub fn write_settings(path: &std::path::Path, settings: &Settings) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(settings).context("failed to serialise settings")?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn get_args(path: &str) -> GetArgs {
        GetArgs {
            path: path.to_string(),
            file: None,
            format: None,
            default: None,
            compact: true,
        }
    }

    fn run(args: &GetArgs, stdin: &str) -> String {
        let mut out = Vec::new();
        run_get(args, &Settings::default(), stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn default_argument_parsing() {
        assert_eq!(parse_default(None), Value::Null);
        assert_eq!(parse_default(Some("3")), json!(3));
        assert_eq!(parse_default(Some("{\"k\":1}")), json!({"k": 1}));
        assert_eq!(parse_default(Some("NOT FOUND")), json!("NOT FOUND"));
    }

    #[test]
    fn get_from_stdin() {
        let doc = r#"{"a":{"b":{"c":"d"}}}"#;
        assert_eq!(run(&get_args("a/b"), doc), "{\"c\":\"d\"}\n");
        assert_eq!(run(&get_args("a/x"), doc), "null\n");
    }

    #[test]
    fn get_uses_default_when_missing() {
        let mut args = get_args("a/x");
        args.default = Some("NOT FOUND".to_string());
        assert_eq!(run(&args, r#"{"a":{}}"#), "\"NOT FOUND\"\n");
    }

    #[test]
    fn get_from_yaml_stdin() {
        let mut args = get_args("a/b");
        args.format = Some(Format::Yaml);
        assert_eq!(run(&args, "a:\n  b: c\n"), "\"c\"\n");
    }

    #[test]
    fn settings_round_trip_through_file() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("cfg").join("settings.toml");
        let mut s = Settings::default();
        s.pretty = false;
        write_settings(&f, &s).unwrap();
        let back = crate::settings::load_settings_from(&f).unwrap();
        assert_eq!(back, s);
        assert!(write_settings(&f, &s).is_err());
    }

    #[test]
    fn check_reads_unknown_extension_with_default_format() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("cases.list");
        fs::write(
            &f,
            "[[scenarios]]\ndescription = \"toml\"\npath = \"a\"\nroot = { a = 1 }\nexpected = 1\n",
        )
        .unwrap();
        let mut settings = Settings::default();
        settings.default_format = Format::Toml;
        let args = CheckArgs { scenarios: Some(f) };
        let mut out = Vec::new();
        let summary = run_check(&args, &settings, &mut out).unwrap();
        assert_eq!(summary, harness::Summary { passed: 1, failed: 0 });
    }

    #[test]
    fn check_builtin_passes() {
        let mut out = Vec::new();
        let summary = run_check(&CheckArgs { scenarios: None }, &Settings::default(), &mut out).unwrap();
        assert!(summary.all_passed());
    }
}
