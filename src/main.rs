use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use nestpath::cli::{self, Cli, Command};
use nestpath::settings::{load_settings, settings_file, Settings};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Cli::parse();
    let settings = load_settings(args.config.as_deref())?;
    nestpath::logging::init(args.verbose, &settings.log_filter);
    tracing::debug!("settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Get(get) => {
            cli::run_get(get, &settings, io::stdin().lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(check) => {
            let summary = cli::run_check(check, &settings, &mut out)?;
            Ok(if summary.all_passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::InitConfig => {
            let path = match &args.config {
                Some(p) => p.clone(),
                None => settings_file().context("could not determine a config directory")?,
            };
            cli::write_settings(&path, &Settings::default())?;
            writeln!(out, "Wrote {}", path.display())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
