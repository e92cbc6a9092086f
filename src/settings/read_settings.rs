use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::document::Format;

/// User settings for the `nestpath` binary.
///
/// Every field has a default so a partial (or absent) settings file is
/// fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directive used when neither
    /// `RUST_LOG` nor `-v` is given.
    pub log_filter: String,
    /// Pretty-print JSON results.
    pub pretty: bool,
    /// Format assumed for input that has no recognisable extension.
    pub default_format: Format,
    /// Scenario file used by `check` when none is passed on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_filter: "warn".to_string(),
            pretty: true,
            default_format: Format::Json,
            scenarios: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load settings from an explicit file. A missing file yields defaults; a
/// file that exists but does not parse is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from `explicit` when given, otherwise from the per-user
/// settings file, otherwise defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    match explicit {
        Some(p) => load_settings_from(p),
        None => match super::config_dirs::settings_file() {
            Some(p) => load_settings_from(&p),
            None => Ok(Settings::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let td = TempDir::new().unwrap();
        let s = load_settings_from(&td.path().join("nope.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("settings.toml");
        fs::write(&f, "pretty = false\ndefault_format = \"yaml\"\n").unwrap();
        let s = load_settings(Some(&f)).unwrap();
        assert!(!s.pretty);
        assert_eq!(s.default_format, Format::Yaml);
        assert_eq!(s.log_filter, "warn");
        assert_eq!(s.scenarios, None);
    }

    #[test]
    fn malformed_file_is_error() {
        let td = TempDir::new().unwrap();
        let f = td.path().join("settings.toml");
        fs::write(&f, "pretty = [").unwrap();
        let err = load_settings_from(&f).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
