use directories_next::ProjectDirs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.toml";

/// Per-user configuration directory for nestpath, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nestpath").map(|d| d.config_dir().to_path_buf())
}

/// Location of the default settings file inside [`project_config_dir`].
pub fn settings_file() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
