//! Location of the games file.
//!
//! Defaults to `~/.config/modshelf/Games.json` on Linux and
//! `%APPDATA%\modshelf\Games.json` on Windows.

use std::path::PathBuf;

/// Directory under the platform config base that holds the games file.
pub const APP_DIR: &str = "modshelf";

/// File name of the games document.
pub const GAMES_FILE_NAME: &str = "Games.json";

/// Where the registry keeps its backing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub games_file: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            games_file: config_base_dir().join(APP_DIR).join(GAMES_FILE_NAME),
        }
    }
}

impl RegistryConfig {
    /// Uses an explicit games file path.
    pub fn at(games_file: impl Into<PathBuf>) -> Self {
        Self {
            games_file: games_file.into(),
        }
    }
}

/// Per-user config directory. Falls back to `/tmp` when `HOME` is unset
/// (service accounts, minimal containers) and on other targets, so opening
/// the registry never fails on path resolution alone.
fn config_base_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home).join(".config")
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata)
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        PathBuf::from("/tmp")
    }
}
