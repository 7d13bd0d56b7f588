//! Centralized configuration paths for reqline
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/reqline/`
//! - Windows: `%APPDATA%\reqline\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

const APP_DIR: &str = "reqline";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "reqline.log";

/// Base config directory for reqline
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/reqline`
///   - Else: `~/.config/reqline`
///
/// Windows:
///   - `%APPDATA%\reqline`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/reqline/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/reqline/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().ok_or_else(|| anyhow!("no config directory available"))?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
