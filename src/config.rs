use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::messages::Locale;

/// Directory (relative to the base directory) holding the bot application.
pub const APP_DIR: &str = "bot_app";
/// Entry script inside [`APP_DIR`].
pub const APP_SCRIPT: &str = "main.py";
/// Directory (relative to the base directory) holding a bundled interpreter.
pub const BUNDLED_PYTHON_DIR: &str = "python";

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub base_dir: PathBuf,    // dir of the launcher binary (or BOT_LAUNCHER_BASE_DIR)
    pub script_path: PathBuf, // base_dir/bot_app/main.py
    pub bundled_dir: PathBuf, // base_dir/python
}

impl LauncherConfig {
    /// Derive every path from an already-known base directory.
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            script_path: base_dir.join(APP_DIR).join(APP_SCRIPT),
            bundled_dir: base_dir.join(BUNDLED_PYTHON_DIR),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine launcher executable path: {0}")]
    PathResolution(String),
}

/// Build the launcher configuration from the running executable and the environment.
///
/// The base directory is the parent of `current_exe()` unless
/// `BOT_LAUNCHER_BASE_DIR` is set to a non-empty value. A relative override is
/// taken relative to the working directory, so the script path is always absolute.
pub fn launcher_config() -> Result<LauncherConfig, ConfigError> {
    let base_dir = match std::env::var_os("BOT_LAUNCHER_BASE_DIR") {
        Some(v) if !v.is_empty() => absolute_from(PathBuf::from(v), std::env::current_dir)?,
        _ => base_dir_of(std::env::current_exe())?,
    };

    Ok(LauncherConfig::for_base_dir(&base_dir))
}

/// Diagnostic language from `BOT_LAUNCHER_LANG`; Russian when unset or unrecognized.
pub fn locale_from_env() -> Locale {
    std::env::var("BOT_LAUNCHER_LANG")
        .map(|v| Locale::from_tag(&v))
        .unwrap_or_default()
}

fn absolute_from(
    path: PathBuf,
    cwd: impl FnOnce() -> std::io::Result<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = cwd().map_err(|e| ConfigError::PathResolution(e.to_string()))?;
    Ok(cwd.join(path))
}

fn base_dir_of(exe: std::io::Result<PathBuf>) -> Result<PathBuf, ConfigError> {
    let exe = exe.map_err(|e| ConfigError::PathResolution(e.to_string()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::PathResolution(format!("{} has no parent directory", exe.display())))
}
