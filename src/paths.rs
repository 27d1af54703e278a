//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! credential file sits in the same place on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "deeplcmd";

/// Returns the configuration directory for deeplcmd.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/deeplcmd` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/deeplcmd` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Returns the path of the saved credential file.
pub fn credentials_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("credentials"))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
