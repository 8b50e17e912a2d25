//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and a function to write it out.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Workbench Presets Configuration
#
# This file was auto-generated with default values.
# Uncomment and modify options to customize.
#
# Location: $XDG_CONFIG_HOME/workbench-presets/config.toml

# ==============================================================================
# Editor
# ==============================================================================

[editor]

# Path to the editor's user settings.json (comments allowed).
# Sidebar and panel locations are read from here when saving a preset.
# Empty means the platform default: <config dir>/Code/User/settings.json
# Tilde (~) is expanded to the user's home directory.
settings_path = ""

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Path to the state file holding saved presets.
# Empty means: <data dir>/workbench-presets/state.json
state_path = ""

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Log verbosity written to stderr. WBP_LOG overrides this.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"
"#;

/// Creates (or force-overwrites) the config file at `path`, or at the
/// default location when `path` is `None`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(path: Option<&Path>, force: bool) -> Result<PathBuf, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(xdg::config_path);

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path: path.clone() });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        xdg::ensure_dir(parent).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    Ok(())
}
