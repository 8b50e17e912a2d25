//! Platform-aware path resolution for workbench-presets.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/workbench-presets` or `~/.config/workbench-presets`
//! - Data: `$XDG_DATA_HOME/workbench-presets` or `~/.local/share/workbench-presets`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/workbench-presets` or `~/Library/Application Support/workbench-presets`
//! - Data: `$XDG_DATA_HOME/workbench-presets` or `~/Library/Application Support/workbench-presets`

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "workbench-presets";

/// Returns the configuration directory for workbench-presets.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/workbench-presets` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/workbench-presets`
///    - macOS: `~/Library/Application Support/workbench-presets`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory holding persisted tool state.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/workbench-presets` (if env var set, any platform)
/// 2. Platform data directory (`dirs::data_dir()`)
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    dirs::data_dir()
        .expect("could not determine data directory")
        .join(APP_NAME)
}

/// Returns the default path of the key-value state file.
pub fn state_path() -> PathBuf {
    data_dir().join("state.json")
}

/// Returns the default path of the editor's user `settings.json`.
///
/// Resolves to `<config base>/Code/User/settings.json`, honoring
/// `$XDG_CONFIG_HOME` like the editor itself does. Without it the base is
/// `dirs::config_dir()`: `~/.config` on Linux, `~/Library/Application Support`
/// on macOS, `%APPDATA%` on Windows.
pub fn editor_settings_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs::config_dir().expect("could not determine config directory"));
    base.join("Code").join("User").join("settings.json")
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().expect("could not determine home directory");
        home.join(rest)
    } else if path == "~" {
        dirs::home_dir().expect("could not determine home directory")
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
///
/// Equivalent to `mkdir -p` with restricted permissions.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper: run a closure with env vars temporarily set, then restore.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        f();

        for (k, original) in &originals {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial(env)]
    fn test_config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/workbench-presets/config.toml")
            );
        });
    }

    #[test]
    #[serial(env)]
    fn test_config_path_without_xdg_uses_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = platform_config_dir().join("workbench-presets/config.toml");
            assert_eq!(config_path(), expected);
        });
    }

    #[test]
    #[serial(env)]
    fn test_state_path_with_xdg_override() {
        with_env(&[("XDG_DATA_HOME", Some("/custom/data"))], || {
            assert_eq!(
                state_path(),
                PathBuf::from("/custom/data/workbench-presets/state.json")
            );
        });
    }

    #[test]
    #[serial(env)]
    fn test_editor_settings_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                editor_settings_path(),
                PathBuf::from("/custom/config/Code/User/settings.json")
            );
        });
    }

    #[test]
    #[serial(env)]
    fn test_editor_settings_path_without_xdg_uses_os_config_dir() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = dirs::config_dir()
                .expect("could not determine config directory")
                .join("Code")
                .join("User")
                .join("settings.json");
            assert_eq!(editor_settings_path(), expected);
        });
    }

    #[test]
    fn test_expand_tilde_with_home_prefix() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~/foo"), home.join("foo"));
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_tilde_bare_tilde() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~"), home);
    }

    #[test]
    fn test_ensure_dir_creates_directory() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_dir_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("secure");
        ensure_dir(&dir).expect("ensure_dir failed");
        let mode = fs::metadata(&dir)
            .expect("failed to read metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
