//! TOML configuration schema types for workbench-presets.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial or empty file is valid. Empty path
//! strings mean "use the platform default".

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::xdg;

/// Root configuration encompassing all sections.
///
/// ```toml
/// [editor]
/// [storage]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where the editor keeps its settings.
    pub editor: EditorConfig,
    /// Where presets are persisted.
    pub storage: StorageConfig,
    /// Log verbosity.
    pub logging: LoggingConfig,
}

impl Config {
    /// Editor `settings.json` path, falling back to the platform default.
    pub fn settings_path(&self) -> PathBuf {
        if self.editor.settings_path.is_empty() {
            xdg::editor_settings_path()
        } else {
            xdg::expand_tilde(&self.editor.settings_path)
        }
    }

    /// State file path, falling back to the XDG data directory.
    pub fn state_path(&self) -> PathBuf {
        if self.storage.state_path.is_empty() {
            xdg::state_path()
        } else {
            xdg::expand_tilde(&self.storage.state_path)
        }
    }
}

/// Editor integration settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Path to the editor's user `settings.json` (JSONC). Tilde is expanded.
    /// Empty means `<config dir>/Code/User/settings.json`.
    pub settings_path: String,
}

/// Persistence settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the key-value state file. Tilde is expanded.
    /// Empty means `<data dir>/workbench-presets/state.json`.
    pub state_path: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `WBP_LOG` is unset.
    /// Options: "error", "warn", "info", "debug", "trace".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logging_level_is_warn() {
        assert_eq!(Config::default().logging.level, "warn");
    }

    #[test]
    fn explicit_paths_are_used() {
        let config = Config {
            editor: EditorConfig {
                settings_path: "/opt/editor/settings.json".to_string(),
            },
            storage: StorageConfig {
                state_path: "/var/lib/wbp/state.json".to_string(),
            },
            logging: LoggingConfig::default(),
        };
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/opt/editor/settings.json")
        );
        assert_eq!(config.state_path(), PathBuf::from("/var/lib/wbp/state.json"));
    }

    #[test]
    fn tilde_paths_are_expanded() {
        let home = dirs::home_dir().expect("could not determine home directory");
        let config = Config {
            storage: StorageConfig {
                state_path: "~/presets.json".to_string(),
            },
            ..Config::default()
        };
        assert_eq!(config.state_path(), home.join("presets.json"));
    }

    #[test]
    fn serializes_all_sections() {
        let rendered = toml::to_string(&Config::default()).expect("serialize");
        assert!(rendered.contains("[editor]"));
        assert!(rendered.contains("[storage]"));
        assert!(rendered.contains("[logging]"));
    }
}
