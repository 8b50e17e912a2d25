//! Configuration file loader with position-aware error reporting.
//!
//! Loads TOML configuration from a specific path or the default XDG location.
//! When the default location has no file, returns `Config::default()`.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Stateless configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or
    /// `ConfigError::ReadError` for other I/O failures.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse_toml(&content, path)
    }

    /// Load configuration from the default XDG location.
    ///
    /// If no file exists at the default path, returns `Config::default()`
    /// instead of an error.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse a TOML string into `Config` with position-aware error reporting.
    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map(|span| {
                    let line = content[..span.start].matches('\n').count() + 1;
                    let last_newline = content[..span.start]
                        .rfind('\n')
                        .map(|p| p + 1)
                        .unwrap_or(0);
                    let column = span.start - last_newline + 1;
                    (line, column)
                })
                .unwrap_or((0, 0));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
    fn with_xdg_config<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        match value {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    fn parse_valid_full_config() {
        let toml_str = r#"
[editor]
settings_path = "/custom/settings.json"

[storage]
state_path = "/custom/state.json"

[logging]
level = "debug"
"#;
        let path = PathBuf::from("test.toml");
        let config = ConfigLoader::parse_toml(toml_str, &path).expect("valid TOML should parse");
        assert_eq!(config.editor.settings_path, "/custom/settings.json");
        assert_eq!(config.storage.state_path, "/custom/state.json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_empty_string_returns_defaults() {
        let path = PathBuf::from("empty.toml");
        let config =
            ConfigLoader::parse_toml("", &path).expect("empty string should parse to defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let toml_str = r#"
[logging]
level = "info"
"#;
        let path = PathBuf::from("partial.toml");
        let config = ConfigLoader::parse_toml(toml_str, &path).expect("partial config should parse");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.storage, Config::default().storage);
    }

    #[test]
    fn parse_type_error_reports_position() {
        let toml_str = "[logging]\nlevel = 5\n";
        let path = PathBuf::from("bad.toml");
        let err = ConfigLoader::parse_toml(toml_str, &path).expect_err("should fail");
        match err {
            ConfigError::ParseError { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("expected ParseError, got: {other:?}"),
        }
    }

    #[test]
    fn load_from_missing_path_is_not_found() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("absent.toml");
        match ConfigLoader::load(Some(path.as_path())) {
            Err(ConfigError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    #[serial(env)]
    fn load_default_without_file_returns_defaults() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(Some(tmp.path().to_str().expect("non-utf8 tmpdir")), || {
            let config = ConfigLoader::load(None).expect("missing default file is fine");
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial(env)]
    fn load_default_reads_existing_file() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("workbench-presets");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), "[logging]\nlevel = \"trace\"\n").expect("write");

        with_xdg_config(Some(tmp.path().to_str().expect("non-utf8 tmpdir")), || {
            let config = ConfigLoader::load_default().expect("should load");
            assert_eq!(config.logging.level, "trace");
        });
    }
}
