//! Editor settings reading
//!
//! The editor keeps user configuration in a `settings.json` that allows
//! comments (JSONC). Only two layout settings are consulted; everything else
//! is carried along untouched for lookups.

use crate::error::{Result, SettingsError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Setting holding the sidebar side (`"left"` / `"right"`)
pub const SIDEBAR_LOCATION_KEY: &str = "workbench.sideBar.location";

/// Settings that may hold the panel edge, in lookup order
pub const PANEL_LOCATION_KEYS: [&str; 2] =
    ["workbench.panel.defaultLocation", "workbench.panel.location"];

/// Parsed editor settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSettings {
    values: Map<String, Value>,
}

impl EditorSettings {
    /// Parse JSONC settings text
    ///
    /// Comments and trailing commas are accepted, as the editor accepts them.
    /// Empty input yields empty settings.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let stripped = json_comments::StripComments::new(content.as_bytes());
        let mut stripped_bytes: Vec<u8> = std::io::Read::bytes(stripped)
            .collect::<std::io::Result<Vec<u8>>>()
            .map_err(|e| e.to_string())?;
        strip_trailing_commas(&mut stripped_bytes);

        let stripped_str =
            String::from_utf8(stripped_bytes).map_err(|e| format!("Invalid UTF-8: {}", e))?;

        if stripped_str.trim().is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_str(&stripped_str).map_err(|e| e.to_string())? {
            Value::Object(values) => Ok(Self { values }),
            _ => Err("settings root must be an object".to_string()),
        }
    }

    /// Load settings from `path`
    ///
    /// A missing file yields empty settings, so every lookup falls back to
    /// the host defaults.
    ///
    /// # Errors
    ///
    /// - `SettingsError::Io` if the file exists but cannot be read
    /// - `SettingsError::Parse` if the content is not a JSONC object
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No editor settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(SettingsError::Io)?;
        Self::parse(&content).map_err(|message| {
            SettingsError::Parse {
                path: path.to_path_buf(),
                message,
            }
            .into()
        })
    }

    /// String value of `key`
    ///
    /// The editor writes settings as flat dotted keys, so that form is tried
    /// first; nested objects (`{"workbench": {"sideBar": ...}}`) are the
    /// fallback. Non-string values are ignored.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.values.get(key) {
            return value.as_str();
        }

        let mut parts = key.split('.');
        let mut current = self.values.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        current.as_str()
    }
}

/// Blank out commas that directly precede a closing `}` or `]`
///
/// Runs after comment stripping, so only string literals need skipping.
fn strip_trailing_commas(bytes: &mut [u8]) {
    let mut in_string = false;
    let mut escaped = false;

    for i in 0..bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b',' => {
                let next = bytes[i + 1..]
                    .iter()
                    .copied()
                    .find(|c| !c.is_ascii_whitespace());
                if matches!(next, Some(b'}') | Some(b']')) {
                    bytes[i] = b' ';
                }
            }
            _ => {}
        }
    }
}
