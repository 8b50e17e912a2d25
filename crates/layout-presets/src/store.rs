//! Persisted key-value state and preset list storage
//!
//! The host gives each tool a small key-value store. `StateStore` models it;
//! `FileStateStore` backs it with one JSON object file and `MemoryStateStore`
//! keeps it in memory. The preset list lives under a single versioned key and
//! is always read fresh and written back wholesale.

use crate::error::{Result, StoreError};
use crate::types::LayoutPreset;
use chrono::Local;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key holding the serialized preset list
///
/// The `.v1` suffix versions the record format.
pub const PRESETS_KEY: &str = "layoutPresets.v1";

/// Key-value store scoped to this tool
pub trait StateStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value stored under `key`
    fn update(&mut self, key: &str, value: Value) -> Result<()>;

    /// Read the value stored under `key`, or `default` when absent
    fn get_or(&self, key: &str, default: Value) -> Result<Value> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}

/// In-memory state store
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStateStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn update(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// State store backed by a JSON object file
///
/// Every read goes to disk. Every update rewrites the whole file with the
/// temp-file-then-rename pattern.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a store at `path`. The file is created on first update.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path).map_err(StoreError::Io)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))? {
            Value::Object(map) => Ok(map),
            other => Err(StoreError::Parse(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))
            .into()),
        }
    }

    fn write_all(&self, map: Map<String, Value>) -> Result<()> {
        let path = &self.path;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "state.json".to_string());
        let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        let temp_path = path.with_file_name(format!("{}.tmp.{}", file_name, timestamp));

        let json = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        fs::write(&temp_path, json).map_err(StoreError::Io)?;

        let file = fs::File::open(&temp_path).map_err(StoreError::Io)?;
        file.sync_all().map_err(StoreError::Io)?;

        fs::rename(&temp_path, path).map_err(|_| StoreError::WriteAtomic {
            path: path.clone(),
            temp_path: temp_path.clone(),
        })?;

        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        log::debug!("Reading state key '{}' from {}", key, self.path.display());
        Ok(self.read_all()?.remove(key))
    }

    fn update(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(map)?;
        log::debug!("Wrote state key '{}' to {}", key, self.path.display());
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Load the preset list (empty when nothing has been saved)
///
/// # Errors
///
/// - `StoreError::InvalidValue` if the stored value is not a preset array
/// - Any error from the underlying store
pub fn load_presets<S: StateStore + ?Sized>(store: &S) -> Result<Vec<LayoutPreset>> {
    let value = store.get_or(PRESETS_KEY, Value::Array(Vec::new()))?;
    serde_json::from_value(value).map_err(|e| {
        StoreError::InvalidValue {
            key: PRESETS_KEY.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Persist the full preset list, replacing whatever was stored
pub fn save_presets<S: StateStore + ?Sized>(store: &mut S, presets: &[LayoutPreset]) -> Result<()> {
    let value = serde_json::to_value(presets).map_err(|e| StoreError::InvalidValue {
        key: PRESETS_KEY.to_string(),
        message: e.to_string(),
    })?;
    store.update(PRESETS_KEY, value)
}

/// Append a preset (pure function, no I/O)
pub fn add_preset(mut presets: Vec<LayoutPreset>, preset: LayoutPreset) -> Vec<LayoutPreset> {
    presets.push(preset);
    presets
}

/// Remove exactly one preset by position (pure function, no I/O)
///
/// An out-of-range index leaves the list unchanged.
pub fn remove_preset(mut presets: Vec<LayoutPreset>, index: usize) -> Vec<LayoutPreset> {
    if index < presets.len() {
        presets.remove(index);
    } else {
        log::warn!(
            "Ignoring removal of preset {} from a list of {}",
            index,
            presets.len()
        );
    }
    presets
}
