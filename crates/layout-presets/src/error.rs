//! Error types for layout-presets
//!
//! This module defines the error hierarchy using thiserror for structured
//! error handling across the state store, editor settings, and the host
//! workbench.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// State store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Editor settings error
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Host workbench error
    #[error(transparent)]
    Workbench(#[from] WorkbenchError),
}

/// Persisted state store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading the state file
    #[error("Failed to read state: {0}")]
    Io(#[source] std::io::Error),

    /// State file is not a JSON object
    #[error("Failed to parse state: {0}")]
    Parse(String),

    /// Value stored under a key has the wrong shape
    #[error("Invalid value for state key '{key}': {message}")]
    InvalidValue {
        /// The state key
        key: String,
        /// Deserialization failure
        message: String,
    },

    /// Failed to write the state file atomically
    #[error("Failed to write state atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Path to the state file
        path: PathBuf,
        /// Path to the temporary safety copy
        temp_path: PathBuf,
    },
}

/// Editor settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error reading settings
    #[error("Failed to read editor settings: {0}")]
    Io(#[source] std::io::Error),

    /// Failed to parse settings file
    #[error("Failed to parse editor settings {path}: {message}")]
    Parse {
        /// Path to the settings file
        path: PathBuf,
        /// Parser message
        message: String,
    },
}

/// Host workbench errors
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// Interaction with the user failed (closed terminal, broken pipe)
    #[error("Workbench interaction failed: {0}")]
    Interaction(#[source] std::io::Error),

    /// The host refused or failed to run a command
    #[error("Workbench command '{command}' failed: {message}")]
    Command {
        /// Host command identifier
        command: String,
        /// Host-provided failure message
        message: String,
    },
}

/// Result type alias for layout-presets operations
pub type Result<T> = std::result::Result<T, Error>;
