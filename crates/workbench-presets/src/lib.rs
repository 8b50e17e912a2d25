//! Workbench Presets library
//!
//! Terminal front end for the `layout-presets` engine: configuration,
//! logging setup, a line-oriented workbench host and command dispatch
//! used by the `wbp` binary.

/// Preset command dispatch.
pub mod commands;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

/// Line-oriented terminal workbench.
pub mod terminal;
