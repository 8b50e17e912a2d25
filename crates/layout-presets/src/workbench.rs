//! Host workbench capability surface
//!
//! Presets never touch the editor directly. Everything they need from the
//! host (prompts, pickers, notifications, settings, commands) goes through
//! the [`Workbench`] trait.

use crate::error::Result;
use crate::types::PanelPosition;
use std::fmt;

/// A labeled entry in a single-choice picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    /// Primary text
    pub label: String,
    /// Secondary text shown beside the label
    pub detail: Option<String>,
}

impl PickItem {
    /// Creates an item with a label and no detail
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    /// Attaches secondary text
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Layout commands the host exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkbenchCommand {
    /// Flip the sidebar between left and right
    ToggleSidebarPosition,
    /// Show or hide the sidebar
    ToggleSidebarVisibility,
    /// Dock the panel to the given edge
    MovePanel(PanelPosition),
    /// Show or hide the panel
    TogglePanelVisibility,
}

impl WorkbenchCommand {
    /// Host command identifier
    pub fn id(self) -> &'static str {
        match self {
            Self::ToggleSidebarPosition => "workbench.action.toggleSidebarPosition",
            Self::ToggleSidebarVisibility => "workbench.action.toggleSidebarVisibility",
            Self::MovePanel(PanelPosition::Bottom) => "workbench.action.positionPanelBottom",
            Self::MovePanel(PanelPosition::Left) => "workbench.action.positionPanelLeft",
            Self::MovePanel(PanelPosition::Right) => "workbench.action.positionPanelRight",
            Self::TogglePanelVisibility => "workbench.action.togglePanel",
        }
    }
}

impl fmt::Display for WorkbenchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Capabilities provided by the host editor
///
/// Interactive methods return `Ok(None)` when the user dismisses the prompt;
/// that is a cancellation, not an error.
pub trait Workbench {
    /// Ask the user for a line of text
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Let the user choose one of `items`, returning its index
    fn pick(&mut self, placeholder: &str, items: &[PickItem]) -> Result<Option<usize>>;

    /// Show an informational message
    fn show_info(&mut self, message: &str) -> Result<()>;

    /// Read a host configuration value
    fn setting(&self, key: &str) -> Option<String>;

    /// Run a host command
    fn execute(&mut self, command: WorkbenchCommand) -> Result<()>;
}
