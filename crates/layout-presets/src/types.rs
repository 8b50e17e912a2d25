//! Core domain types for layout-presets
//!
//! This module defines the types that model a workbench layout: sidebar and
//! panel placement, the observed `LayoutState`, and the saved `LayoutPreset`.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the window the primary sidebar is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    /// Docked left (host default)
    #[default]
    Left,
    /// Docked right
    Right,
}

impl SidebarPosition {
    /// Parse a host setting value (`"left"` / `"right"`)
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Host setting string for this position
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for SidebarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge of the window the bottom panel is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    /// Docked bottom (host default)
    #[default]
    Bottom,
    /// Docked left
    Left,
    /// Docked right
    Right,
}

impl PanelPosition {
    /// Parse a host setting value (`"bottom"` / `"left"` / `"right"`)
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Host setting string for this position
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for PanelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sidebar placement and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLayout {
    /// Docked side
    pub position: SidebarPosition,
    /// Whether the sidebar is shown
    pub visible: bool,
    /// Width in pixels. Never captured; the host exposes no read API for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Panel placement and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Docked edge
    pub position: PanelPosition,
    /// Whether the panel is shown
    pub visible: bool,
    /// Height or width in pixels. Never captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// A full workbench layout, observed or desired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Primary sidebar
    pub sidebar: SidebarLayout,
    /// Bottom panel
    pub panel: PanelLayout,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            sidebar: SidebarLayout {
                position: SidebarPosition::Left,
                visible: true,
                size: None,
            },
            panel: PanelLayout {
                position: PanelPosition::Bottom,
                visible: true,
                size: None,
            },
        }
    }
}

/// A named, timestamped layout snapshot
///
/// Presets are immutable once saved. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPreset {
    /// User-assigned name
    pub name: String,
    /// Capture time (RFC 3339 on disk)
    pub timestamp: DateTime<Utc>,
    /// Sidebar placement
    pub sidebar: SidebarLayout,
    /// Panel placement
    pub panel: PanelLayout,
}

impl LayoutPreset {
    /// Build a preset from a captured layout
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>, layout: LayoutState) -> Self {
        Self {
            name: name.into(),
            timestamp,
            sidebar: layout.sidebar,
            panel: layout.panel,
        }
    }

    /// The layout this preset restores
    pub fn layout(&self) -> LayoutState {
        LayoutState {
            sidebar: self.sidebar,
            panel: self.panel,
        }
    }

    /// Capture time rendered in local time for pickers
    pub fn display_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
