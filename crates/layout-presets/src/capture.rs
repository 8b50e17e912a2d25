//! Layout capture and apply
//!
//! The host cannot report whether the sidebar or panel is currently shown,
//! so capture records both as visible. Apply diffs the target against that
//! same observation and issues toggle-style commands only for fields that
//! differ. A preset saved with a hidden region therefore always fires its
//! visibility toggle.

use crate::error::Result;
use crate::settings::{PANEL_LOCATION_KEYS, SIDEBAR_LOCATION_KEY};
use crate::types::{LayoutState, PanelLayout, PanelPosition, SidebarLayout, SidebarPosition};
use crate::workbench::{Workbench, WorkbenchCommand};

/// Read the current layout from host settings
///
/// Sidebar defaults to `left`, panel to `bottom` when the settings are
/// absent or unrecognized. Visibility is always `true`.
pub fn capture_layout<W: Workbench + ?Sized>(workbench: &W) -> LayoutState {
    let sidebar_position = workbench
        .setting(SIDEBAR_LOCATION_KEY)
        .and_then(|v| SidebarPosition::from_setting(&v))
        .unwrap_or_default();

    let panel_position = PANEL_LOCATION_KEYS
        .iter()
        .find_map(|key| {
            workbench
                .setting(key)
                .and_then(|v| PanelPosition::from_setting(&v))
        })
        .unwrap_or_default();

    LayoutState {
        sidebar: SidebarLayout {
            position: sidebar_position,
            visible: true,
            size: None,
        },
        panel: PanelLayout {
            position: panel_position,
            visible: true,
            size: None,
        },
    }
}

/// Commands that move `current` to `target` (pure function)
///
/// Order: sidebar position, sidebar visibility, panel position, panel
/// visibility. Sizes are not compared.
pub fn plan_transition(current: &LayoutState, target: &LayoutState) -> Vec<WorkbenchCommand> {
    let mut commands = Vec::new();

    if current.sidebar.position != target.sidebar.position {
        commands.push(WorkbenchCommand::ToggleSidebarPosition);
    }
    if current.sidebar.visible != target.sidebar.visible {
        commands.push(WorkbenchCommand::ToggleSidebarVisibility);
    }
    if current.panel.position != target.panel.position {
        commands.push(WorkbenchCommand::MovePanel(target.panel.position));
    }
    if current.panel.visible != target.panel.visible {
        commands.push(WorkbenchCommand::TogglePanelVisibility);
    }

    commands
}

/// Bring the live workbench to `target`
///
/// Returns the commands that were issued. Stops at the first command the
/// host rejects.
pub fn apply_layout<W: Workbench + ?Sized>(
    workbench: &mut W,
    target: &LayoutState,
) -> Result<Vec<WorkbenchCommand>> {
    let current = capture_layout(&*workbench);
    let commands = plan_transition(&current, target);

    for command in &commands {
        log::debug!("Executing {}", command);
        workbench.execute(*command)?;
    }

    Ok(commands)
}
