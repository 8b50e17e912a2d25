//! Capture and restore editor workbench layouts as named presets
//!
//! A preset records where the sidebar and panel are docked and whether they
//! are shown. Presets are saved, listed, applied and deleted through a host
//! [`Workbench`] and persisted as one JSON array in a [`StateStore`] under
//! [`PRESETS_KEY`].
//!
//! # Known approximation
//!
//! The host cannot report current sidebar/panel visibility, so capture always
//! records `visible = true` and apply assumes both regions are shown. Applying
//! a preset saved with a hidden region always toggles it.
//!
//! # Examples
//!
//! ```ignore
//! use layout_presets::{FileStateStore, LayoutPresetManager};
//!
//! let mut store = FileStateStore::new("/tmp/state.json");
//! let mut manager = LayoutPresetManager::new(&mut my_workbench, &mut store);
//! manager.save_preset()?;
//! manager.apply_preset()?;
//! ```

#![warn(missing_docs)]

mod capture;
mod error;
mod manager;
mod settings;
mod store;
mod types;
mod workbench;

// Re-export all public types
pub use capture::{apply_layout, capture_layout, plan_transition};
pub use error::{Error, Result, SettingsError, StoreError, WorkbenchError};
pub use manager::{
    CommandOutcome, LayoutPresetManager, NO_PRESETS_MESSAGE, NO_SELECTION_MESSAGE,
    SAVE_CANCELLED_MESSAGE,
};
pub use settings::{EditorSettings, PANEL_LOCATION_KEYS, SIDEBAR_LOCATION_KEY};
pub use store::{
    add_preset, load_presets, remove_preset, save_presets, FileStateStore, MemoryStateStore,
    StateStore, PRESETS_KEY,
};
pub use types::{
    LayoutPreset, LayoutState, PanelLayout, PanelPosition, SidebarLayout, SidebarPosition,
};
pub use workbench::{PickItem, Workbench, WorkbenchCommand};
