//! The four preset commands: save, list, apply, delete
//!
//! Each command loads the preset list fresh from the store, talks to the user
//! through the workbench, and (for save/delete) writes the whole list back.
//! Declined prompts and empty lists end the command with an informational
//! message instead of an error.

use crate::capture::{apply_layout, capture_layout};
use crate::error::Result;
use crate::store::{add_preset, load_presets, remove_preset, save_presets, StateStore};
use crate::types::LayoutPreset;
use crate::workbench::{PickItem, Workbench, WorkbenchCommand};
use chrono::Utc;

/// Message shown when list/apply/delete find nothing to work with
pub const NO_PRESETS_MESSAGE: &str = "No layout presets saved yet.";

/// Message shown when the save prompt is dismissed or left empty
pub const SAVE_CANCELLED_MESSAGE: &str = "Layout preset save cancelled.";

/// Message shown when list/apply/delete end without a selection
pub const NO_SELECTION_MESSAGE: &str = "No layout preset selected.";

/// How a preset command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A new preset was appended and persisted
    Saved(LayoutPreset),
    /// A preset was selected from the list and its name shown
    Shown(LayoutPreset),
    /// A preset was applied by issuing `commands`
    Applied {
        /// The applied preset
        preset: LayoutPreset,
        /// Commands sent to the host, in order
        commands: Vec<WorkbenchCommand>,
    },
    /// A preset was removed and the list persisted
    Deleted(LayoutPreset),
    /// The user declined a prompt; nothing changed
    Cancelled,
    /// There were no presets to operate on
    NoPresets,
}

/// Result of asking the user to pick a preset
enum Selection {
    /// Loaded list and the chosen position in it
    Chosen(Vec<LayoutPreset>, usize),
    /// The command ends here
    Done(CommandOutcome),
}

/// Runs preset commands against a host workbench and state store
pub struct LayoutPresetManager<'a, W: ?Sized, S: ?Sized> {
    workbench: &'a mut W,
    store: &'a mut S,
}

impl<'a, W, S> LayoutPresetManager<'a, W, S>
where
    W: Workbench + ?Sized,
    S: StateStore + ?Sized,
{
    /// Creates a manager borrowing the host and its store
    pub fn new(workbench: &'a mut W, store: &'a mut S) -> Self {
        Self { workbench, store }
    }

    /// Prompt for a name, capture the current layout and append it
    ///
    /// Names are trimmed and need not be unique.
    pub fn save_preset(&mut self) -> Result<CommandOutcome> {
        let name = self
            .workbench
            .prompt_text("Name for this layout preset")?
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let Some(name) = name else {
            self.workbench.show_info(SAVE_CANCELLED_MESSAGE)?;
            return Ok(CommandOutcome::Cancelled);
        };

        let layout = capture_layout(&*self.workbench);
        let preset = LayoutPreset::new(name, Utc::now(), layout);

        let presets = add_preset(load_presets(&*self.store)?, preset.clone());
        save_presets(&mut *self.store, &presets)?;
        log::info!(
            "Saved layout preset '{}' ({} total)",
            preset.name,
            presets.len()
        );

        self.workbench
            .show_info(&format!("Layout preset '{}' saved.", preset.name))?;
        Ok(CommandOutcome::Saved(preset))
    }

    /// Show saved presets and echo the selected one
    pub fn list_presets(&mut self) -> Result<CommandOutcome> {
        let (presets, index) = match self.select("Saved layout presets")? {
            Selection::Chosen(presets, index) => (presets, index),
            Selection::Done(outcome) => return Ok(outcome),
        };
        let preset = presets[index].clone();

        self.workbench
            .show_info(&format!("Layout preset: {}", preset.name))?;
        Ok(CommandOutcome::Shown(preset))
    }

    /// Let the user pick a preset and bring the workbench to it
    ///
    /// Nothing is persisted.
    pub fn apply_preset(&mut self) -> Result<CommandOutcome> {
        let (presets, index) = match self.select("Select a layout preset to apply")? {
            Selection::Chosen(presets, index) => (presets, index),
            Selection::Done(outcome) => return Ok(outcome),
        };
        let preset = presets[index].clone();

        let commands = apply_layout(&mut *self.workbench, &preset.layout())?;
        log::info!(
            "Applied layout preset '{}' with {} command(s)",
            preset.name,
            commands.len()
        );

        self.workbench
            .show_info(&format!("Layout preset '{}' applied.", preset.name))?;
        Ok(CommandOutcome::Applied { preset, commands })
    }

    /// Let the user pick a preset and remove exactly that entry
    pub fn delete_preset(&mut self) -> Result<CommandOutcome> {
        let (presets, index) = match self.select("Select a layout preset to delete")? {
            Selection::Chosen(presets, index) => (presets, index),
            Selection::Done(outcome) => return Ok(outcome),
        };
        let removed = presets[index].clone();

        let presets = remove_preset(presets, index);
        save_presets(&mut *self.store, &presets)?;
        log::info!(
            "Deleted layout preset '{}' ({} left)",
            removed.name,
            presets.len()
        );

        self.workbench
            .show_info(&format!("Layout preset '{}' deleted.", removed.name))?;
        Ok(CommandOutcome::Deleted(removed))
    }

    /// Load the list and ask the user to pick one entry
    fn select(&mut self, placeholder: &str) -> Result<Selection> {
        let presets = load_presets(&*self.store)?;
        if presets.is_empty() {
            self.workbench.show_info(NO_PRESETS_MESSAGE)?;
            return Ok(Selection::Done(CommandOutcome::NoPresets));
        }

        let items: Vec<PickItem> = presets
            .iter()
            .map(|p| PickItem::new(p.name.clone()).with_detail(p.display_timestamp()))
            .collect();

        match self.workbench.pick(placeholder, &items)? {
            Some(index) if index < presets.len() => return Ok(Selection::Chosen(presets, index)),
            Some(index) => log::warn!(
                "Host returned pick index {} for {} item(s); treating as cancelled",
                index,
                presets.len()
            ),
            None => {}
        }

        self.workbench.show_info(NO_SELECTION_MESSAGE)?;
        Ok(Selection::Done(CommandOutcome::Cancelled))
    }
}
