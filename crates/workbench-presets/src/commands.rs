//! Dispatch of the preset subcommands onto the layout preset manager.

use layout_presets::{CommandOutcome, LayoutPresetManager, Result, StateStore, Workbench};

/// One of the four preset commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetCommand {
    /// Capture the current layout under a new name
    Save,
    /// Browse saved presets
    List,
    /// Restore a saved preset
    Apply,
    /// Remove a saved preset
    Delete,
}

/// Runs `command` against the given workbench and store.
pub fn run<W, S>(command: PresetCommand, workbench: &mut W, store: &mut S) -> Result<CommandOutcome>
where
    W: Workbench + ?Sized,
    S: StateStore + ?Sized,
{
    tracing::debug!("Running preset command {:?}", command);
    let mut manager = LayoutPresetManager::new(workbench, store);
    match command {
        PresetCommand::Save => manager.save_preset(),
        PresetCommand::List => manager.list_presets(),
        PresetCommand::Apply => manager.apply_preset(),
        PresetCommand::Delete => manager.delete_preset(),
    }
}
