//! Workbench Presets - CLI entry point
//!
//! Saves, lists, applies and deletes editor layout presets from the terminal.
//! Prompts and messages go to stdout along with `run <command-id>` lines for
//! every workbench command an apply issues. Logs go to stderr.

use clap::{Parser, Subcommand};
use layout_presets::{CommandOutcome, EditorSettings, FileStateStore};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use workbench_presets::commands::{self, PresetCommand};
use workbench_presets::config::loader::ConfigLoader;
use workbench_presets::config::schema::Config;
use workbench_presets::config::{default, xdg};
use workbench_presets::logging;
use workbench_presets::terminal::TerminalWorkbench;

/// Editor layout preset manager
#[derive(Parser)]
#[command(name = "wbp")]
#[command(version, about = "Save and restore editor workbench layouts")]
struct Cli {
    /// Configuration file (defaults to the XDG config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the wbp CLI
#[derive(Subcommand)]
enum Commands {
    /// Save the current layout as a named preset
    Save,
    /// List saved presets
    List,
    /// Apply a saved preset
    Apply,
    /// Delete a saved preset
    Delete,
    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Save => run_preset_command(PresetCommand::Save, config_path),
        Commands::List => run_preset_command(PresetCommand::List, config_path),
        Commands::Apply => run_preset_command(PresetCommand::Apply, config_path),
        Commands::Delete => run_preset_command(PresetCommand::Delete, config_path),
        Commands::Config { action } => run_config_command(action, config_path),
    }
}

/// Loads configuration, then runs one preset command on stdin/stdout.
fn run_preset_command(command: PresetCommand, config_path: Option<&Path>) -> ExitCode {
    let config = match ConfigLoader::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging.level);
    match config_path {
        Some(path) => tracing::debug!("Loaded configuration from {}", path.display()),
        None => tracing::debug!(
            "Loaded configuration from {} (defaults if absent)",
            xdg::config_path().display()
        ),
    }

    // Not fatal: capture falls back to left/bottom.
    let settings_path = config.settings_path();
    let settings = EditorSettings::load(&settings_path).unwrap_or_else(|e| {
        tracing::warn!("{e}; using default layout settings");
        EditorSettings::default()
    });
    let mut store = FileStateStore::new(config.state_path());
    tracing::debug!(
        "Using settings {} and state {}",
        settings_path.display(),
        store.path().display()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut workbench = TerminalWorkbench::new(stdin.lock(), stdout.lock(), settings);

    match commands::run(command, &mut workbench, &mut store) {
        Ok(CommandOutcome::Cancelled) => {
            tracing::debug!("Command cancelled by user");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_config_command(action: ConfigAction, config_path: Option<&Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(config_path, force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Validate => match ConfigLoader::load(config_path) {
            Ok(config) => {
                print_config(&config);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_config(config: &Config) {
    println!("Configuration is valid");
    println!("  Settings:    {}", config.settings_path().display());
    println!("  State:       {}", config.state_path().display());
    println!("  Log level:   {}", config.logging.level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_preset_subcommands_parse() {
        for arg in ["save", "list", "apply", "delete"] {
            let result = Cli::try_parse_from(["wbp", arg]);
            assert!(result.is_ok(), "failed to parse {arg}");
        }
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["wbp", "list", "--config", "/tmp/wbp.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/wbp.toml")));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["wbp", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Init { force },
            } => assert!(force),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_flag_defaults_to_none() {
        let cli = Cli::try_parse_from(["wbp", "config", "path"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Path
            }
        ));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["wbp", "rename"]).is_err());
    }
}
