//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for gcibatch using the `clap` crate.
//!
//! # Commands
//!
//! - **all**: run an action over every region and card slot
//! - **region**: run an action over both slots of one region
//! - **slot**: run an action over a single card directory
//! - **config**: show or change stored settings
//!
//! # Examples
//!
//! ```bash
//! gcibatch all --action verify
//! gcibatch region usa
//! gcibatch slot eur b --max-backup 3
//! gcibatch config set-base-dir ~/.local/share/dolphin-emu
//! ```

use crate::actions::ActionKind;
use crate::card::{Region, Slot};
use crate::commands::BatchScope;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// gcibatch command line
#[derive(Parser, Debug)]
#[command(name = "gcibatch", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print conflicts and errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Dolphin user directory (overrides config)
    #[arg(long = "base-dir", value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Maximum circular backup count passed to the action (overrides config)
    #[arg(
        long = "max-backup",
        value_name = "COUNT",
        global = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_backup: Option<u32>,
}

/// Selects the per-file action
#[derive(Args, Debug, Clone, Copy)]
pub struct ActionArgs {
    /// Action to apply to every symlinked save file
    #[arg(short = 'a', long = "action", value_enum, default_value_t = ActionKind::List)]
    pub action: ActionKind,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run over every region and card slot
    All {
        #[command(flatten)]
        action: ActionArgs,
    },

    /// Run over card slots A and B of one region
    #[command(visible_alias = "r")]
    Region {
        /// Region code
        #[arg(value_enum, ignore_case = true)]
        region: Region,

        #[command(flatten)]
        action: ActionArgs,
    },

    /// Run over one card directory
    #[command(visible_alias = "s")]
    Slot {
        /// Region code
        #[arg(value_enum, ignore_case = true)]
        region: Region,

        /// Card slot
        #[arg(value_enum, ignore_case = true)]
        slot: Slot,

        #[command(flatten)]
        action: ActionArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,
    /// Store the Dolphin user directory
    SetBaseDir {
        /// Directory containing `GC/`
        path: PathBuf,
    },
    /// Store the default maximum backup count
    SetMaxBackup {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Batch scope and action for run commands, `None` for `config`
    #[must_use]
    pub fn batch(&self) -> Option<(BatchScope, ActionKind)> {
        match self {
            Self::All { action } => Some((BatchScope::All, action.action)),
            Self::Region { region, action } => Some((BatchScope::Region(*region), action.action)),
            Self::Slot { region, slot, action } => {
                Some((BatchScope::Slot(*region, *slot), action.action))
            }
            Self::Config { .. } => None,
        }
    }
}
