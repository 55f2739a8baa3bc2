//! gcibatch CLI application entry point
//!
//! Runs a built-in per-file action over the GameCube memory card directories
//! of a Dolphin user directory and reports every conflicting save file.
//!
//! # Usage
//!
//! ```bash
//! # List every symlinked save in all regions (dry run)
//! gcibatch all
//!
//! # Check that every save link in the USA region resolves
//! gcibatch region usa --action verify
//!
//! # One card directory, with an explicit base directory
//! gcibatch slot eur a --base-dir ~/dolphin
//!
//! # Diagnostics
//! RUST_LOG=gcibatch=debug gcibatch all
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/gcibatch/config.toml` on Linux) and created on first run.

use gcibatch::{
    GcibatchError,
    cli::{Cli, Commands},
    commands,
    config::GcibatchConfig,
    logging,
    output::{OutputWriter, StdoutWriter},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, GcibatchError>;

fn run(cli: &Cli, output: &dyn OutputWriter, mut config: GcibatchConfig) -> Result<()> {
    if let Commands::Config { command } = &cli.command {
        let path = GcibatchConfig::config_path()?;
        return commands::config(&mut config, command, &path, output);
    }

    let (scope, kind) = cli
        .command
        .batch()
        .ok_or_else(|| GcibatchError::InvalidInput("Unsupported command".into()))?;
    let base_dir = config.resolve_base_dir(cli.base_dir.as_deref())?;
    let max_backup = cli.max_backup.unwrap_or(config.max_backup);

    commands::run(scope, kind, &base_dir, max_backup, output)
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse_args();
    let config = match GcibatchConfig::load() {
        Ok(config) => config,
        Err(e) => {
            StdoutWriter::new(cli.quiet).error(&format!("Configuration error: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let output = StdoutWriter::new(cli.quiet || config.quiet);
    report(run(&cli, &output, config), &output)
}

/// Map the outcome of a command to an exit code, printing errors not yet shown
fn report(result: Result<()>, output: &dyn OutputWriter) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        // conflicts were already listed file by file
        Err(GcibatchError::BatchError(e)) if e.is_conflict() => ExitCode::FAILURE,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
