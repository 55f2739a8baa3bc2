//! Show and edit the stored configuration

use crate::cli::ConfigCommands;
use crate::config::GcibatchConfig;
use crate::output::OutputWriter;
use crate::GcibatchError;
use std::path::Path;

type Result<T> = std::result::Result<T, GcibatchError>;

/// Execute a config subcommand against `config`, persisting changes to `path`
///
/// # Errors
/// Returns `GcibatchError::ConfigError` if a value is invalid or the file
/// cannot be written.
pub fn execute(
    config: &mut GcibatchConfig,
    command: &ConfigCommands,
    path: &Path,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            output.info(&format!("# {}", path.display()));
            let base_dir = config
                .base_dir
                .as_ref()
                .map_or_else(|| "(platform default)".to_string(), |p| p.display().to_string());
            output.write(&format!("base_dir = {base_dir}"));
            output.write(&format!("max_backup = {}", config.max_backup));
            output.write(&format!("quiet = {}", config.quiet));
        }
        ConfigCommands::SetBaseDir { path: base_dir } => {
            config.base_dir = Some(base_dir.clone());
            config.save_to(path)?;
            output.success(&format!("Base directory set to {}", base_dir.display()));
        }
        ConfigCommands::SetMaxBackup { count } => {
            config.set_max_backup(*count)?;
            config.save_to(path)?;
            output.success(&format!("Maximum backup count set to {count}"));
        }
    }
    Ok(())
}
