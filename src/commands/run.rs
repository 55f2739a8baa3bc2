//! Run a built-in action over card directories

use crate::actions::{ActionKind, BuiltinAction};
use crate::batch::{self, BatchError};
use crate::card::{Region, Slot};
use crate::config::validate_max_backup;
use crate::output::OutputWriter;
use crate::GcibatchError;
use std::fmt;
use std::path::Path;

type Result<T> = std::result::Result<T, GcibatchError>;

/// Which card directories a run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchScope {
    All,
    Region(Region),
    Slot(Region, Slot),
}

impl fmt::Display for BatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all regions"),
            Self::Region(region) => write!(f, "region {region}"),
            Self::Slot(region, slot) => write!(f, "{region} card {slot}"),
        }
    }
}

/// Apply `kind` to every save file in `scope` under `base_dir`.
///
/// Conflicts are written to `output` file by file before being returned.
///
/// # Errors
/// * `GcibatchError::InvalidInput` if `base_dir` has no `GC` directory.
/// * `GcibatchError::ConfigError` if `max_backup` is zero.
/// * `GcibatchError::BatchError` for the first failing card directory.
pub fn execute(
    scope: BatchScope,
    kind: ActionKind,
    base_dir: &Path,
    max_backup: u32,
    output: &dyn OutputWriter,
) -> Result<()> {
    validate_max_backup(max_backup)?;
    if !base_dir.join("GC").is_dir() {
        return Err(GcibatchError::InvalidInput(format!(
            "No GC directory found in {}",
            base_dir.display()
        )));
    }

    let mut action = BuiltinAction::new(kind, output);
    let result = match scope {
        BatchScope::All => batch::run_all(&mut action, base_dir, max_backup),
        BatchScope::Region(region) => batch::run_region(&mut action, base_dir, region, max_backup),
        BatchScope::Slot(region, slot) => {
            batch::run_slot(&mut action, base_dir, region, slot, max_backup)
        }
    };

    match result {
        Ok(()) => {
            output.success(&format!(
                "{} save file(s) processed in {scope}",
                action.applied()
            ));
            Ok(())
        }
        Err(BatchError::Conflict { directory, failures }) => {
            output.error(&format!("File conflicts in {}:", directory.display()));
            for failure in &failures {
                output.error(&format!("  {} ({})", failure.name, failure.kind));
            }
            Err(BatchError::Conflict { directory, failures }.into())
        }
        Err(e) => Err(e.into()),
    }
}
