use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a save file ended up in a card directory's failure list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The entry is not a symbolic link, so it was never handed to the action
    Ineligible,
    /// The action returned `false` for an eligible entry
    ActionFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ineligible => f.write_str("not a symlink"),
            Self::ActionFailed => f.write_str("action failed"),
        }
    }
}

/// A single conflicting save file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// File name within the card directory
    pub name: String,
    pub kind: FailureKind,
}

impl Failure {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FailureKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Errors produced while running a batch over card directories
#[derive(Debug, Error)]
pub enum BatchError {
    /// One card directory produced at least one conflicting file
    #[error(
        "You have the following file conflicts in {}: {}",
        .directory.display(),
        join_names(.failures)
    )]
    Conflict {
        directory: PathBuf,
        failures: Vec<Failure>,
    },
    /// The card directory could not be turned into a glob pattern
    #[error("Invalid save file pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },
    /// An entry of the card directory could not be read
    #[error("Failed to enumerate {}: {source}", .path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BatchError {
    /// Names of every conflicting file, in the order they were found.
    ///
    /// Empty for errors that are not conflicts.
    #[must_use]
    pub fn conflict_names(&self) -> Vec<&str> {
        match self {
            Self::Conflict { failures, .. } => failures.iter().map(|f| f.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

fn join_names(failures: &[Failure]) -> String {
    failures
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
