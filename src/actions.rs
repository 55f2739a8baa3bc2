//! Built-in per-file actions for the command-line tool
//!
//! The real backup rotation is supplied by the caller of the library. These
//! actions cover the checks worth running from the command line before
//! handing a card tree to it.

use crate::batch::Action;
use crate::output::OutputWriter;
use clap::ValueEnum;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Which built-in action to apply to each eligible save
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    /// Report every eligible save and succeed (dry run)
    #[default]
    List,
    /// Succeed only if the symlink target exists and is a regular file
    Verify,
}

/// Built-in action bound to an output writer
pub struct BuiltinAction<'a> {
    kind: ActionKind,
    output: &'a dyn OutputWriter,
    applied: usize,
}

impl<'a> BuiltinAction<'a> {
    #[must_use]
    pub fn new(kind: ActionKind, output: &'a dyn OutputWriter) -> Self {
        Self { kind, output, applied: 0 }
    }

    /// Number of files the action has been applied to
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }

    fn list(&self, file: &Path, max_backup: u32) -> bool {
        let target = fs::read_link(file)
            .map(|t| t.display().to_string())
            .unwrap_or_else(|_| "?".to_string());
        self.output.write(&format!(
            "{} -> {target} (max backup {max_backup})",
            file.display()
        ));
        true
    }

    fn verify(&self, file: &Path) -> bool {
        // metadata follows the link
        match fs::metadata(file) {
            Ok(meta) if meta.is_file() => true,
            Ok(_) => {
                self.output
                    .warning(&format!("{}: link target is not a file", file.display()));
                false
            }
            Err(e) => {
                self.output
                    .warning(&format!("{}: broken link ({e})", file.display()));
                false
            }
        }
    }
}

impl Action for BuiltinAction<'_> {
    fn apply(&mut self, file: &Path, max_backup: u32) -> bool {
        self.applied += 1;
        let ok = match self.kind {
            ActionKind::List => self.list(file, max_backup),
            ActionKind::Verify => self.verify(file),
        };
        debug!(kind = ?self.kind, file = %file.display(), ok, "builtin action");
        ok
    }
}
