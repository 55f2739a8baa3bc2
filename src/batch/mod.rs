//! Batch runner over memory card directories
//!
//! Three layers, each driving the one below it:
//!
//! - [`run`] validates and processes every `.gci` entry of one card directory
//! - [`run_region`] drives [`run`] for slot A then slot B of one region
//! - [`run_all`] drives [`run_region`] for EUR, JAP then USA
//!
//! Inside one card directory every entry is visited and all conflicts are
//! collected into a single [`BatchError::Conflict`]. Between directories the
//! first error stops the walk.

pub mod error;

pub use error::{BatchError, Failure, FailureKind};

use crate::card::{self, Region, Slot, SAVE_EXTENSION};
use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, BatchError>;

/// Per-file operation applied to every eligible save file
///
/// Returns `true` if the operation succeeded for `file`. Ordinary per-file
/// failures must be reported through the return value.
pub trait Action {
    fn apply(&mut self, file: &Path, max_backup: u32) -> bool;
}

impl<F> Action for F
where
    F: FnMut(&Path, u32) -> bool,
{
    fn apply(&mut self, file: &Path, max_backup: u32) -> bool {
        self(file, max_backup)
    }
}

/// Run `action` on every symlinked `.gci` file in `directory`.
///
/// Entries that are not symlinks are never passed to `action` and always
/// count as conflicts. A `false` from `action` is a conflict as well. Every
/// matching entry is visited exactly once, even after a conflict.
///
/// `directory` is expected to exist; a missing directory has no entries.
/// `max_backup` is handed to `action` unchanged.
///
/// # Errors
/// * `BatchError::Conflict` listing every conflicting file name, in
///   enumeration order.
/// * `BatchError::Pattern` if the save file pattern cannot be compiled.
/// * `BatchError::Enumerate` if `directory` exists but cannot be listed.
pub fn run<A>(action: &mut A, directory: &Path, max_backup: u32) -> Result<()>
where
    A: Action + ?Sized,
{
    let mut failures = Vec::new();
    let mut visited = 0usize;

    for path in candidates(directory)? {
        visited += 1;
        let name = file_name(&path);

        if !path.is_symlink() {
            warn!(file = %name, "regular file in card directory");
            failures.push(Failure::new(name, FailureKind::Ineligible));
            continue;
        }

        let ok = action.apply(&path, max_backup);
        debug!(file = %name, ok, "applied action");
        if !ok {
            warn!(file = %name, "action failed");
            failures.push(Failure::new(name, FailureKind::ActionFailed));
        }
    }

    info!(
        directory = %directory.display(),
        visited,
        conflicts = failures.len(),
        "processed card directory"
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(BatchError::Conflict {
            directory: directory.to_path_buf(),
            failures,
        })
    }
}

/// Run `action` on a single card directory of `base_dir`.
///
/// # Errors
/// Same as [`run`].
pub fn run_slot<A>(
    action: &mut A,
    base_dir: &Path,
    region: Region,
    slot: Slot,
    max_backup: u32,
) -> Result<()>
where
    A: Action + ?Sized,
{
    run(action, &card::card_dir(base_dir, region, slot), max_backup)
}

/// Run `action` on both card slots of `region`, slot A first.
///
/// # Errors
/// Returns the first error from [`run`]; slot B is not visited if slot A fails.
pub fn run_region<A>(
    action: &mut A,
    base_dir: &Path,
    region: Region,
    max_backup: u32,
) -> Result<()>
where
    A: Action + ?Sized,
{
    for slot in Slot::ALL {
        debug!(%region, %slot, "entering card slot");
        run_slot(action, base_dir, region, slot, max_backup)?;
    }
    Ok(())
}

/// Run `action` on every region and card slot: EUR, JAP, then USA.
///
/// # Errors
/// Returns the first error from [`run_region`]; later regions are not visited.
pub fn run_all<A>(action: &mut A, base_dir: &Path, max_backup: u32) -> Result<()>
where
    A: Action + ?Sized,
{
    for region in Region::ALL {
        run_region(action, base_dir, region, max_backup)?;
    }
    Ok(())
}

/// Entries of `directory` whose name matches `*.gci`, sorted by file name.
///
/// Names that are not valid UTF-8 cannot go through the glob matcher, so they
/// are matched on their extension instead.
fn candidates(directory: &Path) -> Result<Vec<PathBuf>> {
    let raw = format!("*.{SAVE_EXTENSION}");
    let pattern = Pattern::new(&raw).map_err(|e| BatchError::Pattern {
        pattern: raw.clone(),
        reason: e.msg.to_string(),
    })?;
    let enumerate = |source: io::Error| BatchError::Enumerate {
        path: directory.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(enumerate(e)),
    };

    let mut matched = Vec::new();
    for entry in entries {
        let entry = entry.map_err(enumerate)?;
        let name = entry.file_name();
        let is_save = match name.to_str() {
            Some(name) => pattern.matches_with(name, MatchOptions::new()),
            None => Path::new(&name)
                .extension()
                .is_some_and(|ext| ext == SAVE_EXTENSION),
        };
        if is_save {
            matched.push(entry.path());
        }
    }
    matched.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(matched)
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}
