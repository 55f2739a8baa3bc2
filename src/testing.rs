//! Testing utilities for gcibatch
//!
//! This module provides a `CardTree` fixture that lays out a throwaway
//! Dolphin user directory, and a `RecordingAction` that remembers every file
//! it was called with.
//!
//! Only available when compiled with `cfg(test)`.

use crate::batch::Action;
use crate::card::{self, Region, Slot};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary base directory with the `GC/<region>/Card <slot>` layout
///
/// Symlinks point into a sibling `targets/` directory so that link targets
/// never match the save glob themselves. Everything is removed on drop.
pub struct CardTree {
    _root: TempDir,
    base: PathBuf,
    targets: PathBuf,
}

impl CardTree {
    /// Create an empty tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_name("dolphin")
    }

    /// Create an empty tree whose base directory has the given name
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn with_base_name(name: &str) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let base = root.path().join(name);
        let targets = root.path().join("targets");
        fs::create_dir_all(&base).expect("Failed to create base dir");
        fs::create_dir_all(&targets).expect("Failed to create targets dir");
        Self { _root: root, base, targets }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Card directory for `region`/`slot`, created if missing
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn card(&self, region: Region, slot: Slot) -> PathBuf {
        let dir = card::card_dir(&self.base, region, slot);
        fs::create_dir_all(&dir).expect("Failed to create card dir");
        dir
    }

    /// Add a regular save file to a card directory
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn add_regular(&self, region: Region, slot: Slot, name: &str) -> PathBuf {
        let path = self.card(region, slot).join(name);
        let mut file = fs::File::create(&path).expect("Failed to create save file");
        file.write_all(b"test content").expect("Failed to write save file");
        path
    }

    /// Add a save file that is a symlink to a real file
    ///
    /// # Panics
    /// Panics if the target or link cannot be created.
    #[cfg(unix)]
    pub fn add_symlink(&self, region: Region, slot: Slot, name: &str) -> PathBuf {
        let target = self.targets.join(format!("{region}_{slot}_{name}"));
        fs::write(&target, b"test content").expect("Failed to write link target");
        let link = self.card(region, slot).join(name);
        std::os::unix::fs::symlink(&target, &link).expect("Failed to create symlink");
        link
    }

    /// Add a save file that is a symlink to a path that does not exist
    ///
    /// # Panics
    /// Panics if the link cannot be created.
    #[cfg(unix)]
    pub fn add_dangling_symlink(&self, region: Region, slot: Slot, name: &str) -> PathBuf {
        let target = self.targets.join(format!("missing_{name}"));
        let link = self.card(region, slot).join(name);
        std::os::unix::fs::symlink(&target, &link).expect("Failed to create symlink");
        link
    }
}

impl Default for CardTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Action that records every call and fails for a fixed set of file names
#[derive(Debug, Default)]
pub struct RecordingAction {
    calls: Vec<(PathBuf, u32)>,
    fail: HashSet<String>,
}

impl RecordingAction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Action that returns `false` for the given file names
    #[must_use]
    pub fn failing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            calls: Vec::new(),
            fail: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[(PathBuf, u32)] {
        &self.calls
    }

    /// File names of every call, in call order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|(p, _)| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

impl Action for RecordingAction {
    fn apply(&mut self, file: &Path, max_backup: u32) -> bool {
        self.calls.push((file.to_path_buf(), max_backup));
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        !self.fail.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_tree_layout() {
        let tree = CardTree::new();
        let dir = tree.card(Region::Eur, Slot::A);
        assert!(dir.is_dir());
        assert!(dir.ends_with("GC/EUR/Card A"));
    }

    #[test]
    fn test_regular_file_is_not_symlink() {
        let tree = CardTree::new();
        let path = tree.add_regular(Region::Usa, Slot::B, "save.gci");
        assert!(path.is_file());
        assert!(!path.is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_fixtures() {
        let tree = CardTree::new();
        let live = tree.add_symlink(Region::Jap, Slot::A, "live.gci");
        let dead = tree.add_dangling_symlink(Region::Jap, Slot::A, "dead.gci");
        assert!(live.is_symlink() && live.exists());
        assert!(dead.is_symlink() && !dead.exists());
    }

    #[test]
    fn test_tree_cleanup_on_drop() {
        let base = {
            let tree = CardTree::new();
            tree.base().to_path_buf()
        };
        assert!(!base.exists());
    }

    #[test]
    fn test_recording_action() {
        let mut action = RecordingAction::failing(["bad.gci"]);
        assert!(action.apply(Path::new("/x/good.gci"), 2));
        assert!(!action.apply(Path::new("/x/bad.gci"), 2));
        assert_eq!(action.names(), vec!["good.gci", "bad.gci"]);
        assert_eq!(action.calls()[0].1, 2);
    }
}
