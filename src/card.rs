//! Memory card layout
//!
//! Dolphin stores GCI folder saves under `<base>/GC/<region>/Card <slot>`.
//! Regions and slots are closed sets, so they are modelled as enums rather
//! than free-form strings.

use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of GameCube save files handled by the batch runner
pub const SAVE_EXTENSION: &str = "gci";

/// Directory under the base dir that holds all GameCube card data
const GC_DIR: &str = "GC";

/// Release region of a memory card
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[value(rename_all = "UPPER")]
pub enum Region {
    Eur,
    Jap,
    Usa,
}

impl Region {
    /// All regions in traversal order
    pub const ALL: [Self; 3] = [Self::Eur, Self::Jap, Self::Usa];

    /// Directory segment used by Dolphin for this region
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Jap => "JAP",
            Self::Usa => "USA",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Memory card slot
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[value(rename_all = "UPPER")]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Both slots in traversal order
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Build the card directory for a region and slot: `base/GC/<region>/Card <slot>`
#[must_use]
pub fn card_dir(base_dir: &Path, region: Region, slot: Slot) -> PathBuf {
    base_dir
        .join(GC_DIR)
        .join(region.code())
        .join(format!("Card {slot}"))
}
