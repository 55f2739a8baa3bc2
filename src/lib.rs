//! gcibatch - batch operations over Dolphin memory card directories
//!
//! This library walks the fixed `GC/<region>/Card <slot>` layout of a Dolphin
//! user directory and applies a caller-supplied action to every `.gci` save
//! file. Only symlinked saves are eligible; anything else is reported as a
//! conflict. Failures inside one card directory are collected and reported
//! together, while a failing directory stops the walk.

use thiserror::Error;

pub mod actions;
pub mod batch;
pub mod card;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GcibatchError {
    /// Batch run error (conflicts or unreadable card directories)
    #[error("Batch error: {0}")]
    BatchError(#[from] batch::BatchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
