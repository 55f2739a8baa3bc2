//! Command implementations
//!
//! Each command takes already-resolved settings and reports through an
//! [`OutputWriter`](crate::output::OutputWriter), so `main` only has to wire
//! the CLI and config together.

pub mod config;
pub mod run;

pub use config::execute as config;
pub use run::{execute as run, BatchScope};
