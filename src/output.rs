//! Output abstraction layer
//!
//! User-facing messages go through [`OutputWriter`] so that commands and
//! built-in actions can be exercised in tests with a [`BufferWriter`]
//! instead of stdout.

use colored::Colorize;
use std::sync::Mutex;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use gcibatch::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only errors and warnings are written.
#[derive(Debug, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// In-memory writer that keeps every message in order
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Messages of a single level
    #[must_use]
    pub fn with_level(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}
