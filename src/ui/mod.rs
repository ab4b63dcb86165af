//! User interface module - reporters and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - The [`Reporter`] seam the workflow writes through, with a
//!   console implementation and an in-memory one for tests

use std::cell::RefCell;

use crate::boundary::BoundaryWarning;

pub mod formatter;

pub use formatter::{
    format_error, format_header, format_status, format_success, format_transition, format_warning,
    render_commit_message, DONE_BANNER, START_BANNER,
};

/// Severity of a reported message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Header,
    Status,
    Success,
    Warning,
    Error,
}

/// Destination for every user-facing message.
///
/// The workflow never prints directly; it is handed a reporter so callers
/// decide where output goes and tests can inspect it.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn header(&self, message: &str) {
        self.report(Level::Header, message);
    }

    fn status(&self, message: &str) {
        self.report(Level::Status, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }

    fn boundary_warning(&self, warning: &BoundaryWarning) {
        self.warning(&warning.to_string());
    }
}

/// Reporter that prints styled lines to the terminal.
///
/// Headers, status and success lines go to stdout; warnings and errors go
/// to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        ConsoleReporter
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Header => println!("{}", format_header(message)),
            Level::Status => println!("{}", format_status(message)),
            Level::Success => println!("{}", format_success(message)),
            Level::Warning => eprintln!("{}", format_warning(message)),
            Level::Error => eprintln!("{}", format_error(message)),
        }
    }
}

/// Reporter that keeps messages in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages in order
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Recorded messages of one level
    pub fn at_level(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
