//! Progress reporting.
//!
//! The pipeline never prints directly; it sends [`LogEntry`] values to a
//! [`Reporter`] chosen by the caller.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::Write;

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Optional indentation level (for nested logs)
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

/// Destination for pipeline progress.
pub trait Reporter {
    fn log(&self, entry: LogEntry);

    fn info(&self, msg: impl Into<String>)
    where
        Self: Sized,
    {
        self.log(LogEntry::info(msg));
    }

    fn success(&self, msg: impl Into<String>)
    where
        Self: Sized,
    {
        self.log(LogEntry::success(msg));
    }

    fn warning(&self, msg: impl Into<String>)
    where
        Self: Sized,
    {
        self.log(LogEntry::warning(msg));
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn log(&self, entry: LogEntry) {
        (**self).log(entry);
    }
}

/// Entry for a run that failed, worded as the CLI reports it.
pub fn failure_entry(err: &dyn std::error::Error) -> LogEntry {
    LogEntry::error(format!("An error occurred: {}", err))
}

/// Human-readable progress on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn log(&self, entry: LogEntry) {
        let prefix = match entry.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(entry.indent as usize);
        eprintln!("{}{} {}", indent, prefix, entry.message);
    }
}

/// One JSON object per line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn log(&self, entry: LogEntry) {
        if let Ok(line) = serde_json::to_string(&entry) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}", line);
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn log(&self, _entry: LogEntry) {}
}

/// Keeps entries in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<LogEntry>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Messages at `level`, in order.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn log(&self, entry: LogEntry) {
        self.entries.borrow_mut().push(entry);
    }
}
