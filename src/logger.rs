//! Severity tagged status output.
//!
//! Every user facing line of both tools goes through [`Logger`]. Diagnostic
//! detail (commands, exit codes) goes to the `log` facade instead.

use colored::Colorize;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Unknown,
}

impl Severity {
    /// Map a free form tag to a severity, anything unrecognised is `Unknown`.
    pub fn from_tag(tag: &str) -> Severity {
        match tag.trim().to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Unknown,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a status line without color.
pub fn format_line(message: &str, severity: Severity) -> String {
    format!("[{severity}] {message}")
}

enum Sink {
    Stdout,
    Capture(RefCell<Vec<(Severity, String)>>),
}

/// Writes status lines in call order, either to stdout or into memory.
pub struct Logger {
    sink: Sink,
}

impl Logger {
    /// Logger printing colored lines to stdout.
    pub fn stdout() -> Logger {
        Logger { sink: Sink::Stdout }
    }

    /// Logger recording lines in memory, for tests.
    pub fn capture() -> Logger {
        Logger {
            sink: Sink::Capture(RefCell::new(Vec::new())),
        }
    }

    pub fn write(&self, message: &str, severity: Severity) {
        let line = format_line(message, severity);
        match &self.sink {
            Sink::Stdout => {
                let colored = match severity {
                    Severity::Info => line.green(),
                    Severity::Warning => line.yellow(),
                    Severity::Error => line.red(),
                    Severity::Unknown => line.normal(),
                };
                let mut out = std::io::stdout().lock();
                // Write errors on stdout are ignored.
                let _ = writeln!(out, "{colored}");
                let _ = out.flush();
            }
            Sink::Capture(lines) => lines.borrow_mut().push((severity, line)),
        }
    }

    pub fn info(&self, message: &str) {
        self.write(message, Severity::Info);
    }

    pub fn warning(&self, message: &str) {
        self.write(message, Severity::Warning);
    }

    pub fn error(&self, message: &str) {
        self.write(message, Severity::Error);
    }

    /// Lines recorded so far. Always empty for the stdout logger.
    pub fn lines(&self) -> Vec<(Severity, String)> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines.borrow().clone(),
        }
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, line)| line.contains(needle))
    }

    /// Number of recorded lines with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.lines().iter().filter(|(s, _)| *s == severity).count()
    }
}
