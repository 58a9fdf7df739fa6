//! Error type for the counter demo
//!
//! Counting itself cannot fail. The only fallible step is writing lines to
//! the output sink, so every error originates from an I/O failure.

use colored::*;
use std::fmt;
use std::io;

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The reader went away (e.g. `counter-demo | head -n 3`)
    BrokenPipe,
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BrokenPipe => "broken pipe",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the counter demo
#[derive(Debug, Clone)]
pub struct DemoError {
    pub kind: ErrorKind,
    pub message: String,
    pub note: Option<String>,
}

impl DemoError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_broken_pipe(&self) -> bool {
        self.kind == ErrorKind::BrokenPipe
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(note) = &self.note {
            write!(f, "\nnote: {}", note)?;
        }

        Ok(())
    }
}

impl std::error::Error for DemoError {}

/// Result type for demo operations
pub type Result<T> = std::result::Result<T, DemoError>;

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::BrokenPipe => ErrorKind::BrokenPipe,
            _ => ErrorKind::IoError,
        };
        DemoError::new(kind, err.to_string())
    }
}

/// Formats an error for the terminal
pub struct ErrorFormatter<'a> {
    error: &'a DemoError,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a DemoError) -> Self {
        Self {
            error,
            use_color: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        let error_label = if self.use_color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        };
        output.push_str(&format!(
            "{}: {}: {}",
            error_label, self.error.kind, self.error.message
        ));

        if let Some(note) = &self.error.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        output
    }
}
