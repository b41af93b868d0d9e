//! Diagnostics raised while parsing
//!
//!     Markup problems never stop a parse. Unterminated emphasis, code or links and malformed
//!     tables degrade to literal content and leave a warning here, tagged with the source line.
//!     Every diagnostic is also forwarded to `tracing`; whether it is printed is decided by the
//!     subscriber the host application installs.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, line: Option<usize>) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            line,
        }
    }

    pub fn warning(message: impl Into<String>, line: usize) -> Self {
        Self::new(Severity::Warning, message, Some(line))
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message, None)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message, None)
    }

    /// Send this diagnostic to the active tracing subscriber.
    pub fn trace(&self) {
        match (self.severity, self.line) {
            (Severity::Info, Some(line)) => tracing::info!(line, "{}", self.message),
            (Severity::Info, None) => tracing::info!("{}", self.message),
            (Severity::Warning, Some(line)) => tracing::warn!(line, "{}", self.message),
            (Severity::Warning, None) => tracing::warn!("{}", self.message),
            (Severity::Error, Some(line)) => tracing::error!(line, "{}", self.message),
            (Severity::Error, None) => tracing::error!("{}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.severity, line, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
