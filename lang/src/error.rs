//! Error reporting for the Lox toolchain.
//!
//! The scanner never stops on bad input. Every problem it finds is handed to
//! an [`ErrorReporter`] as `(line, location, message)` and scanning carries on.
//! Whether accumulated errors should stop a later phase is up to the caller.

#[cfg(test)]
mod tests;

use std::fmt;

/// Sink for diagnostics produced while processing source text.
///
/// `location` is a hint naming the offending text. The scanner always passes an
/// empty string; non-empty hints are reserved for later phases such as a parser.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, location: &str, message: &str);
}

impl<F> ErrorReporter for F
where
    F: FnMut(usize, &str, &str),
{
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self(line, location, message)
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, location: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "[line {}] Error: {}", self.line, self.message)
        } else {
            write!(f, "[line {}] Error at '{}': {}", self.line, self.location, self.message)
        }
    }
}

/// An [`ErrorReporter`] that keeps every diagnostic in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once at least one diagnostic has been reported.
    pub fn had_error(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.entries.push(Diagnostic::new(line, location, message));
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
