//! Severity color table

use super::severity::Severity;
use std::collections::HashMap;

/// ANSI reset suffix; append as a literal after colored segments.
pub const RESET: &str = "\x1b[0m";

/// Mapping from severity to a color prefix.
///
/// Lookup is exact-match: a missing entry (or an empty table) resolves the
/// `color` field directive to empty output. Stored prefixes are passed
/// through verbatim; no validation is performed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: HashMap<Severity, String>,
}

impl ColorTable {
    /// Create an empty table; color directives resolve to nothing.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Set a prefix (builder form)
    pub fn with_color(mut self, severity: Severity, prefix: impl Into<String>) -> Self {
        self.entries.insert(severity, prefix.into());
        self
    }

    /// Set a prefix, replacing any previous one for the same severity
    pub fn set(&mut self, severity: Severity, prefix: impl Into<String>) {
        self.entries.insert(severity, prefix.into());
    }

    pub fn get(&self, severity: Severity) -> Option<&str> {
        self.entries.get(&severity).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stock ANSI table covering every severity.
    #[cfg(feature = "ansi")]
    pub fn ansi() -> Self {
        let mut entries = HashMap::new();
        for severity in Severity::ALL {
            entries.insert(
                severity,
                format!("\x1b[{}m", severity.color_code().to_fg_str()),
            );
        }
        Self { entries }
    }
}
