//! Formatting directives
//!
//! A directive is one unit of formatting configuration. A layout is an
//! ordered sequence of directives, evaluated left to right with outputs
//! concatenated. Directives are structured data, not template text; the
//! shapes a caller can express are exactly the variants below.

use serde::{Deserialize, Serialize};

/// Fixed record fields addressable from a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinField {
    /// The rendered message body
    Message,
    /// Date component of the record timestamp
    Date,
    /// Time component of the record timestamp
    Time,
    /// Lowercase severity name
    Severity,
    /// Single-character severity shorthand
    SeverityAcronym,
    /// Severity color prefix from the caller's color table
    Color,
}

/// One unit of formatting configuration.
///
/// `MetaOr` defaults and `MetaIf` branches are themselves directives, so
/// fallback chains compose recursively: a default may be a literal, another
/// metadata reference, or a further conditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Emitted verbatim
    Literal(String),
    /// Pulled from the record's fixed fields
    Field(BuiltinField),
    /// Bare metadata reference; absent keys render the sentinel text
    Meta(String),
    /// Metadata reference with a recursive fallback directive
    MetaOr(String, Box<Directive>),
    /// Presence ternary: key present selects the first branch, absent the
    /// second; each branch is a directive sequence
    MetaIf(String, Vec<Directive>, Vec<Directive>),
    /// Render the entire metadata map, sorted by key
    Dump { intersep: String, fieldsep: String },
}

impl Directive {
    pub fn lit(text: impl Into<String>) -> Self {
        Directive::Literal(text.into())
    }

    pub fn meta(key: impl Into<String>) -> Self {
        Directive::Meta(key.into())
    }

    pub fn meta_or(key: impl Into<String>, default: impl Into<Directive>) -> Self {
        Directive::MetaOr(key.into(), Box::new(default.into()))
    }

    pub fn meta_if(
        key: impl Into<String>,
        present: Vec<Directive>,
        absent: Vec<Directive>,
    ) -> Self {
        Directive::MetaIf(key.into(), present, absent)
    }

    /// Metadata dump with the stock separators: `=` between key and value,
    /// one space between entries.
    pub fn dump() -> Self {
        Directive::Dump {
            intersep: "=".to_string(),
            fieldsep: " ".to_string(),
        }
    }

    pub fn dump_with(intersep: impl Into<String>, fieldsep: impl Into<String>) -> Self {
        Directive::Dump {
            intersep: intersep.into(),
            fieldsep: fieldsep.into(),
        }
    }
}

impl From<&str> for Directive {
    fn from(text: &str) -> Self {
        Directive::Literal(text.to_string())
    }
}

impl From<String> for Directive {
    fn from(text: String) -> Self {
        Directive::Literal(text)
    }
}

impl From<BuiltinField> for Directive {
    fn from(field: BuiltinField) -> Self {
        Directive::Field(field)
    }
}
