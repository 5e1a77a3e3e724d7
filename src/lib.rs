//! # Log Layout
//!
//! A data-driven log layout engine: renders a structured log record into an
//! output byte stream according to a caller-supplied sequence of formatting
//! directives.
//!
//! ## Features
//!
//! - **Directive-Based**: Layouts are structured data, not template strings
//! - **Recursive Fallbacks**: Defaults and presence ternaries compose freely
//! - **Deterministic**: Metadata dumps are sorted; identical inputs render
//!   identical bytes
//! - **Pure**: No I/O, no shared state; safe to call from any thread
//!
//! ## Quick Start
//!
//! ```
//! use log_layout::prelude::*;
//!
//! let record = LogRecord::new(Severity::Info, "server started")
//!     .with_meta("module", MetaValue::symbol("api"));
//!
//! let line = Layout::default()
//!     .format_string(&record, &ColorTable::new())
//!     .unwrap();
//! assert!(line.contains("[info]"));
//! assert!(line.contains("api server started"));
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BuiltinField, ColorTable, Directive, Layout, LayoutError, LogRecord, MetaValue, Metadata,
        ProcessId, Result, Severity, MAX_NESTING_DEPTH, RESET, UNDEFINED,
    };
}

pub use crate::core::{
    BuiltinField, ColorTable, Directive, Layout, LayoutError, LogRecord, MetaValue, Metadata,
    ProcessId, Result, Severity, MAX_NESTING_DEPTH, RESET, UNDEFINED,
};
