//! Layout construction macro.
//!
//! The `layout!` macro builds a [`Layout`](crate::Layout) from a mixed list
//! of literals, builtin fields, and directives, leaning on the `From`
//! conversions into [`Directive`](crate::Directive).
//!
//! # Examples
//!
//! ```
//! use log_layout::prelude::*;
//! use log_layout::layout;
//!
//! let simple = layout!["prefix: ", BuiltinField::Message];
//!
//! let with_fallback = layout![
//!     BuiltinField::Date,
//!     " ",
//!     Directive::meta_or("request_id", "-"),
//!     " ",
//!     BuiltinField::Message,
//! ];
//! ```

/// Build a [`Layout`](crate::Layout) from directive expressions.
///
/// Each element is converted with `Directive::from`, so string literals
/// become [`Directive::Literal`](crate::Directive::Literal) and
/// [`BuiltinField`](crate::BuiltinField) values become field directives.
/// An empty invocation yields the default layout, matching the empty-config
/// sugar of [`Layout::new`](crate::Layout::new).
///
/// # Examples
///
/// ```
/// # use log_layout::prelude::*;
/// use log_layout::layout;
///
/// let record = LogRecord::new(Severity::Info, "ready");
/// let line = layout!["msg=", BuiltinField::Message]
///     .format_string(&record, &ColorTable::new())
///     .unwrap();
/// assert_eq!(line, "msg=ready");
/// ```
#[macro_export]
macro_rules! layout {
    () => {
        $crate::Layout::default()
    };
    ($($directive:expr),+ $(,)?) => {
        $crate::Layout::new(vec![$($crate::Directive::from($directive)),+])
    };
}
