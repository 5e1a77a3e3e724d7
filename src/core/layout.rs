//! Layout assembly and the recursive directive evaluator
//!
//! A `Layout` is the caller-supplied directive sequence plus the entry
//! point that evaluates it against one record and one color table. The
//! evaluation is a pure function of its inputs: no state is held across
//! calls, and concurrent calls need no coordination.

use super::color::ColorTable;
use super::directive::{BuiltinField, Directive};
use super::error::{LayoutError, Result};
use super::record::LogRecord;
use serde::{Deserialize, Serialize};

/// Sentinel text emitted for a bare metadata reference whose key is absent.
pub const UNDEFINED: &str = "Undefined";

/// Upper bound on directive recursion through `MetaOr` defaults and
/// `MetaIf` branches; formatting a layout nested past it fails with
/// [`LayoutError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// An ordered directive sequence and the formatter entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    directives: Vec<Directive>,
}

impl Layout {
    /// Wrap a directive sequence. An empty sequence is sugar for the
    /// built-in default layout and is normalized here, so
    /// `Layout::new(vec![])` and `Layout::default()` format identically.
    pub fn new(directives: Vec<Directive>) -> Self {
        if directives.is_empty() {
            Self::default()
        } else {
            Self { directives }
        }
    }

    /// The default layout with its trailing `"\n"` replaced by `eol`.
    pub fn with_eol(eol: &str) -> Self {
        Self {
            directives: default_directives(eol),
        }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Render one record into an output byte sequence.
    ///
    /// Each top-level directive is evaluated in order and the results are
    /// concatenated. Deterministic given identical inputs; the only failure
    /// mode is a directive tree nested past [`MAX_NESTING_DEPTH`], in which
    /// case no partial output is returned.
    pub fn format(&self, record: &LogRecord, colors: &ColorTable) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(256);
        for directive in &self.directives {
            eval(directive, record, colors, &mut out, 0)?;
        }
        Ok(out)
    }

    /// [`format`](Self::format) as text, replacing any non-UTF-8 metadata
    /// bytes with the replacement character.
    pub fn format_string(&self, record: &LogRecord, colors: &ColorTable) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.format(record, colors)?).into_owned())
    }
}

impl Default for Layout {
    /// The built-in default layout:
    /// `date time color[severity] pid@module:function:line message\n`,
    /// where the `pid@` prefix and the module clause render only when the
    /// corresponding metadata keys are present.
    fn default() -> Self {
        Self {
            directives: default_directives("\n"),
        }
    }
}

impl From<Vec<Directive>> for Layout {
    fn from(directives: Vec<Directive>) -> Self {
        Layout::new(directives)
    }
}

fn default_directives(eol: &str) -> Vec<Directive> {
    vec![
        Directive::Field(BuiltinField::Date),
        Directive::lit(" "),
        Directive::Field(BuiltinField::Time),
        Directive::lit(" "),
        Directive::Field(BuiltinField::Color),
        Directive::lit("["),
        Directive::Field(BuiltinField::Severity),
        Directive::lit("] "),
        Directive::meta_or("pid", ""),
        Directive::meta_if(
            "module",
            vec![
                Directive::meta_if("pid", vec![Directive::lit("@")], vec![]),
                Directive::meta("module"),
                Directive::meta_if(
                    "function",
                    vec![Directive::lit(":"), Directive::meta("function")],
                    vec![],
                ),
                Directive::meta_if(
                    "line",
                    vec![Directive::lit(":"), Directive::meta("line")],
                    vec![],
                ),
            ],
            vec![],
        ),
        Directive::lit(" "),
        Directive::Field(BuiltinField::Message),
        Directive::lit(eol),
    ]
}

/// Evaluate one directive, appending its output to `out`.
///
/// Recursion happens only through `MetaOr` defaults and `MetaIf` branches;
/// `depth` tracks it against [`MAX_NESTING_DEPTH`].
fn eval(
    directive: &Directive,
    record: &LogRecord,
    colors: &ColorTable,
    out: &mut Vec<u8>,
    depth: usize,
) -> Result<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(LayoutError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }

    match directive {
        Directive::Literal(text) => out.extend_from_slice(text.as_bytes()),
        Directive::Field(field) => eval_field(*field, record, colors, out),
        Directive::Meta(key) => match record.metadata().get(key) {
            Some(value) => value.render_into(out),
            None => out.extend_from_slice(UNDEFINED.as_bytes()),
        },
        Directive::MetaOr(key, default) => match record.metadata().get(key) {
            Some(value) => value.render_into(out),
            None => eval(default, record, colors, out, depth + 1)?,
        },
        Directive::MetaIf(key, present, absent) => {
            let branch = if record.metadata().contains(key) {
                present
            } else {
                absent
            };
            for directive in branch {
                eval(directive, record, colors, out, depth + 1)?;
            }
        }
        Directive::Dump { intersep, fieldsep } => {
            record.metadata().dump_into(intersep, fieldsep, out);
        }
    }
    Ok(())
}

fn eval_field(field: BuiltinField, record: &LogRecord, colors: &ColorTable, out: &mut Vec<u8>) {
    match field {
        BuiltinField::Message => out.extend_from_slice(record.message().as_bytes()),
        BuiltinField::Date => {
            let (date, _) = record.datetime_pair();
            out.extend_from_slice(date.as_bytes());
        }
        BuiltinField::Time => {
            let (_, time) = record.datetime_pair();
            out.extend_from_slice(time.as_bytes());
        }
        BuiltinField::Severity => out.extend_from_slice(record.severity().name().as_bytes()),
        BuiltinField::SeverityAcronym => {
            let mut buf = [0u8; 4];
            out.extend_from_slice(record.severity().acronym().encode_utf8(&mut buf).as_bytes());
        }
        BuiltinField::Color => {
            if let Some(prefix) = colors.get(record.severity()) {
                out.extend_from_slice(prefix.as_bytes());
            }
        }
    }
}
