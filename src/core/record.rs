//! Log record structure and runtime identity

use super::metadata::{MetaValue, Metadata};
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

// Thread-local cache for the process identity text to avoid repeated
// allocations when records are stamped on the hot path
thread_local! {
    static PROCESS_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Opaque runtime identifier with a canonical textual form.
///
/// The layout engine never inspects the identity; it only renders it.
/// [`ProcessId::current`] captures the calling thread's identity, while
/// [`ProcessId::from_raw`] wraps an identity produced elsewhere (a worker
/// pool slot, an OS pid, a remote node name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessId(String);

impl ProcessId {
    /// Identity of the current thread, computed once per thread and cached.
    pub fn current() -> Self {
        PROCESS_ID_CACHE.with(|cache| {
            let mut cache = cache.borrow_mut();
            if cache.is_none() {
                *cache = Some(format!("{:?}", std::thread::current().id()));
            }
            ProcessId(
                cache
                    .as_ref()
                    .expect("process id cache initialized in previous line")
                    .clone(),
            )
        })
    }

    /// Wrap an externally supplied identity verbatim.
    pub fn from_raw(id: impl Into<String>) -> Self {
        ProcessId(id.into())
    }

    /// Canonical textual representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One log record: fixed fields plus free-form metadata.
///
/// Severity, timestamp, and message are record fields and are always
/// present; everything else travels in the metadata map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    severity: Severity,
    message: String,
    timestamp: DateTime<Utc>,
    metadata: Metadata,
}

impl LogRecord {
    /// Sanitize the message body so one record renders as one line.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add one metadata entry.
    pub fn with_meta<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetaValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    /// Attach the conventional call-site keys consumed by the default layout.
    pub fn with_location(mut self, module: &str, function: &str, line: u32) -> Self {
        self.metadata.insert("module", MetaValue::symbol(module));
        self.metadata.insert("function", MetaValue::symbol(function));
        self.metadata.insert("line", i64::from(line));
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The timestamp split into pre-formatted date and time components,
    /// as consumed by the `date` and `time` field directives.
    pub fn datetime_pair(&self) -> (String, String) {
        (
            self.timestamp.format("%Y-%m-%d").to_string(),
            self.timestamp.format("%H:%M:%S%.3f").to_string(),
        )
    }
}
