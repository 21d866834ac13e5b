//! Logging capability used by the exporter to report delivery failures.
//!
//! The exporter never writes to a global logger directly. It is handed an
//! [`ExportLogger`] at construction time, which keeps it testable in isolation.
//! [`InternalLogger`] is the default and forwards to OpenTelemetry's internal
//! logging macros; [`InMemoryLogger`] keeps records around for inspection.
use opentelemetry::{otel_debug, otel_error, otel_info, otel_warn};
use std::error::Error;
use std::fmt::{self, Debug};
use std::sync::{Arc, Mutex};

/// Severity of a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    Info,
    /// Something unexpected that was recovered from.
    Warn,
    /// An operation failed.
    Error,
}

/// A single log record emitted by the exporter.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    /// Severity of the record.
    pub severity: Severity,
    /// Short, stable description of the event.
    pub message: &'a str,
    /// The error that caused the event, if any.
    pub error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record without error context.
    pub fn new(severity: Severity, message: &'a str) -> Self {
        LogRecord {
            severity,
            message,
            error: None,
        }
    }

    /// Attaches the error that caused this record.
    pub fn with_error(mut self, error: &'a (dyn Error + 'static)) -> Self {
        self.error = Some(error);
        self
    }
}

impl Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("severity", &self.severity)
            .field("message", &self.message)
            .field("error", &self.error.map(|e| e.to_string()))
            .finish()
    }
}

/// Receives the records the exporter emits.
///
/// Implementations must not panic and must not block; the exporter calls
/// [`log`](ExportLogger::log) from inside the export future.
pub trait ExportLogger: Debug + Send + Sync {
    /// Records one event.
    fn log(&self, record: &LogRecord<'_>);
}

impl<L: ExportLogger + ?Sized> ExportLogger for Arc<L> {
    fn log(&self, record: &LogRecord<'_>) {
        (**self).log(record)
    }
}

/// Forwards records to OpenTelemetry's internal logs.
///
/// Events are emitted through `tracing` under the name `InstanaExporter.Log`
/// when the `internal-logs` feature is enabled, and dropped otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct InternalLogger;

fn error_text(record: &LogRecord<'_>) -> String {
    record.error.map(|e| e.to_string()).unwrap_or_default()
}

impl ExportLogger for InternalLogger {
    fn log(&self, record: &LogRecord<'_>) {
        match record.severity {
            Severity::Error => {
                otel_error!(
                    name: "InstanaExporter.Log",
                    message = record.message,
                    error = error_text(record)
                );
            }
            Severity::Warn => {
                otel_warn!(
                    name: "InstanaExporter.Log",
                    message = record.message,
                    error = error_text(record)
                );
            }
            Severity::Info => {
                otel_info!(
                    name: "InstanaExporter.Log",
                    message = record.message,
                    error = error_text(record)
                );
            }
            Severity::Debug => {
                otel_debug!(
                    name: "InstanaExporter.Log",
                    message = record.message,
                    error = error_text(record)
                );
            }
        }
    }
}

/// An owned copy of a [`LogRecord`] kept by [`InMemoryLogger`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedLogRecord {
    /// Severity of the record.
    pub severity: Severity,
    /// The record's message.
    pub message: String,
    /// The `Display` text of the attached error.
    pub error: Option<String>,
}

impl From<&LogRecord<'_>> for FinishedLogRecord {
    fn from(record: &LogRecord<'_>) -> Self {
        FinishedLogRecord {
            severity: record.severity,
            message: record.message.to_string(),
            error: record.error.map(|e| e.to_string()),
        }
    }
}

/// A logger that stores every record in memory.
///
/// Clones share the same storage, so a clone can be handed to the exporter
/// while the original is kept for assertions.
///
/// # Example
///
/// ```
/// use opentelemetry_instana::logging::{ExportLogger, InMemoryLogger, LogRecord, Severity};
///
/// let logger = InMemoryLogger::default();
/// logger.log(&LogRecord::new(Severity::Warn, "slow backend"));
///
/// let records = logger.get_finished_records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "slow backend");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryLogger {
    records: Arc<Mutex<Vec<FinishedLogRecord>>>,
}

impl InMemoryLogger {
    /// Returns every record logged so far, oldest first.
    pub fn get_finished_records(&self) -> Vec<FinishedLogRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Clears the stored records.
    pub fn reset(&self) {
        let _ = self.records.lock().map(|mut records| records.clear());
    }
}

impl ExportLogger for InMemoryLogger {
    fn log(&self, record: &LogRecord<'_>) {
        let _ = self
            .records
            .lock()
            .map(|mut records| records.push(record.into()));
    }
}
