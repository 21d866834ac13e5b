//! Errors raised while building the exporter or preparing an export payload.
//!
//! Delivery failures are deliberately absent here: they belong to the
//! transport's own error type and are reported through the export outcome.
use thiserror::Error;

/// A span batch could not be turned into a payload.
///
/// Returned synchronously from [`SpanExporter::export`] before the transport
/// is contacted. A batch that fails this way is unsendable as a whole.
///
/// [`SpanExporter::export`]: crate::SpanExporter::export
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SerializationError {
    /// The span converter rejected the batch.
    #[error("{0}")]
    Conversion(String),

    /// The converted spans contain values that cannot be encoded as JSON.
    #[error("failed to encode spans as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SerializationError {
    /// Creates a conversion error with the given message.
    pub fn conversion<T: Into<String>>(message: T) -> Self {
        SerializationError::Conversion(message.into())
    }
}

/// Errors that can occur while building a [`SpanExporter`].
///
/// [`SpanExporter`]: crate::SpanExporter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExporterBuildError {
    /// No transport specified.
    #[error("no transport specified")]
    NoTransport,

    /// No span converter specified.
    #[error("no span converter specified")]
    NoSpanConverter,
}
