use crate::error::SerializationError;
use serde::Serialize;

/// Maps spans into the structure a backend expects on the wire.
///
/// The exporter treats spans as opaque: it hands the whole batch to the
/// converter, in order, and JSON-encodes whatever comes back. Implementations
/// should be deterministic and free of side effects, since the exporter makes
/// no attempt to undo or repeat a conversion.
///
/// # Example
///
/// ```
/// use opentelemetry_instana::{SerializationError, SpanConverter};
///
/// #[derive(Debug)]
/// struct NameConverter;
///
/// impl SpanConverter for NameConverter {
///     type Span = String;
///     type Output = Vec<String>;
///
///     fn convert<I>(&self, spans: I) -> Result<Self::Output, SerializationError>
///     where
///         I: IntoIterator<Item = Self::Span>,
///     {
///         Ok(spans.into_iter().collect())
///     }
/// }
/// ```
pub trait SpanConverter: Send + Sync {
    /// The span type accepted by this converter.
    type Span;

    /// The wire-ready structure produced for one batch.
    type Output: Serialize;

    /// Converts one batch of spans.
    ///
    /// Returning an error marks the batch as unsendable; the exporter passes
    /// the error straight back to its caller.
    fn convert<I>(&self, spans: I) -> Result<Self::Output, SerializationError>
    where
        I: IntoIterator<Item = Self::Span>;
}
