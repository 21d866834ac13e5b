mod serialize;

use crate::converter::SpanConverter;
use crate::error::{ExporterBuildError, SerializationError};
use crate::logging::{ExportLogger, InternalLogger, LogRecord, Severity};
use crate::transport::Transport;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Message of the record logged when a transport fails to deliver a batch.
pub const EXPORT_FAILURE: &str = "Export failure";

/// Exports span batches through a user supplied [`Transport`].
///
/// The exporter itself keeps no state between calls. It converts each batch
/// with its [`SpanConverter`], encodes it as JSON and hands the payload to the
/// transport, which it shares with whoever else holds the `Arc`.
///
/// Two failure channels are kept apart:
///
/// * a batch that cannot be serialized is rejected synchronously with a
///   [`SerializationError`], and the transport is never called;
/// * a payload the transport fails to deliver resolves the export future to
///   `false` and logs one error record. Delivery errors never reach the caller.
///
/// Retrying is left to the caller or to the transport.
pub struct SpanExporter<T, C, L = InternalLogger> {
    transport: Arc<T>,
    converter: C,
    logger: L,
}

impl<T, C, L> fmt::Debug for SpanExporter<T, C, L>
where
    T: Transport,
    L: ExportLogger,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanExporter")
            .field("transport", &self.transport)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

impl<T, C> SpanExporter<T, C, InternalLogger>
where
    T: Transport,
    C: SpanConverter,
{
    /// Creates an exporter that logs through [`InternalLogger`].
    pub fn new(transport: Arc<T>, converter: C) -> Self {
        SpanExporter {
            transport,
            converter,
            logger: InternalLogger,
        }
    }

    /// Creates a builder for configuring a [`SpanExporter`].
    pub fn builder() -> SpanExporterBuilder<T, C, InternalLogger> {
        SpanExporterBuilder::default()
    }
}

impl<T, C, L> SpanExporter<T, C, L>
where
    T: Transport,
    C: SpanConverter,
    L: ExportLogger,
{
    /// Exports one batch of spans.
    ///
    /// The batch is converted and encoded before anything else happens. If
    /// that fails the error is returned right away and no future is created.
    /// Otherwise the payload is handed to the transport and a future is
    /// returned without waiting for delivery. It resolves to `true` once the
    /// transport reports success and to `false` if the transport fails, in
    /// which case an error record with the transport's error is logged.
    ///
    /// The cancellation token, if any, is passed to the transport unchanged.
    /// A cancelled send counts as an ordinary delivery failure.
    pub fn export<'a, I>(
        &'a self,
        batch: I,
        cancellation: Option<&'a CancellationToken>,
    ) -> Result<impl Future<Output = bool> + Send + 'a, SerializationError>
    where
        I: IntoIterator<Item = C::Span>,
    {
        let payload = serialize::serialize_trace(&self.converter, batch)?;
        let delivery = self.transport.send(payload, cancellation);
        let logger = &self.logger;

        Ok(async move {
            match delivery.await {
                Ok(_) => true,
                Err(err) => {
                    let record = LogRecord::new(Severity::Error, EXPORT_FAILURE).with_error(&err);
                    logger.log(&record);
                    false
                }
            }
        })
    }

    /// Shuts the transport down and returns its result unchanged.
    pub fn shutdown(&self, cancellation: Option<&CancellationToken>) -> bool {
        self.transport.shutdown(cancellation)
    }

    /// Asks the transport to flush and returns its result unchanged.
    pub fn force_flush(&self, cancellation: Option<&CancellationToken>) -> bool {
        self.transport.force_flush(cancellation)
    }

    /// The transport this exporter delivers to.
    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// The converter applied to every batch.
    pub fn span_converter(&self) -> &C {
        &self.converter
    }
}

/// Builder for [`SpanExporter`].
///
/// # Example
///
/// ```no_run
/// # use opentelemetry_instana::{SpanExporter, SpanConverter, Transport};
/// # fn build<T: Transport, C: SpanConverter>(transport: T, converter: C) {
/// let exporter = SpanExporter::builder()
///     .with_transport(transport)
///     .with_span_converter(converter)
///     .build()
///     .expect("transport and converter are set");
/// # let _ = exporter;
/// # }
/// ```
#[derive(Debug)]
pub struct SpanExporterBuilder<T, C, L = InternalLogger> {
    transport: Option<Arc<T>>,
    converter: Option<C>,
    logger: L,
}

impl<T, C> Default for SpanExporterBuilder<T, C, InternalLogger> {
    fn default() -> Self {
        SpanExporterBuilder {
            transport: None,
            converter: None,
            logger: InternalLogger,
        }
    }
}

impl<T, C, L> SpanExporterBuilder<T, C, L>
where
    T: Transport,
    C: SpanConverter,
    L: ExportLogger,
{
    /// Set the transport. The exporter becomes its only owner.
    pub fn with_transport(self, transport: T) -> Self {
        self.with_shared_transport(Arc::new(transport))
    }

    /// Set a transport that is also used elsewhere.
    pub fn with_shared_transport(mut self, transport: Arc<T>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the converter applied to every batch.
    pub fn with_span_converter(mut self, converter: C) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Replace the logger that receives export failures.
    pub fn with_logger<NewL: ExportLogger>(self, logger: NewL) -> SpanExporterBuilder<T, C, NewL> {
        SpanExporterBuilder {
            transport: self.transport,
            converter: self.converter,
            logger,
        }
    }

    /// Create a [`SpanExporter`] from the configured parts.
    pub fn build(self) -> Result<SpanExporter<T, C, L>, ExporterBuildError> {
        let transport = self.transport.ok_or(ExporterBuildError::NoTransport)?;
        let converter = self.converter.ok_or(ExporterBuildError::NoSpanConverter)?;

        Ok(SpanExporter {
            transport,
            converter,
            logger: self.logger,
        })
    }
}
