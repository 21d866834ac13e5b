//! # OpenTelemetry Instana Exporter
//!
//! Delivers batches of finished spans to an Instana backend. The exporter is
//! deliberately small: it converts each batch with a [`SpanConverter`],
//! encodes the result as JSON and hands the payload to a [`Transport`]. Both
//! collaborators are supplied by the user, which keeps the choice of HTTP
//! client, runtime and span model out of this crate.
//!
//! ## Outcomes
//!
//! [`SpanExporter::export`] reports problems on two separate channels:
//!
//! - A batch that cannot be serialized is rejected immediately with a
//!   [`SerializationError`]. Nothing is sent.
//! - Otherwise a future is returned that resolves to `true` when the transport
//!   accepted the payload and to `false` when it did not. Delivery errors are
//!   logged through the exporter's [`ExportLogger`] and never returned.
//!
//! ## Quickstart
//!
//! ```
//! use bytes::Bytes;
//! use opentelemetry_instana::{SerializationError, SpanConverter, SpanExporter, Transport};
//! use std::convert::Infallible;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[derive(Debug)]
//! struct NameConverter;
//!
//! impl SpanConverter for NameConverter {
//!     type Span = &'static str;
//!     type Output = Vec<&'static str>;
//!
//!     fn convert<I>(&self, spans: I) -> Result<Self::Output, SerializationError>
//!     where
//!         I: IntoIterator<Item = Self::Span>,
//!     {
//!         Ok(spans.into_iter().collect())
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct DiscardTransport;
//!
//! impl Transport for DiscardTransport {
//!     type Response = ();
//!     type Error = Infallible;
//!
//!     async fn send(
//!         &self,
//!         _payload: Bytes,
//!         _cancellation: Option<&CancellationToken>,
//!     ) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!
//!     fn shutdown(&self, _cancellation: Option<&CancellationToken>) -> bool {
//!         true
//!     }
//!
//!     fn force_flush(&self, _cancellation: Option<&CancellationToken>) -> bool {
//!         true
//!     }
//! }
//!
//! # futures_executor::block_on(async {
//! let exporter = SpanExporter::new(Arc::new(DiscardTransport), NameConverter);
//!
//! let exported = exporter.export(["checkout", "charge"], None)?.await;
//! assert!(exported);
//! assert!(exporter.shutdown(None));
//! # Ok::<(), SerializationError>(())
//! # }).unwrap();
//! ```
#![warn(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod converter;
mod error;
mod exporter;
pub mod logging;
mod transport;

pub use converter::SpanConverter;
pub use error::{ExporterBuildError, SerializationError};
pub use exporter::{SpanExporter, SpanExporterBuilder, EXPORT_FAILURE};
pub use logging::{ExportLogger, InMemoryLogger, InternalLogger};
pub use transport::Transport;
