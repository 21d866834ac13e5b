use bytes::Bytes;
use std::fmt::Debug;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// The interface a transport must provide to carry serialized span batches to a
/// backend.
///
/// Users bring their own transport (HTTP, gRPC, a file, ...) the same way they
/// bring their own HTTP client to other exporters. The exporter holds it behind
/// an `Arc` and only ever calls these methods through a shared reference, so a
/// single transport may serve many concurrent exports.
///
/// Cancellation tokens are handed over exactly as the caller supplied them.
/// Whether and how they are honored is up to the transport.
pub trait Transport: Debug + Send + Sync {
    /// Whatever the backend answers on success. The exporter discards it.
    type Response: Send;

    /// Failure raised while delivering a payload.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends one serialized payload.
    ///
    /// Must return without waiting for the delivery to finish; the work
    /// happens when the returned future is polled.
    fn send(
        &self,
        payload: Bytes,
        cancellation: Option<&CancellationToken>,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;

    /// Shuts the transport down. Returns `true` on success.
    ///
    /// Whether exports after shutdown are rejected, and whether repeated
    /// shutdowns succeed, is defined by the implementation.
    fn shutdown(&self, cancellation: Option<&CancellationToken>) -> bool;

    /// Flushes anything the transport has buffered. Returns `true` on success.
    fn force_flush(&self, cancellation: Option<&CancellationToken>) -> bool;
}
