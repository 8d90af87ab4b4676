use super::beacon::Beacon;
use fdk_core::Round;

/// Round number requesting the latest available beacon.
pub const LATEST: Round = 0;

/// Capability supplying verified beacon randomness by round.
///
/// Implementations wrap whatever transport reaches the beacon network and
/// are expected to return only already-verified randomness; this crate never
/// re-checks beacon cryptography. A fetch for a round the beacon has not yet
/// produced is a failure, reported through the `Err` arm like any transport
/// fault. Every call is additionally bounded by the cache's fetch timeout,
/// so implementations need not enforce one of their own to keep the cache
/// responsive.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Fetches the beacon for `round`, or the latest when `round` is [`LATEST`].
    async fn fetch(&self, round: Round) -> anyhow::Result<Beacon>;
    /// Releases the underlying connection. Invoked exactly once, by
    /// [`Cache::close`](super::cache::Cache::close).
    async fn close(&self) {}
}

/// Shared sources are sources.
#[async_trait::async_trait]
impl<S> Source for std::sync::Arc<S>
where
    S: Source + ?Sized,
{
    async fn fetch(&self, round: Round) -> anyhow::Result<Beacon> {
        (**self).fetch(round).await
    }
    async fn close(&self) {
        (**self).close().await
    }
}
