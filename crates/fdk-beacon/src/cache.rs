use super::beacon::Beacon;
use super::error::CacheError;
use super::source::LATEST;
use super::source::Source;
use fdk_core::Round;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::RwLock;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Configuration for the beacon cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Beacon records retained before oldest-round eviction.
    pub capacity: usize,
    /// Cadence of the background latest-beacon refresh.
    pub refresh: Duration,
    /// Upper bound on any single fetch, on-demand or background.
    pub timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: fdk_core::CACHE_CAPACITY,
            refresh: fdk_core::REFRESH_INTERVAL,
            timeout: fdk_core::FETCH_TIMEOUT,
        }
    }
}

/// Round-keyed beacon records plus the latest pointer.
///
/// Invariants: `latest`, when present, is the record with the greatest round
/// in the map, and the map never holds more than `capacity` records.
#[derive(Debug, Default)]
struct State {
    beacons: BTreeMap<Round, Beacon>,
    latest: Option<Beacon>,
}

impl State {
    /// Inserts a record, advances `latest` when strictly newer, and evicts
    /// the lowest rounds down to capacity. Returns the eviction count.
    fn insert(&mut self, beacon: Beacon, capacity: usize) -> usize {
        if self.latest.as_ref().is_none_or(|l| beacon.round > l.round) {
            self.latest = Some(beacon.clone());
        }
        self.beacons.insert(beacon.round, beacon);
        let mut evicted = 0;
        while self.beacons.len() > capacity {
            self.beacons.pop_first();
            evicted += 1;
        }
        evicted
    }
}

/// Handle on the spawned refresh loop.
struct Refresh {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// Thread-safe bounded view of recently observed beacon rounds.
///
/// One instance is constructed by the caller and shared by reference
/// (typically inside an [`Arc`]) with every consumer; there is no hidden
/// process-wide singleton. Readers proceed concurrently; any insert, evict,
/// or latest update takes the write half of the lock exclusively. The only
/// suspending paths are the network fills, each bounded by the configured
/// fetch timeout.
pub struct Cache {
    source: Arc<dyn Source>,
    state: RwLock<State>,
    refresh: Mutex<Option<Refresh>>,
    closed: AtomicBool,
    config: CacheConfig,
}

impl Cache {
    /// Creates a cache over `source` with default configuration.
    pub fn new<S>(source: S) -> Self
    where
        S: Source + 'static,
    {
        Self::configured(source, CacheConfig::default())
    }
    /// Creates a cache over `source` with explicit configuration.
    pub fn configured<S>(source: S, config: CacheConfig) -> Self
    where
        S: Source + 'static,
    {
        Self {
            source: Arc::new(source),
            state: RwLock::new(State::default()),
            refresh: Mutex::new(None),
            closed: AtomicBool::new(false),
            config,
        }
    }
    pub fn config(&self) -> CacheConfig {
        self.config
    }
    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.state.read().await.beacons.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.beacons.is_empty()
    }

    /// Records a beacon observation.
    ///
    /// Silently ignores any round at or below the known latest, so
    /// out-of-order completions of concurrent fetches can never move
    /// `latest` backward. Evictions are logged, never silent.
    pub async fn put(&self, beacon: Beacon) -> Result<(), CacheError> {
        self.guard()?;
        let mut state = self.state.write().await;
        if state.latest.as_ref().is_some_and(|l| l.round >= beacon.round) {
            log::debug!("[cache] ignoring stale {}", beacon);
            return Ok(());
        }
        log::debug!("[cache] observed {}", beacon);
        let evicted = state.insert(beacon, self.config.capacity);
        if evicted > 0 {
            log::info!("[cache] evicted {} oldest beacon records", evicted);
        }
        Ok(())
    }

    /// Returns the latest known beacon without touching the network.
    pub async fn latest(&self) -> Result<Beacon, CacheError> {
        self.guard()?;
        self.state
            .read()
            .await
            .latest
            .clone()
            .ok_or(CacheError::NotYetAvailable)
    }

    /// Returns the beacon for `round`, from cache when present, otherwise
    /// through a timed fetch that fills the cache on success.
    ///
    /// Historical rounds are stored even when older than `latest` (pinned
    /// replays hit the cache on repeat), but `latest` itself only ever moves
    /// forward. Concurrent fetches for one round are tolerated; the insert
    /// is idempotent.
    pub async fn by_round(&self, round: Round) -> Result<Beacon, CacheError> {
        self.guard()?;
        if let Some(beacon) = self.state.read().await.beacons.get(&round) {
            return Ok(beacon.clone());
        }
        let beacon = self.fetch(round).await?;
        self.guard()?;
        let mut state = self.state.write().await;
        let evicted = state.insert(beacon.clone(), self.config.capacity);
        if evicted > 0 {
            log::info!("[cache] evicted {} oldest beacon records", evicted);
        }
        Ok(beacon)
    }

    /// Starts the background refresh loop. No-op while one is running.
    ///
    /// The loop fetches the latest beacon every `config.refresh`, records it
    /// via [`Cache::put`], and treats fetch failure as non-fatal: it logs
    /// and waits for the next tick.
    pub async fn start_refresh(self: &Arc<Self>) {
        if self.closed.load(Ordering::SeqCst) {
            log::warn!("[cache] refusing to start refresh on closed cache");
            return;
        }
        let mut refresh = self.refresh.lock().await;
        if refresh.is_some() {
            log::debug!("[cache] background refresh already running");
            return;
        }
        let (stop, stopped) = oneshot::channel();
        let task = tokio::spawn(self.clone().run(stopped));
        *refresh = Some(Refresh { stop, task });
        log::info!(
            "[cache] background refresh started, {:?} interval",
            self.config.refresh
        );
    }

    /// Signals the refresh loop to exit after its current iteration and
    /// waits for it. No-op when not running.
    pub async fn stop_refresh(&self) {
        if let Some(refresh) = self.refresh.lock().await.take() {
            let _ = refresh.stop.send(());
            let _ = refresh.task.await;
            log::info!("[cache] background refresh stopped");
        }
    }

    /// Shuts the cache down: stops the refresh loop and closes the source,
    /// exactly once. Every subsequent operation fails with
    /// [`CacheError::Closed`].
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.stop_refresh().await;
        self.source.close().await;
        log::info!("[cache] closed");
    }

    fn guard(&self) -> Result<(), CacheError> {
        match self.closed.load(Ordering::SeqCst) {
            true => Err(CacheError::Closed),
            false => Ok(()),
        }
    }

    /// One timed fetch through the source.
    async fn fetch(&self, round: Round) -> Result<Beacon, CacheError> {
        match tokio::time::timeout(self.config.timeout, self.source.fetch(round)).await {
            Ok(Ok(beacon)) => Ok(beacon),
            Ok(Err(e)) => Err(CacheError::SourceUnavailable {
                round,
                cause: e.to_string(),
            }),
            Err(_) => Err(CacheError::SourceUnavailable {
                round,
                cause: format!("fetch exceeded {:?}", self.config.timeout),
            }),
        }
    }

    /// Refresh loop body. The biased select lets a stop signal win between
    /// iterations, so an in-flight fetch always completes before exit.
    async fn run(self: Arc<Self>, mut stopped: oneshot::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.config.refresh);
        loop {
            tokio::select! {
                biased;
                _ = &mut stopped => break,
                _ = ticker.tick() => match self.fetch(LATEST).await {
                    Ok(beacon) => {
                        let round = beacon.round;
                        match self.put(beacon).await {
                            Ok(()) => log::debug!("[cache] refreshed through round {}", round),
                            Err(e) => {
                                log::debug!("[cache] refresh exiting: {}", e);
                                break;
                            }
                        }
                    }
                    Err(e) => log::warn!("[cache] refresh fetch failed: {}", e),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;
    use std::sync::atomic::AtomicUsize;

    /// Source computing deterministic randomness per round; round 0 serves
    /// an internal monotonically advancing "latest" round.
    struct Scripted {
        fetches: AtomicUsize,
        closes: AtomicUsize,
        head: AtomicU64,
    }

    impl Scripted {
        fn new(head: Round) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                closes: AtomicUsize::new(0),
                head: AtomicU64::new(head),
            }
        }
        fn randomness(round: Round) -> Vec<u8> {
            round.to_be_bytes().repeat(4)
        }
    }

    #[async_trait::async_trait]
    impl Source for Scripted {
        async fn fetch(&self, round: Round) -> anyhow::Result<Beacon> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let round = match round {
                LATEST => self.head.fetch_add(1, Ordering::SeqCst),
                pinned => pinned,
            };
            Ok(Beacon::new(round, Self::randomness(round)))
        }
        async fn close(&self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Source that never responds.
    struct Stalled;

    #[async_trait::async_trait]
    impl Source for Stalled {
        async fn fetch(&self, _: Round) -> anyhow::Result<Beacon> {
            std::future::pending().await
        }
    }

    /// Source that always fails.
    struct Broken;

    #[async_trait::async_trait]
    impl Source for Broken {
        async fn fetch(&self, round: Round) -> anyhow::Result<Beacon> {
            anyhow::bail!("round {} unreachable", round)
        }
    }

    fn snappy(capacity: usize) -> CacheConfig {
        CacheConfig {
            capacity,
            refresh: Duration::from_millis(10),
            timeout: Duration::from_millis(50),
        }
    }

    #[tokio::test]
    async fn latest_before_any_fetch_is_not_yet_available() {
        let cache = Cache::new(Scripted::new(1));
        assert!(cache.latest().await == Err(CacheError::NotYetAvailable));
    }

    #[tokio::test]
    async fn put_tracks_maximum_round_out_of_order() {
        let cache = Cache::new(Scripted::new(1));
        for round in [5u64, 3, 9, 7, 9] {
            cache
                .put(Beacon::new(round, Scripted::randomness(round)))
                .await
                .unwrap();
        }
        assert!(cache.latest().await.unwrap().round == 9);
    }

    #[tokio::test]
    async fn put_ignores_stale_rounds() {
        let cache = Cache::new(Scripted::new(1));
        cache.put(Beacon::new(8, vec![8])).await.unwrap();
        cache.put(Beacon::new(4, vec![4])).await.unwrap();
        cache.put(Beacon::new(8, vec![0])).await.unwrap();
        assert!(cache.latest().await.unwrap() == Beacon::new(8, vec![8]));
        assert!(cache.len().await == 1);
    }

    #[tokio::test]
    async fn put_evicts_oldest_rounds_beyond_capacity() {
        let source = Arc::new(Scripted::new(1));
        let cache = Cache::configured(source.clone(), snappy(3));
        for round in 1..=5u64 {
            cache
                .put(Beacon::new(round, Scripted::randomness(round)))
                .await
                .unwrap();
        }
        assert!(cache.len().await == 3);
        assert!(cache.latest().await.unwrap().round == 5);
        // surviving rounds are the greatest three, served without a fetch
        for round in 3..=5u64 {
            assert!(cache.by_round(round).await.unwrap().round == round);
        }
        assert!(source.fetches.load(Ordering::SeqCst) == 0);
    }

    #[tokio::test]
    async fn by_round_hit_skips_the_source() {
        let source = Arc::new(Scripted::new(1));
        let cache = Cache::new(source.clone());
        cache
            .put(Beacon::new(42, Scripted::randomness(42)))
            .await
            .unwrap();
        let beacon = cache.by_round(42).await.unwrap();
        assert!(beacon.round == 42);
        assert!(source.fetches.load(Ordering::SeqCst) == 0);
    }

    #[tokio::test]
    async fn by_round_miss_fetches_once_and_fills() {
        let source = Arc::new(Scripted::new(1));
        let cache = Cache::new(source.clone());
        assert!(cache.by_round(42).await.unwrap().round == 42);
        assert!(cache.by_round(42).await.unwrap().round == 42);
        assert!(source.fetches.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test]
    async fn by_round_fill_never_regresses_latest() {
        let cache = Cache::new(Scripted::new(1));
        cache
            .put(Beacon::new(100, Scripted::randomness(100)))
            .await
            .unwrap();
        assert!(cache.by_round(50).await.unwrap().round == 50);
        assert!(cache.latest().await.unwrap().round == 100);
        assert!(cache.len().await == 2);
    }

    #[tokio::test]
    async fn by_round_times_out_instead_of_hanging() {
        let cache = Cache::configured(Stalled, snappy(10));
        match cache.by_round(7).await {
            Err(CacheError::SourceUnavailable { round, .. }) => assert!(round == 7),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn by_round_reports_source_failure() {
        let cache = Cache::new(Broken);
        match cache.by_round(7).await {
            Err(CacheError::SourceUnavailable { round, cause }) => {
                assert!(round == 7);
                assert!(cause.contains("unreachable"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn concurrent_duplicate_fetches_converge() {
        let source = Arc::new(Scripted::new(1));
        let cache = Arc::new(Cache::new(source.clone()));
        let (a, b) = tokio::join!(cache.by_round(64), cache.by_round(64));
        assert!(a.unwrap() == b.unwrap());
        assert!(cache.len().await == 1);
    }

    #[tokio::test]
    async fn refresh_loop_advances_latest() {
        let cache = Arc::new(Cache::configured(Scripted::new(1), snappy(10)));
        cache.start_refresh().await;
        tokio::time::sleep(Duration::from_millis(60)).await;
        let first = cache.latest().await.unwrap().round;
        tokio::time::sleep(Duration::from_millis(60)).await;
        let later = cache.latest().await.unwrap().round;
        cache.stop_refresh().await;
        assert!(first >= 1);
        assert!(later > first);
    }

    #[tokio::test]
    async fn refresh_start_is_idempotent() {
        let source = Arc::new(Scripted::new(1));
        let cache = Arc::new(Cache::configured(source.clone(), snappy(10)));
        cache.start_refresh().await;
        cache.start_refresh().await;
        tokio::time::sleep(Duration::from_millis(35)).await;
        cache.stop_refresh().await;
        cache.stop_refresh().await;
        let fetches = source.fetches.load(Ordering::SeqCst);
        // one loop at 10ms cadence, not two
        assert!(fetches <= 6, "saw {} fetches", fetches);
    }

    #[tokio::test]
    async fn refresh_survives_source_failure() {
        let cache = Arc::new(Cache::configured(Broken, snappy(10)));
        cache.start_refresh().await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        // loop still running and stoppable after repeated failures
        assert!(cache.latest().await == Err(CacheError::NotYetAvailable));
        cache.stop_refresh().await;
    }

    #[tokio::test]
    async fn close_fails_everything_and_closes_source_once() {
        let source = Arc::new(Scripted::new(1));
        let cache = Arc::new(Cache::new(source.clone()));
        cache.start_refresh().await;
        cache.close().await;
        cache.close().await;
        assert!(source.closes.load(Ordering::SeqCst) == 1);
        assert!(cache.latest().await == Err(CacheError::Closed));
        assert!(cache.by_round(1).await == Err(CacheError::Closed));
        assert!(cache.put(Beacon::new(1, vec![1])).await == Err(CacheError::Closed));
    }
}
