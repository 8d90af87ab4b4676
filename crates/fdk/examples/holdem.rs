//! Texas Hold'em deal demo.
//!
//! Deals a six-seat table from a deterministic in-memory beacon, then
//! replays the same `(round, session)` pair to show that anyone holding the
//! pair can verify the deal. The live drand client is surrounding-code
//! territory; any [`Source`] plugs in here unchanged.
use fdk::beacon::Beacon;
use fdk::beacon::Cache;
use fdk::beacon::LATEST;
use fdk::beacon::Source;
use fdk::beacon::CacheError;
use fdk::core::Round;
use fdk::deal::DealError;
use fdk::deal::Dealer;
use fdk::deal::Shuffled;
use sha2::Digest;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

const PLAYERS: usize = 6;

/// In-memory beacon: each round's randomness is the SHA-256 of its number,
/// with "latest" advancing one round per fetch.
struct Memory(AtomicU64);

#[async_trait::async_trait]
impl Source for Memory {
    async fn fetch(&self, round: Round) -> anyhow::Result<Beacon> {
        let round = match round {
            LATEST => self.0.fetch_add(1, Ordering::SeqCst),
            pinned => pinned,
        };
        let randomness = sha2::Sha256::digest(round.to_be_bytes()).to_vec();
        Ok(Beacon::new(round, randomness))
    }
}

fn show(shuffled: &Shuffled) -> anyhow::Result<()> {
    log::info!(
        "table of {} | round {} | session {}",
        PLAYERS,
        shuffled.round(),
        shuffled.session()
    );
    for (seat, hole) in shuffled.holes(PLAYERS)?.iter().enumerate() {
        log::info!("seat {}: {} {}", seat, hole[0], hole[1]);
    }
    let board = shuffled.board(PLAYERS)?;
    log::info!("flop:  {} {} {}", board[0], board[1], board[2]);
    log::info!("turn:  {}", board[3]);
    log::info!("river: {}", board[4]);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fdk::core::log();

    let cache = Arc::new(Cache::new(Memory(AtomicU64::new(16173144))));
    cache.start_refresh().await;
    let dealer = Dealer::new(cache.clone());

    // fresh session against the latest observed beacon; the first refresh
    // tick may still be in flight, so wait it out
    let session = uuid::Uuid::now_v7().to_string();
    let dealt = loop {
        match dealer.deal(&session, None).await {
            Ok(dealt) => break dealt,
            Err(DealError::Cache(CacheError::NotYetAvailable)) => {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
            Err(e) => return Err(e.into()),
        }
    };
    show(&dealt)?;

    // anyone can replay the pinned (round, session) pair and compare
    let replay = dealer.deal(&session, Some(dealt.round())).await?;
    assert!(replay == dealt);
    log::info!("replay of round {} verified", dealt.round());

    cache.close().await;
    Ok(())
}
