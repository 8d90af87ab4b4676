//! Core type aliases, constants, and runtime utilities for fairdeck.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the fairdeck workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Beacon round number, monotonically increasing across the beacon's lifetime.
/// Round 0 is reserved on the wire to request the latest available round.
pub type Round = u64;

// ============================================================================
// BEACON CACHE PARAMETERS
// ============================================================================
/// Maximum number of beacon records retained before oldest-round eviction.
pub const CACHE_CAPACITY: usize = 100;
/// Cadence of the background latest-beacon refresh.
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(3);
/// Upper bound on any single beacon fetch, on-demand or background.
pub const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;
/// Private cards dealt to each seat.
pub const HOLE_CARDS: usize = 2;
/// Community cards dealt to the table.
pub const BOARD_CARDS: usize = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
