//! Rock-Paper-Scissors coin game.
//!
//! One state machine, two front ends:
//!
//! - [`client`]: interactive terminal client backed by a persisted key/value record
//! - [`frame`]: Farcaster Frame server holding per-session state in memory
//!
//! Both mutate the same [`game::GameState`] through the same transitions.
//! Randomness and "today" are injected through [`players::Opponent`] and
//! [`clock::Clock`] so every transition is deterministic under test.

pub mod client;
pub mod clock;
#[cfg(feature = "server")]
pub mod frame;
pub mod game;
pub mod ledger;
pub mod players;
pub mod save;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coin balances, rewards and withdrawal amounts.
pub type Coins = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and mock receipts.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// REWARD SCHEDULES
// Two schedules exist; Tiered is the default for both front ends.
// ============================================================================
/// Flat schedule: coins per win.
pub const FLAT_WIN: Coins = 1;
/// Flat schedule: coins per draw.
pub const FLAT_DRAW: Coins = 0;
/// Flat schedule: coins per loss.
pub const FLAT_LOSE: Coins = 0;
/// Flat schedule: daily check-in reward.
pub const FLAT_DAILY: Coins = 1;
/// Tiered schedule: coins per win.
pub const TIERED_WIN: Coins = 10;
/// Tiered schedule: coins per draw.
pub const TIERED_DRAW: Coins = 5;
/// Tiered schedule: coins per loss.
pub const TIERED_LOSE: Coins = 2;
/// Tiered schedule: daily check-in reward.
pub const TIERED_DAILY: Coins = 50;

// ============================================================================
// WALLET LIMITS
// ============================================================================
/// Balance of a brand new player.
pub const OPENING_BALANCE: Coins = 0;
/// Hard per-transaction withdrawal cap.
pub const WITHDRAW_CAP: Coins = 1000;

// ============================================================================
// FRAME PARAMETERS
// ============================================================================
/// Frame image width in pixels (1.91:1 with height).
pub const FRAME_WIDTH: u32 = 800;
/// Frame image height in pixels.
pub const FRAME_HEIGHT: u32 = 418;
/// Port used when neither flag nor environment names a bind address.
pub const DEFAULT_PORT: u16 = 5000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Frame sessions live only in memory, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => log::warn!("interrupt received, exiting immediately"),
            Err(e) => log::warn!("interrupt handler failed ({}), exiting anyway", e),
        }
        std::process::exit(0);
    });
}
