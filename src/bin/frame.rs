//! Frame Server Binary
//!
//! Serves the Farcaster Frame game and the mock reward ledger API.

use anyhow::Context;
use clap::Parser;
use roshambo::frame::*;
use roshambo::game::*;
use roshambo::*;

#[derive(Parser)]
#[command(author, version, about = "Rock-Paper-Scissors Farcaster Frame server", long_about = None)]
struct Args {
    /// Listen address; falls back to BIND_ADDR, then 0.0.0.0:5000
    #[arg(long)]
    bind: Option<String>,
    /// Public URL button targets are rooted at; falls back to BASE_URL
    #[arg(long)]
    base_url: Option<String>,
    /// Reward schedule: tiered or flat
    #[arg(long, default_value = "tiered")]
    schedule: String,
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;
    kys();
    let bind = args
        .bind
        .or_else(|| std::env::var("BIND_ADDR").ok())
        .unwrap_or_else(|| format!("0.0.0.0:{}", DEFAULT_PORT));
    let port = bind.rsplit(':').next().unwrap_or_default().to_string();
    let base = args
        .base_url
        .or_else(|| std::env::var("BASE_URL").ok())
        .unwrap_or_else(|| format!("http://localhost:{}", port));
    let schedule = Schedule::try_from(args.schedule.as_str())?;
    let rules = Rules::from(schedule);
    log::info!("{} schedule, daily reward {}", schedule, rules.daily());
    Server::from((Lobby::from(rules), Origin::from(base)))
        .run(&bind, args.workers)
        .await
        .with_context(|| format!("serving on {}", bind))
}
