//! Interactive Client Binary
//!
//! Plays against the computer in the terminal. The record lives in a JSON
//! file, so several terminals pointed at the same file share one wallet.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use roshambo::client::*;
use roshambo::clock::*;
use roshambo::game::*;
use roshambo::players::*;
use roshambo::save::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Rock-Paper-Scissors in the terminal", long_about = None)]
struct Args {
    /// Record file; falls back to ROSHAMBO_DATA, then ./roshambo.json
    #[arg(long)]
    data: Option<PathBuf>,
    /// Reward schedule: tiered or flat
    #[arg(long, default_value = "tiered")]
    schedule: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log()?;
    let storage = args
        .data
        .or_else(|| std::env::var_os("ROSHAMBO_DATA").map(PathBuf::from))
        .map(DiskStorage::from)
        .unwrap_or_else(DiskStorage::local);
    log::info!("record at {}", storage.path().display());
    let rules = Rules::from(Schedule::try_from(args.schedule.as_str())?);
    let mut client = Client::new(storage, rules, Calendar, Robot);
    println!("{}", Command::help());
    loop {
        draw(&client);
        let line = Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .context("read command")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match Command::try_from(line.as_str()) {
            Ok(Command::Quit) => break,
            Ok(command) => client.execute(command),
            Err(e) => Err(e),
        };
        match reply {
            Ok(reply) => say(&reply),
            Err(e) => say(&Reply::from(&e)),
        }
    }
    Ok(())
}

fn say(reply: &Reply) {
    let message = reply.message();
    match reply.status() {
        Status::Success => println!("{}", message.green()),
        Status::AlreadyClaimed => println!("{}", message.yellow()),
        Status::Error => println!("{}", message.red()),
        Status::Info => println!("{}", message),
    }
}

fn draw<S: Storage>(client: &Client<S>) {
    let state = client.state();
    let stats = state.stats();
    let header = format!("── {} ── {} coins ──", client.screen(), state.balance());
    println!("\n{}", header.bold());
    match client.screen() {
        Screen::Home => println!("play rock | paper | scissors, checkin, withdraw <n>, show <screen>"),
        Screen::Game => match state.round() {
            Some(round) => println!(
                "you {} {}  vs  {} {} computer",
                round.player().emoji(),
                round.player().name(),
                round.computer().name(),
                round.computer().emoji(),
            ),
            None => println!("choose: 🗿 rock  📄 paper  ✂️ scissors"),
        },
        Screen::Leaderboard => println!("{:>4}  {:<8}{:>8}", "1", "you", state.balance()),
        Screen::Checkin => match state.claimed_on(client.today()) {
            true => println!("daily reward claimed, come back tomorrow"),
            false => println!("daily reward of {} coins available", client.rules().daily()),
        },
        Screen::Stats => println!(
            "games {}  wins {}  losses {}  draws {}  win rate {}%  streak {}  best {}",
            stats.games_played(),
            stats.wins(),
            stats.losses(),
            stats.draws(),
            stats.win_rate(),
            stats.win_streak(),
            stats.best_streak(),
        ),
        Screen::Withdraw => println!(
            "available {} coins, at most {} per withdrawal",
            state.balance(),
            client.rules().cap()
        ),
    }
}
