//! Play blackjack at the terminal.

use core::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::terminal::Terminal;
use bjsim::{Game, GameOptions, Interaction, MAX_DECKS, MAX_SEATS};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "blackjack")]
#[command(about = "Single-table blackjack at the terminal")]
struct Args {
    /// Number of player hands (seats)
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_SEATS))
    )]
    hands: u8,

    /// Number of decks in the shoe
    #[arg(
        short,
        long,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_DECKS))
    )]
    decks: u8,

    /// Max splits per original hand
    #[arg(long, default_value_t = 2)]
    max_splits: u8,

    /// RNG seed (0 picks one from the clock)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Dealer stands on soft 17
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    soft17: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| elapsed.as_nanos() as u64)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the table.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = if args.seed == 0 { clock_seed() } else { args.seed };
    let options = GameOptions::default()
        .with_seats(args.hands)
        .with_decks(args.decks)
        .with_max_splits(args.max_splits)
        .with_stand_on_soft_17(args.soft17);
    tracing::info!(?options, seed, "starting session");

    let mut game = Game::new(options, seed)?;
    let mut ui = Terminal::stdio();

    ui.notify("Welcome to CLI Blackjack.");
    ui.notify("Actions: [h]it, [s]tand, [d]ouble (1 card), s[p]lit (if allowed). [q] to quit.");
    ui.notify(
        "Payouts: Blackjack 3:2. If dealer busts: wins pay 2:1. Otherwise even money; push returns bet.",
    );
    ui.notify(
        "Default bet is 1 (you can change at round start). Shoe reshuffles automatically when exhausted.",
    );

    game.run(&mut ui);
    Ok(())
}
