use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use quasar::uci::UciEngine;

#[derive(Parser, Debug)]
#[command(author, version, about = "UCI chess engine with piece-square evaluation and alpha-beta search", long_about = None)]
struct Args {
    /// Search depth used for 'go depth' when no value is given
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Default time budget per move in milliseconds
    #[arg(long, default_value_t = 10_000)]
    movetime: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut engine = UciEngine::with_options(args.depth, Duration::from_millis(args.movetime));
    engine.run_loop();
    Ok(())
}
