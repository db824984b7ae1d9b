//! Command-line entry point: plays one round and prints each player's
//! outcome block.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use twentyone::{Table, TableOptions};

/// Plays a round of twenty-one against the dealer.
#[derive(Debug, Parser)]
#[command(name = "twentyone", version, about)]
struct Args {
    /// Number of players seated at the table.
    #[arg(default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=40))]
    players: u8,

    /// Seed for the dealer's random source; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of decks loaded into the draw pile.
    #[arg(long, default_value_t = 1)]
    decks: u8,

    /// Print outcomes as JSON lines instead of text blocks.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = TableOptions::default().with_decks(args.decks);
    let mut table = Table::new(options, seed);
    for number in 1..=args.players {
        table.join(format!("Player #{number}"));
    }

    let outcomes = match table.play_round() {
        Ok(outcomes) => outcomes,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    for (index, outcome) in outcomes.iter().enumerate() {
        if args.json {
            match serde_json::to_string(outcome) {
                Ok(line) => println!("{line}"),
                Err(error) => {
                    eprintln!("{error}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            if index > 0 {
                println!();
            }
            println!("{outcome}");
        }
    }

    ExitCode::SUCCESS
}
