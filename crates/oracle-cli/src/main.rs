//! CLI frontend for the Oracle fate deck.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oracle",
    about = "Oracle — a fate deck of truths, dares, and wildcards",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the persisted deck snapshot
    #[arg(long, default_value = ".oracle", global = true)]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one fate card and persist the depleted deck
    Draw {
        /// Category to draw from: light, deep, chaos
        category: String,

        /// Invoker name recorded with the draw
        #[arg(short, long, default_value = "guest")]
        name: String,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Affirm the age gate; unlocks chaos
        #[arg(long)]
        adult: bool,

        /// Taper wildcard odds by intensity (15/10/6%)
        #[arg(long)]
        tapered: bool,
    },

    /// Play an interactive fate deck session
    Play {
        /// Invoker name recorded with draws
        #[arg(short, long, default_value = "guest")]
        name: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Affirm the age gate; unlocks chaos
        #[arg(long)]
        adult: bool,

        /// Taper wildcard odds by intensity (15/10/6%)
        #[arg(long)]
        tapered: bool,
    },

    /// Show remaining cards per pool
    Status,

    /// Clear the persisted snapshot and restore the full deck
    Reset,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let state = cli.state;

    let result = match cli.command {
        Commands::Draw {
            category,
            name,
            seed,
            adult,
            tapered,
        } => commands::draw::run(&state, &category, &name, seed, adult, tapered),
        Commands::Play {
            name,
            seed,
            adult,
            tapered,
        } => commands::play::run(&state, &name, seed, adult, tapered),
        Commands::Status => commands::status::run(&state),
        Commands::Reset => commands::reset::run(&state),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
