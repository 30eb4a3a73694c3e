// ===== cipherforge/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Cache file mapping content hashes to solved decryptions.
    #[arg(global = true, long, default_value = "decryption_cache.json")]
    cache: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Break a substitution cipher with the quadgram hill climb.
    Solve(cmd::solve::SolveArgs),
    /// Run the Caesar-shift reference baselines.
    Caesar(cmd::caesar::CaesarArgs),
    /// Print the quadgram score of a text.
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Solve(args) => cmd::solve::run(args, &cli.cache),
        Commands::Caesar(args) => cmd::caesar::run(args),
        Commands::Score(args) => cmd::score::run(args),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
