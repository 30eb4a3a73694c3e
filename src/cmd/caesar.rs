use crate::reports;
use cipherforge::baseline;
use cipherforge::error::CfResult;
use cipherforge::scorer::QuadgramScorer;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CaesarArgs {
    /// Encrypted input file.
    pub input: PathBuf,

    /// Path to a "TOKEN COUNT" quadgram table.
    #[arg(long)]
    pub quadgrams: Option<String>,

    /// Also print all 26 brute-force candidates.
    #[arg(short, long, default_value_t = false)]
    pub all: bool,
}

pub fn run(args: CaesarArgs) -> CfResult<()> {
    let raw = std::fs::read_to_string(&args.input)?;
    let ciphertext = raw.trim();

    let scorer = QuadgramScorer::load(&args.quadgrams)?;

    if args.all {
        println!("\n=== Brute-Force Candidates ===");
        for (shift, candidate) in baseline::shift_candidates(ciphertext) {
            println!("Shift {:2}: {}", shift, preview(&candidate));
        }
    }

    let chi = baseline::crack_shift_chi_squared(ciphertext);
    let quad = baseline::crack_shift_quadgram(&scorer, ciphertext);

    reports::print_caesar_report(&chi, &quad);

    println!("\n{}", quad.1);

    Ok(())
}

fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(60)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}
