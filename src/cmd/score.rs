use cipherforge::error::CfResult;
use cipherforge::scorer::{ModelSource, QuadgramScorer};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Text file to score.
    pub input: PathBuf,

    /// Path to a "TOKEN COUNT" quadgram table.
    #[arg(long)]
    pub quadgrams: Option<String>,
}

pub fn run(args: ScoreArgs) -> CfResult<()> {
    let text = std::fs::read_to_string(&args.input)?;
    let scorer = QuadgramScorer::load(&args.quadgrams)?;

    let letters = QuadgramScorer::letter_indices(&text).len();
    let score = scorer.score(&text);

    println!("Letters:  {}", letters);
    println!("Score:    {:.2}", score);
    if letters < 4 {
        println!("⚠️  Fewer than 4 letters: score is the neutral 0.0.");
    }
    if scorer.source == ModelSource::Builtin {
        println!("Model:    built-in fallback table");
    } else {
        println!("Model:    external table");
    }

    Ok(())
}
