use crate::reports;
use cipherforge::api::{solve_cached, CipherForgeState};
use cipherforge::cache::DecryptionCache;
use cipherforge::config::Config;
use cipherforge::error::{CfResult, CipherForgeError};
use cipherforge::optimizer::runner::SolveOptions;
use cipherforge::scorer::QuadgramScorer;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Encrypted input file.
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,

    /// Output file. Defaults to <input>.decrypted.txt.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SolveArgs, cache_path: &str) -> CfResult<()> {
    args.config.validate()?;

    let raw = std::fs::read_to_string(&args.input)?;
    let ciphertext = raw.trim();

    println!("🔐 Breaking substitution cipher: {}", args.input.display());

    let scorer = Arc::new(QuadgramScorer::load(&args.config.search.quadgrams)?);
    let state = CipherForgeState::with_cache(load_cache(cache_path));

    let outcome = solve_cached(
        &state,
        scorer.clone(),
        ciphertext,
        SolveOptions::from(&args.config),
    )?;

    save_cache(&state, cache_path)?;

    let out_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.decrypted.txt", args.input.display())));
    std::fs::write(&out_path, &outcome.candidate.plaintext)?;

    reports::print_solve_report(&outcome, scorer.source);
    println!("📝 Decrypted text written to: {}", out_path.display());

    Ok(())
}

/// A missing or unreadable cache file is a fresh start, never an error.
fn load_cache(path: &str) -> DecryptionCache {
    if !Path::new(path).exists() {
        return DecryptionCache::new();
    }
    match File::open(path).map_err(CipherForgeError::Io).and_then(|f| {
        DecryptionCache::from_json_reader(BufReader::new(f))
    }) {
        Ok(cache) => {
            tracing::debug!(path = %path, entries = cache.len(), "Loaded decryption cache");
            cache
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Cache file unreadable, starting fresh");
            DecryptionCache::new()
        }
    }
}

fn save_cache(state: &CipherForgeState, path: &str) -> CfResult<()> {
    let cache = state
        .cache
        .lock()
        .map_err(|e| CipherForgeError::Config(format!("Cache lock poisoned: {e}")))?;
    let file = File::create(path)?;
    cache.to_json_writer(file)
}
