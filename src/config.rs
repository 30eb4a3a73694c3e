use crate::error::{CfResult, CipherForgeError};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Independent hill-climb restarts per solve.
    #[arg(long, default_value_t = 20)]
    pub restarts: usize,

    /// Mutation budget per restart.
    #[arg(long, default_value_t = 1000)]
    pub iterations: usize,

    /// Seed for the search RNG. Omit for a nondeterministic run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a "TOKEN COUNT" quadgram table. Falls back to the
    /// built-in table when absent.
    #[arg(long)]
    pub quadgrams: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchParams {
                restarts: 20,
                iterations: 1000,
                seed: None,
                quadgrams: None,
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> CfResult<()> {
        if self.search.restarts == 0 {
            return Err(CipherForgeError::Config(
                "restarts must be a positive integer".to_string(),
            ));
        }
        if self.search.iterations == 0 {
            return Err(CipherForgeError::Config(
                "iterations must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}
