// ===== cipherforge/src/optimizer/runner.rs =====
use crate::config::Config;
use crate::key::SubstitutionKey;
use crate::optimizer::Climber;
use crate::scorer::QuadgramScorer;
use rayon::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub restarts: usize,
    pub iterations: usize,
    pub seed: Option<u64>,
}

impl From<&Config> for SolveOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            restarts: cfg.search.restarts,
            iterations: cfg.search.iterations,
            seed: cfg.search.seed,
        }
    }
}

/// A decryption candidate: plaintext, the key that produced it, and its
/// quadgram score (higher is more English-like).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub plaintext: String,
    pub key: SubstitutionKey,
    pub score: f32,
}

/// Multi-restart driver: fans N independent climbs out over the rayon
/// pool and reduces to the best by score.
pub struct Solver {
    scorer: Arc<QuadgramScorer>,
    options: SolveOptions,
}

impl Solver {
    pub fn new(scorer: Arc<QuadgramScorer>, options: SolveOptions) -> Self {
        Self { scorer, options }
    }

    pub fn scorer(&self) -> &Arc<QuadgramScorer> {
        &self.scorer
    }

    pub fn solve(&self, ciphertext: &str) -> ScoredCandidate {
        let opts = &self.options;
        let restarts = opts.restarts.max(1);
        let cipher = QuadgramScorer::letter_indices(ciphertext);

        // Restarts share only the read-only scorer; each gets a derived
        // seed so a seeded solve is reproducible regardless of how rayon
        // schedules the runs.
        let runs: Vec<(SubstitutionKey, f32)> = (0..restarts)
            .into_par_iter()
            .map(|i| {
                let seed = opts.seed.map(|s| s.wrapping_add(i as u64));
                let mut climber = Climber::new(self.scorer.clone(), &cipher, seed);
                let accepted = climber.climb(opts.iterations);
                tracing::debug!(
                    restart = i,
                    score = climber.best_score,
                    accepted,
                    "Restart finished"
                );
                (climber.best_key, climber.best_score)
            })
            .collect();

        // Max-reduction in restart order: ties go to the first run found.
        let mut best = &runs[0];
        for run in &runs[1..] {
            if run.1 > best.1 {
                best = run;
            }
        }

        tracing::info!(
            score = best.1,
            restarts,
            iterations = opts.iterations,
            "Search complete"
        );

        ScoredCandidate {
            plaintext: best.0.apply(ciphertext),
            key: best.0,
            score: best.1,
        }
    }
}
