// ===== cipherforge/src/optimizer/mod.rs =====
pub mod runner;

use crate::key::SubstitutionKey;
use crate::scorer::QuadgramScorer;
use std::sync::Arc;

/// One hill-climb run over the key space.
///
/// Holds its own RNG stream and key state; the scorer is shared
/// read-only, so any number of climbers can run in parallel. Mutations
/// are generated from the CURRENT key and accepted only on strict score
/// improvement; the best key ever seen is tracked separately because the
/// run must return the best candidate, not the final one.
pub struct Climber<'a> {
    pub scorer: Arc<QuadgramScorer>,
    cipher: &'a [u8],

    pub current_key: SubstitutionKey,
    pub current_score: f32,
    pub best_key: SubstitutionKey,
    pub best_score: f32,

    pub rng: fastrand::Rng,
}

impl<'a> Climber<'a> {
    /// Start a run from a fresh random key. `cipher` is the ciphertext
    /// reduced to letter indices (see `QuadgramScorer::letter_indices`).
    pub fn new(scorer: Arc<QuadgramScorer>, cipher: &'a [u8], seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        let key = SubstitutionKey::random(&mut rng);
        let score = scorer.score_mapped(cipher, &key);

        Climber {
            scorer,
            cipher,
            current_key: key,
            current_score: score,
            best_key: key,
            best_score: score,
            rng,
        }
    }

    /// Run the mutate/score/accept loop for `iterations` steps. The
    /// budget is the only terminal condition; a run cannot fail, and a
    /// run that rejects every mutation still returns its initial guess.
    /// Returns the number of accepted mutations.
    pub fn climb(&mut self, iterations: usize) -> usize {
        let mut accepted = 0;

        for _ in 0..iterations {
            let candidate = self.current_key.mutated(&mut self.rng);
            let score = self.scorer.score_mapped(self.cipher, &candidate);

            // Strict improvement only; equal-score moves are rejected.
            if score > self.current_score {
                self.current_key = candidate;
                self.current_score = score;
                accepted += 1;

                if score > self.best_score {
                    self.best_key = candidate;
                    self.best_score = score;
                }
            }
        }
        accepted
    }
}
