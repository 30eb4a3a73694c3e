// ===== cipherforge/src/api.rs =====
use crate::cache::{content_hash, DecryptionCache};
use crate::error::{CfResult, CipherForgeError};
use crate::optimizer::runner::{ScoredCandidate, SolveOptions, Solver};
use crate::scorer::QuadgramScorer;
use std::sync::{Arc, Mutex};

/// Shared state for cached solving. The cache is the only mutable
/// resource; a single lock is enough at its write frequency.
#[derive(Default)]
pub struct CipherForgeState {
    pub cache: Mutex<DecryptionCache>,
}

impl CipherForgeState {
    pub fn with_cache(cache: DecryptionCache) -> Self {
        Self {
            cache: Mutex::new(cache),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub candidate: ScoredCandidate,
    /// Hex content hash of the input bytes (the cache key).
    pub hash: String,
    /// True when the result came from the cache and no search ran.
    pub cache_hit: bool,
}

/// Solve a ciphertext, consulting the content-addressed cache first.
///
/// A corrupt stored entry is logged and treated as a miss; the fresh
/// result then replaces it. On a genuine miss the result is written back
/// before returning, so a repeat request with identical bytes is
/// guaranteed a hit.
pub fn solve_cached(
    state: &CipherForgeState,
    scorer: Arc<QuadgramScorer>,
    ciphertext: &str,
    options: SolveOptions,
) -> CfResult<SolveOutcome> {
    let hash = content_hash(ciphertext.as_bytes());

    let mut corrupt = false;
    {
        let cache = lock_cache(state)?;
        match cache.get(&hash) {
            Ok(Some(candidate)) => {
                tracing::info!(hash = %hash, "Cache hit, skipping search");
                return Ok(SolveOutcome {
                    candidate,
                    hash,
                    cache_hit: true,
                });
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring corrupt cache entry");
                corrupt = true;
            }
        }
    }

    // Search runs outside the lock; concurrent solves of different
    // ciphertexts only contend on the brief get/put windows.
    let solver = Solver::new(scorer, options);
    let candidate = solver.solve(ciphertext);

    let mut cache = lock_cache(state)?;
    if corrupt {
        cache.repair(&hash, &candidate);
    } else {
        cache.put(&hash, &candidate);
    }

    Ok(SolveOutcome {
        candidate,
        hash,
        cache_hit: false,
    })
}

fn lock_cache(
    state: &CipherForgeState,
) -> CfResult<std::sync::MutexGuard<'_, DecryptionCache>> {
    state
        .cache
        .lock()
        .map_err(|e| CipherForgeError::Config(format!("Cache lock poisoned: {e}")))
}
