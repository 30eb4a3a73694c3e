// ===== cipherforge/src/scorer/mod.rs =====
pub mod loader;

use crate::error::{CfResult, CipherForgeError};
use crate::key::{SubstitutionKey, ALPHABET_LEN};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

const QUADGRAM_SPACE: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;
const TRIGRAM_SPACE: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// Fallback table, same "TOKEN COUNT" format as an external resource.
const BUILTIN_QUADGRAMS: &str = include_str!("quadgrams_builtin.txt");

/// Where the loaded model came from. Callers may want to know a result
/// was scored against the small built-in table rather than a full corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    External,
    Builtin,
}

/// Quadgram log-likelihood model.
///
/// A flat 26^4 table of log10 probabilities, pre-filled with the floor
/// value so the scoring loop is a single lookup per window. Immutable
/// after construction and safe to share across search threads.
pub struct QuadgramScorer {
    pub source: ModelSource,
    pub floor: f32,
    log_probs: Vec<f32>,
}

impl QuadgramScorer {
    /// Load from an optional external resource path. A missing file is
    /// not an error: the built-in table is substituted silently.
    pub fn load(resource: &Option<String>) -> CfResult<Self> {
        match resource {
            Some(path) if Path::new(path).exists() => {
                tracing::info!(path = %path, "Loading quadgram table");
                let file = std::fs::File::open(path)?;
                Self::from_reader(file, ModelSource::External)
            }
            Some(path) => {
                tracing::debug!(path = %path, "Quadgram table not found, using built-in model");
                Ok(Self::builtin())
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self::from_reader(Cursor::new(BUILTIN_QUADGRAMS), ModelSource::Builtin)
            .expect("embedded quadgram table is valid")
    }

    pub fn from_reader<R: std::io::Read>(reader: R, source: ModelSource) -> CfResult<Self> {
        let counts = loader::load_quadgram_counts(reader)?;
        Self::from_counts(&counts, source)
    }

    pub fn from_counts(counts: &[([u8; 4], u64)], source: ModelSource) -> CfResult<Self> {
        // Repeated tokens contribute one aggregated count, so the stored
        // probabilities stay consistent with the normalizing total.
        let mut aggregated: HashMap<[u8; 4], u64> = HashMap::new();
        for &(token, count) in counts {
            *aggregated.entry(token).or_insert(0) += count;
        }

        let total: u64 = aggregated.values().sum();
        if total == 0 {
            return Err(CipherForgeError::Config(
                "Quadgram table has no usable entries".to_string(),
            ));
        }

        // Unseen quadgrams are rarer than any observed singleton.
        let floor = (0.01 / total as f64).log10() as f32;
        let mut log_probs = vec![floor; QUADGRAM_SPACE];
        for (token, &count) in &aggregated {
            if count == 0 {
                continue;
            }
            let idx = token
                .iter()
                .fold(0usize, |acc, &l| acc * ALPHABET_LEN + l as usize);
            log_probs[idx] = (count as f64 / total as f64).log10() as f32;
        }

        Ok(Self {
            source,
            floor,
            log_probs,
        })
    }

    /// Extract ASCII letters as 0..26 indices, dropping everything else.
    pub fn letter_indices(text: &str) -> Vec<u8> {
        text.bytes()
            .filter(|b| b.is_ascii_alphabetic())
            .map(|b| b.to_ascii_uppercase() - b'A')
            .collect()
    }

    /// Log-likelihood of a text. Deterministic; fewer than 4 letters
    /// scores 0.0 (empty sum) rather than failing.
    pub fn score(&self, text: &str) -> f32 {
        self.score_mapped(&Self::letter_indices(text), &SubstitutionKey::identity())
    }

    pub fn score_indices(&self, letters: &[u8]) -> f32 {
        self.score_mapped(letters, &SubstitutionKey::identity())
    }

    /// Score cipher letter indices as decrypted through `key`, without
    /// materializing the plaintext. This is the search hot path.
    #[inline]
    pub fn score_mapped(&self, cipher: &[u8], key: &SubstitutionKey) -> f32 {
        if cipher.len() < 4 {
            return 0.0;
        }

        let mut tri = 0usize;
        for &c in &cipher[..3] {
            tri = tri * ALPHABET_LEN + key.plain_index(c) as usize;
        }

        let mut score = 0.0f32;
        for &c in &cipher[3..] {
            let quad = tri * ALPHABET_LEN + key.plain_index(c) as usize;
            score += self.log_probs[quad];
            tri = quad % TRIGRAM_SPACE;
        }
        score
    }
}
