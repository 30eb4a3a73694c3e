// ===== cipherforge/src/cache.rs =====
use crate::error::{CfResult, CipherForgeError};
use crate::key::SubstitutionKey;
use crate::optimizer::runner::ScoredCandidate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{Read, Write};

/// Hex-encoded SHA-256 of the raw ciphertext bytes. Identical bytes
/// always produce the same cache key.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// The persisted record shape: decrypted text, the 26-letter key table,
/// and the quadgram score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub decrypted_text: String,
    pub mapping: String,
    pub score: f32,
}

impl From<&ScoredCandidate> for CacheEntry {
    fn from(c: &ScoredCandidate) -> Self {
        Self {
            decrypted_text: c.plaintext.clone(),
            mapping: c.key.mapping(),
            score: c.score,
        }
    }
}

impl CacheEntry {
    /// Rehydrate a candidate, rejecting entries whose key table is not a
    /// bijection or whose score is not a number.
    fn to_candidate(&self) -> CfResult<ScoredCandidate> {
        let key = SubstitutionKey::from_mapping(&self.mapping)?;
        if !self.score.is_finite() {
            return Err(CipherForgeError::Config(format!(
                "score {} is not finite",
                self.score
            )));
        }
        Ok(ScoredCandidate {
            plaintext: self.decrypted_text.clone(),
            key,
            score: self.score,
        })
    }
}

/// Content-addressed memo of solved ciphertexts.
///
/// A pure key-value store: it never reads files or ciphertext, never
/// expires entries, and never overwrites one once written. Persistence
/// is the caller's job via the reader/writer helpers.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecryptionCache {
    entries: HashMap<String, CacheEntry>,
}

impl DecryptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a previously solved ciphertext by content hash. A stored
    /// entry that fails validation surfaces as `CorruptCacheEntry`;
    /// callers should treat that as a miss, not a failure.
    pub fn get(&self, hash: &str) -> CfResult<Option<ScoredCandidate>> {
        match self.entries.get(hash) {
            None => Ok(None),
            Some(entry) => entry
                .to_candidate()
                .map(Some)
                .map_err(|e| CipherForgeError::CorruptCacheEntry {
                    hash: hash.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Store a solved result. First write wins: a hash that is already
    /// present keeps its existing entry. Returns whether an insert
    /// happened.
    pub fn put(&mut self, hash: &str, candidate: &ScoredCandidate) -> bool {
        match self.entries.entry(hash.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(CacheEntry::from(candidate));
                true
            }
        }
    }

    /// Overwrite an entry. Only valid for replacing an entry that failed
    /// validation; healthy entries go through `put` and are never
    /// rewritten.
    pub fn repair(&mut self, hash: &str, candidate: &ScoredCandidate) {
        self.entries
            .insert(hash.to_string(), CacheEntry::from(candidate));
    }

    pub fn from_json_reader<R: Read>(reader: R) -> CfResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_writer<W: Write>(&self, writer: W) -> CfResult<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }
}
