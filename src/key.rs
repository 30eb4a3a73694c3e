// ===== cipherforge/src/key.rs =====
use crate::error::{CfResult, CipherForgeError};
use fastrand::Rng;

pub const ALPHABET_LEN: usize = 26;

/// A substitution key: a bijection from cipher letter to plain letter.
///
/// `map[c]` is the plaintext letter index (0..26) assigned to cipher
/// letter index `c`. Keys are immutable values; `mutated` returns a fresh
/// key so the previous candidate stays intact for backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionKey {
    map: [u8; ALPHABET_LEN],
}

impl SubstitutionKey {
    /// The identity key (every letter maps to itself).
    pub fn identity() -> Self {
        let mut map = [0u8; ALPHABET_LEN];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { map }
    }

    /// Uniformly random key.
    pub fn random(rng: &mut Rng) -> Self {
        let mut key = Self::identity();
        rng.shuffle(&mut key.map);
        key
    }

    /// New key with the plaintext assignments of two distinct random
    /// cipher letters swapped. The receiver is not modified.
    pub fn mutated(&self, rng: &mut Rng) -> Self {
        let a = rng.usize(0..ALPHABET_LEN);
        let mut b = rng.usize(0..ALPHABET_LEN - 1);
        if b >= a {
            b += 1;
        }
        let mut next = *self;
        next.map.swap(a, b);
        next
    }

    #[inline(always)]
    pub fn plain_index(&self, cipher_index: u8) -> u8 {
        self.map[cipher_index as usize]
    }

    /// Substitute every ASCII letter through the mapping, preserving case.
    /// Non-alphabetic characters pass through unchanged. Pure.
    pub fn apply(&self, ciphertext: &str) -> String {
        ciphertext
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    (b'A' + self.map[(c as u8 - b'A') as usize]) as char
                } else if c.is_ascii_lowercase() {
                    (b'a' + self.map[(c as u8 - b'a') as usize]) as char
                } else {
                    c
                }
            })
            .collect()
    }

    /// Permutation inverse: plain letter back to cipher letter.
    pub fn inverse(&self) -> Self {
        let mut inv = [0u8; ALPHABET_LEN];
        for (cipher, &plain) in self.map.iter().enumerate() {
            inv[plain as usize] = cipher as u8;
        }
        Self { map: inv }
    }

    /// 26-char uppercase table: position i holds the plaintext letter for
    /// cipher letter i. This is the audit/persistence representation.
    pub fn mapping(&self) -> String {
        self.map.iter().map(|&p| (b'A' + p) as char).collect()
    }

    /// Parse the 26-char table form, rejecting anything that is not a
    /// total bijection over A-Z.
    pub fn from_mapping(table: &str) -> CfResult<Self> {
        let bytes = table.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(CipherForgeError::Config(format!(
                "Key table must be {} letters, got {}",
                ALPHABET_LEN,
                bytes.len()
            )));
        }
        let mut map = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(CipherForgeError::Config(format!(
                    "Key table contains non-uppercase byte at position {}",
                    i
                )));
            }
            let p = (b - b'A') as usize;
            if seen[p] {
                return Err(CipherForgeError::Config(format!(
                    "Key table assigns '{}' twice",
                    b as char
                )));
            }
            seen[p] = true;
            map[i] = p as u8;
        }
        Ok(Self { map })
    }
}
