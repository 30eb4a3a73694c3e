// ===== cipherforge/src/baseline.rs =====
//! Reference baselines for the Caesar special case, where the key space
//! collapses to 26 shifts and closed-form attacks beat any search.

use crate::scorer::QuadgramScorer;

pub const SHIFT_COUNT: u8 = 26;

/// Relative English letter frequencies (percent), a-z.
/// Kucera & Francis corpus figures.
const ENGLISH_FREQ: [f32; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Shift every letter back by `shift`, preserving case and passing
/// non-alphabetic characters through.
pub fn shift_decrypt(ciphertext: &str, shift: u8) -> String {
    let shift = shift % SHIFT_COUNT;
    ciphertext
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (b'A' + (c as u8 - b'A' + SHIFT_COUNT - shift) % SHIFT_COUNT) as char
            } else if c.is_ascii_lowercase() {
                (b'a' + (c as u8 - b'a' + SHIFT_COUNT - shift) % SHIFT_COUNT) as char
            } else {
                c
            }
        })
        .collect()
}

/// Brute force: all 26 candidate plaintexts, in shift order.
pub fn shift_candidates(ciphertext: &str) -> Vec<(u8, String)> {
    (0..SHIFT_COUNT)
        .map(|shift| (shift, shift_decrypt(ciphertext, shift)))
        .collect()
}

/// Chi-squared distance between a text's letter distribution and English.
/// Lower is better; a text with no letters scores infinity.
pub fn chi_squared(text: &str) -> f32 {
    let mut observed = [0u32; 26];
    let mut total = 0u32;
    for b in text.bytes() {
        if b.is_ascii_alphabetic() {
            observed[(b.to_ascii_lowercase() - b'a') as usize] += 1;
            total += 1;
        }
    }
    if total == 0 {
        return f32::INFINITY;
    }

    let mut chi_sq = 0.0;
    for i in 0..26 {
        let expected = ENGLISH_FREQ[i] / 100.0 * total as f32;
        let diff = observed[i] as f32 - expected;
        chi_sq += diff * diff / expected;
    }
    chi_sq
}

/// Frequency-analysis attack: pick the shift whose decryption sits
/// closest to English letter frequencies. Returns (shift, plaintext,
/// chi-squared).
pub fn crack_shift_chi_squared(ciphertext: &str) -> (u8, String, f32) {
    let mut best = (0u8, shift_decrypt(ciphertext, 0), f32::INFINITY);
    for shift in 0..SHIFT_COUNT {
        let candidate = shift_decrypt(ciphertext, shift);
        let score = chi_squared(&candidate);
        if score < best.2 {
            best = (shift, candidate, score);
        }
    }
    best
}

/// Quadgram attack on a shift cipher: same model as the full solver, but
/// enumerating the 26 shifts instead of searching. Returns (shift,
/// plaintext, quadgram score).
pub fn crack_shift_quadgram(scorer: &QuadgramScorer, ciphertext: &str) -> (u8, String, f32) {
    let identity = shift_decrypt(ciphertext, 0);
    let identity_score = scorer.score(&identity);
    let mut best = (0u8, identity, identity_score);
    for shift in 1..SHIFT_COUNT {
        let candidate = shift_decrypt(ciphertext, shift);
        let score = scorer.score(&candidate);
        if score > best.2 {
            best = (shift, candidate, score);
        }
    }
    best
}
