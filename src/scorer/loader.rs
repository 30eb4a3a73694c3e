// ===== cipherforge/src/scorer/loader.rs =====
use crate::error::CfResult;
use std::io::{BufRead, BufReader, Read};

/// Parse whitespace-separated "TOKEN COUNT" records, one per line. Any
/// run of spaces or tabs separates the fields. Tokens must be 4 ASCII
/// letters; anything else is skipped, not fatal.
pub fn load_quadgram_counts<R: Read>(reader: R) -> CfResult<Vec<([u8; 4], u64)>> {
    let mut counts = Vec::new();
    let mut skipped = 0usize;
    let mut lines_read = 0usize;

    for line in BufReader::new(reader).lines() {
        let line = line?;
        lines_read += 1;

        let mut fields = line.split_whitespace();
        let (token, count_raw) = match (fields.next(), fields.next()) {
            (Some(t), Some(c)) => (t, c),
            (None, _) => continue, // blank line
            _ => {
                skipped += 1;
                continue;
            }
        };

        let bytes = token.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            skipped += 1;
            continue;
        }

        let count: u64 = match count_raw.parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let mut quad = [0u8; 4];
        for (slot, &b) in quad.iter_mut().zip(bytes) {
            *slot = b.to_ascii_uppercase() - b'A';
        }
        counts.push((quad, count));
    }

    if skipped > 0 {
        tracing::warn!(skipped, lines_read, "Skipped invalid rows in quadgram table");
    }
    tracing::debug!(loaded = counts.len(), lines_read, "Quadgram table scanned");

    Ok(counts)
}
