// ===== cipherforge/src/reports/mod.rs =====
use cipherforge::api::SolveOutcome;
use cipherforge::key::SubstitutionKey;
use cipherforge::scorer::ModelSource;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

/// Two paired rows per half-alphabet: cipher letters over their
/// plaintext assignments.
pub fn print_key_table(key: &SubstitutionKey) {
    let mapping = key.mapping();
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 13;
    for (offset, chunk) in mapping.as_bytes().chunks(cols).enumerate() {
        let cipher_row: Vec<Cell> = (0..chunk.len())
            .map(|i| {
                let c = (b'A' + (offset * cols + i) as u8) as char;
                Cell::new(c)
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        let plain_row: Vec<Cell> = chunk
            .iter()
            .map(|&b| {
                Cell::new(b as char)
                    .fg(Color::Cyan)
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cipher_row);
        table.add_row(plain_row);
    }
    println!("{}", table);
}

pub fn print_solve_report(outcome: &SolveOutcome, source: ModelSource) {
    println!("\n=== 🏆 DECRYPTION RESULT ===");
    if outcome.cache_hit {
        println!("📦 Cached result found for this input. Search skipped.");
    }
    println!("Hash:  {}", outcome.hash);
    println!("Score: {:.2}", outcome.candidate.score);
    if source == ModelSource::Builtin {
        println!("⚠️  Scored with the built-in fallback table.");
    }

    println!("\nKey (cipher → plain):");
    print_key_table(&outcome.candidate.key);
}

pub fn print_caesar_report(chi: &(u8, String, f32), quad: &(u8, String, f32)) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Method").add_attribute(Attribute::Bold),
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Chi-squared"),
        Cell::new(chi.0).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", chi.2)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Quadgram"),
        Cell::new(quad.0).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", quad.2)).set_alignment(CellAlignment::Right),
    ]);

    println!("\n=== Caesar Baselines ===");
    println!("{}", table);

    if chi.0 != quad.0 {
        println!("⚠️  Methods disagree; quadgram result shown below.");
    }
}
