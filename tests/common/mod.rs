//! Common test helpers and fixtures shared across the test suite.

use srcrec::material::{
    ATOMIC_WEIGHT_COLUMN, DENSITY_COLUMN, ELEMENT_COUNT_COLUMN, PHASE_COLUMN, TYPE_COLUMN,
};
use std::path::PathBuf;

/// Directory holding the on-disk fixtures.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

/// Path of a fixture file relative to `tests/data`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    data_dir().join(name)
}

/// Build a materials header line with every value at its fixed column.
#[allow(dead_code)]
pub fn header_line(
    id: &str,
    atomic_weight: &str,
    density: &str,
    phase: char,
    num_elements: u8,
    kind: char,
) -> String {
    let mut cols = vec![' '; TYPE_COLUMN + 1];
    let mut put = |column: usize, text: &str| {
        for (offset, ch) in text.chars().enumerate() {
            cols[column + offset] = ch;
        }
    };
    put(0, id);
    put(ATOMIC_WEIGHT_COLUMN, atomic_weight);
    put(DENSITY_COLUMN, density);
    put(PHASE_COLUMN, &phase.to_string());
    put(ELEMENT_COUNT_COLUMN, &num_elements.to_string());
    put(TYPE_COLUMN, &kind.to_string());
    cols.into_iter().collect()
}

/// Trailer line with the value starting at column 25.
#[allow(dead_code)]
pub fn trailer_line(label: &str, value: &str) -> String {
    format!("{label:<25}{value:>10}")
}

/// A complete single-element block (sodium).
#[allow(dead_code)]
pub fn sodium_block() -> Vec<String> {
    vec![
        header_line("11", "22.98977", "9.7100E-01", 'S', 1, 'E'),
        "Na    Sodium".to_string(),
        "  Z   Fraction by weight".to_string(),
        " 11   1.000000".to_string(),
        trailer_line("Melting point (C):", "97.79"),
        trailer_line("Boiling point (C):", "882.94"),
    ]
}
