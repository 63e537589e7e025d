//! Color parsing and blending for line styles.

/// `Rgb` triples, CSS-ish parsing, blending.
pub mod color;
