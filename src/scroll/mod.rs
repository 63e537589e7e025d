//! Scroll-derived progress signals.

/// Scroll state snapshot and windowed progress values.
pub mod progress;
