//! Anchor resolution, line sets and the reveal/taper algorithm.

/// Anchors resolved from the host layout.
pub mod anchor;
/// The fixed line set connecting the anchors.
pub mod lines;
/// Progressive reveal and width tapering of a line into strokes.
pub mod taper;
