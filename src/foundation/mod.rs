//! Shared primitives: geometry re-exports, pixel sizes, scalar helpers and errors.

/// Geometry re-exports and pixel-size types.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
/// Scalar clamping and interpolation helpers.
pub mod math;
