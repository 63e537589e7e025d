//! Host layout access.
//!
//! The renderer never queries a document directly; it reads element boxes and style
//! properties through [`source::LayoutSource`] so the same geometry code runs against a
//! browser adapter, a scene file, or a test fixture.

/// The layout capability trait and an in-memory implementation.
pub mod source;
