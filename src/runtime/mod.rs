//! Entry points: the renderer context, host events and the frame loop.

/// Frame scheduling capability and loop state.
pub mod frame_loop;
/// The orb-line renderer context.
pub mod renderer;
