//! Raster surfaces the renderer paints into.

/// Premultiplied pixel compositing helpers.
pub mod composite;
/// vello_cpu-backed surface with pixel readback.
pub mod cpu;
/// Read-back pixel buffers and PNG export.
pub mod frame;
/// Surface that records draw commands for replay or inspection.
pub mod recording;
/// Surface and draw-context traits.
pub mod surface;
