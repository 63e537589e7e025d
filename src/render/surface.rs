use crate::{
    foundation::core::{Affine, PixelSize, Rect, Size},
    foundation::error::OrblineResult,
    geometry::taper::StrokeSegment,
};

/// 2D drawing calls the renderer issues once a surface is ready.
pub trait DrawContext {
    /// Replace the current transform (layout units -> device pixels).
    fn set_transform(&mut self, transform: Affine);

    /// Clear `rect` (in layout units) to transparent.
    fn clear_rect(&mut self, rect: Rect);

    /// Draw one straight, round-capped stroke.
    fn stroke_segment(&mut self, segment: &StrokeSegment);

    /// Called once after the last stroke of a frame.
    fn flush(&mut self) {}
}

/// A raster target whose backing store is sized in device pixels.
pub trait Surface {
    /// Current backing-store size.
    fn pixel_size(&self) -> PixelSize;

    /// Reallocate the backing store. `logical` is the matching size in layout units.
    fn resize(&mut self, size: PixelSize, logical: Size) -> OrblineResult<()>;

    /// Drawing context, or `None` when the host cannot provide one right now.
    fn context(&mut self) -> Option<&mut dyn DrawContext>;
}
