use crate::{
    foundation::core::{Affine, PixelSize, Rect, Size},
    foundation::error::OrblineResult,
    geometry::taper::StrokeSegment,
    render::surface::{DrawContext, Surface},
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetTransform(Affine),
    ClearRect(Rect),
    Stroke(StrokeSegment),
    Flush,
}

/// Surface that keeps every draw call instead of rasterizing.
///
/// Hosts with a native 2D canvas can replay [`RecordingSurface::take_commands`] each frame.
/// Commands accumulate until drained, so a running loop must take them every frame.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: PixelSize,
    logical: Size,
    context_available: bool,
    commands: Vec<DrawCommand>,
    resizes: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            size: PixelSize::EMPTY,
            logical: Size::ZERO,
            context_available: true,
            commands: Vec::new(),
            resizes: 0,
        }
    }

    /// A surface whose context is never available, like a canvas without 2D support.
    pub fn without_context() -> Self {
        Self {
            context_available: false,
            ..Self::new()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StrokeSegment> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke(s) => Some(s),
            _ => None,
        })
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes().count()
    }

    /// How many times the backing store was reallocated.
    pub fn resize_count(&self) -> usize {
        self.resizes
    }

    pub fn logical_size(&self) -> Size {
        self.logical
    }
}

impl DrawContext for RecordingSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn stroke_segment(&mut self, segment: &StrokeSegment) {
        self.commands.push(DrawCommand::Stroke(*segment));
    }

    fn flush(&mut self) {
        self.commands.push(DrawCommand::Flush);
    }
}

impl Surface for RecordingSurface {
    fn pixel_size(&self) -> PixelSize {
        self.size
    }

    fn resize(&mut self, size: PixelSize, logical: Size) -> OrblineResult<()> {
        self.size = size;
        self.logical = logical;
        self.resizes += 1;
        Ok(())
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        if self.context_available {
            Some(self as &mut dyn DrawContext)
        } else {
            None
        }
    }
}
