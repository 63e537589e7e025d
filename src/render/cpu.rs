use crate::{
    foundation::core::{Affine, PixelSize, Rect, Size},
    foundation::error::{OrblineError, OrblineResult},
    geometry::taper::StrokeSegment,
    render::composite::over_in_place,
    render::frame::FrameRGBA,
    render::surface::{DrawContext, Surface},
};

/// Software raster surface backed by a vello_cpu pixmap.
///
/// Strokes are batched into a `RenderContext` and composited over the pixmap on
/// [`DrawContext::flush`] or before the next clear.
pub struct CpuSurface {
    width: u16,
    height: u16,
    logical: Size,
    pixmap: vello_cpu::Pixmap,
    pending: Option<vello_cpu::RenderContext>,
    transform: Affine,
}

impl Default for CpuSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuSurface {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            logical: Size::ZERO,
            pixmap: vello_cpu::Pixmap::new(0, 0),
            pending: None,
            transform: Affine::IDENTITY,
        }
    }

    pub fn logical_size(&self) -> Size {
        self.logical
    }

    /// Premultiplied pixels as of the last flush.
    pub fn readback(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn render_pending(&mut self) -> OrblineResult<()> {
        let Some(mut ctx) = self.pending.take() else {
            return Ok(());
        };
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut layer);
        over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            layer.data_as_u8_slice(),
        )
    }
}

impl Surface for CpuSurface {
    fn pixel_size(&self) -> PixelSize {
        PixelSize::new(u32::from(self.width), u32::from(self.height))
    }

    fn resize(&mut self, size: PixelSize, logical: Size) -> OrblineResult<()> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| OrblineError::render("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| OrblineError::render("surface height exceeds u16"))?;

        self.width = width;
        self.height = height;
        self.logical = logical;
        self.pixmap = vello_cpu::Pixmap::new(width, height);
        self.pending = None;
        Ok(())
    }

    fn context(&mut self) -> Option<&mut dyn DrawContext> {
        Some(self as &mut dyn DrawContext)
    }
}

impl DrawContext for CpuSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn clear_rect(&mut self, rect: Rect) {
        if let Err(err) = self.render_pending() {
            tracing::debug!(%err, "dropping pending strokes");
        }

        let device = self.transform.transform_rect_bbox(rect);
        let (w, h) = (usize::from(self.width), usize::from(self.height));
        let clamp_to = |v: f64, max: usize| -> usize {
            if v.is_nan() { 0 } else { v.clamp(0.0, max as f64) as usize }
        };
        let (x0, x1) = (clamp_to(device.x0.floor(), w), clamp_to(device.x1.ceil(), w));
        let (y0, y1) = (clamp_to(device.y0.floor(), h), clamp_to(device.y1.ceil(), h));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let data = self.pixmap.data_as_u8_slice_mut();
        for y in y0..y1 {
            let row = y * w * 4;
            data[row + x0 * 4..row + x1 * 4].fill(0);
        }
    }

    fn stroke_segment(&mut self, segment: &StrokeSegment) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (width, height) = (self.width, self.height);
        let ctx = self
            .pending
            .get_or_insert_with(|| vello_cpu::RenderContext::new(width, height));

        let alpha = (segment.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        let c = segment.color;
        ctx.set_transform(affine_to_cpu(self.transform));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, alpha));
        ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(segment.width).with_caps(vello_cpu::kurbo::Cap::Round),
        );

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to((segment.from.x, segment.from.y));
        path.line_to((segment.to.x, segment.to.y));
        ctx.stroke_path(&path);
    }

    fn flush(&mut self) {
        if let Err(err) = self.render_pending() {
            tracing::debug!(%err, "dropping pending strokes");
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
