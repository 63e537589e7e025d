use crate::{
    config::RendererConfig,
    foundation::core::{Affine, PixelSize, Point, Rect, Size, sanitize_dpr},
    geometry::anchor::{ResolvedLayout, resolve_layout},
    geometry::lines::{LineSpec, build_line_set},
    geometry::taper::StrokePlan,
    layout::source::{ElementId, LayoutSource},
    render::surface::Surface,
    runtime::frame_loop::{FrameScheduler, LoopState},
    scroll::progress::ScrollProgress,
};

/// Host triggers routed into the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// Page finished loading: draw once and start the loop.
    Load,
    Scroll,
    Resize,
    /// A frame requested through the [`FrameScheduler`] has arrived.
    AnimationFrame,
}

/// Everything computed for one frame before anything is painted.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub layout: ResolvedLayout,
    pub dpr: f64,
    pub pixel_size: PixelSize,
    pub progress: ScrollProgress,
    pub lines: Vec<LineSpec>,
    pub strokes: StrokePlan,
}

impl FramePlan {
    /// Surface size in layout units.
    pub fn logical_size(&self) -> Size {
        self.layout.container.size()
    }
}

/// Build the frame without touching the surface or writing styles.
///
/// `None` means a required element is missing and the frame should be skipped.
pub fn plan_frame<L: LayoutSource + ?Sized>(
    layout: &L,
    cfg: &RendererConfig,
) -> Option<FramePlan> {
    let resolved = resolve_layout(layout, cfg)?;
    let dpr = sanitize_dpr(layout.device_pixel_ratio());
    let pixel_size = PixelSize::from_logical(resolved.container.size(), dpr);

    let progress = ScrollProgress::derive(layout.scroll_state(), &cfg.windows);
    let lines = build_line_set(&resolved.anchors, &progress, cfg);
    let strokes = StrokePlan::build(&lines, progress.base, cfg);

    Some(FramePlan {
        layout: resolved,
        dpr,
        pixel_size,
        progress,
        lines,
        strokes,
    })
}

/// Summary of a painted frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub pixel_size: PixelSize,
    /// Whether the surface was reallocated for this frame.
    pub resized: bool,
    pub lines: usize,
    pub strokes: usize,
    pub progress: ScrollProgress,
}

/// The orb-line renderer.
///
/// Owns the only state that outlives a frame: the loop flag and the last surface size it
/// applied. Construct one per page and route every host trigger through it.
#[derive(Clone, Debug, Default)]
pub struct OrbLineRenderer {
    config: RendererConfig,
    loop_state: LoopState,
    cached_size: Option<PixelSize>,
}

impl OrbLineRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            loop_state: LoopState::default(),
            cached_size: None,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.loop_state.is_running()
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    /// Surface size applied by the last frame that got that far.
    pub fn cached_size(&self) -> Option<PixelSize> {
        self.cached_size
    }

    /// Recompute geometry and redraw the surface from scratch.
    ///
    /// Best effort: returns `None` when the frame was skipped (missing elements, a surface
    /// that cannot be resized, or no drawing context).
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn recompute<L, S>(&mut self, layout: &mut L, surface: &mut S) -> Option<FrameReport>
    where
        L: LayoutSource + ?Sized,
        S: Surface + ?Sized,
    {
        let plan = plan_frame(&*layout, &self.config)?;
        let logical = plan.logical_size();

        let current = self.cached_size.unwrap_or_else(|| surface.pixel_size());
        let resized = current != plan.pixel_size;
        if resized && let Err(err) = surface.resize(plan.pixel_size, logical) {
            tracing::debug!(
                %err,
                size = ?plan.pixel_size,
                "surface resize failed; skipping frame"
            );
            return None;
        }
        self.cached_size = Some(plan.pixel_size);

        let Some(ctx) = surface.context() else {
            tracing::debug!("no drawing context; skipping frame");
            return None;
        };

        ctx.set_transform(Affine::scale(plan.dpr));
        ctx.clear_rect(Rect::from_origin_size(Point::ORIGIN, logical));

        if plan.layout.scale_targets_present {
            let value = plan.progress.quaternary_scale.to_string();
            for id in [ElementId::Quaternary, ElementId::QuaternaryFlat] {
                layout.set_style_property(id, &self.config.scale_property, &value);
            }
        }

        for segment in plan.strokes.segments() {
            ctx.stroke_segment(segment);
        }
        ctx.flush();

        let report = FrameReport {
            pixel_size: plan.pixel_size,
            resized,
            lines: plan.lines.len(),
            strokes: plan.strokes.segment_count(),
            progress: plan.progress,
        };
        tracing::trace!(lines = report.lines, strokes = report.strokes, "frame painted");
        Some(report)
    }

    /// Start the continuous loop. A second call while running is a no-op returning `false`.
    pub fn start_loop<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) -> bool {
        let started = self.loop_state.start(scheduler);
        if started {
            tracing::debug!("orb line loop started");
        }
        started
    }

    /// Deliver a requested frame: redraw, then ask for the next one while running.
    pub fn on_frame<L, S, F>(
        &mut self,
        layout: &mut L,
        surface: &mut S,
        scheduler: &mut F,
    ) -> Option<FrameReport>
    where
        L: LayoutSource + ?Sized,
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let report = self.recompute(layout, surface);
        if self.loop_state.is_running() {
            self.loop_state.reschedule(scheduler);
        }
        report
    }

    /// Route a host trigger to the matching entry point.
    pub fn handle_event<L, S, F>(
        &mut self,
        event: HostEvent,
        layout: &mut L,
        surface: &mut S,
        scheduler: &mut F,
    ) -> Option<FrameReport>
    where
        L: LayoutSource + ?Sized,
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        match event {
            HostEvent::Load => {
                let report = self.recompute(layout, surface);
                self.start_loop(scheduler);
                report
            }
            HostEvent::Scroll | HostEvent::Resize => self.recompute(layout, surface),
            HostEvent::AnimationFrame => self.on_frame(layout, surface, scheduler),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/renderer.rs"]
mod tests;
