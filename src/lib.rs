//! orbline draws tapering, scroll-revealed lines between a handful of "orb" elements.
//!
//! Every frame is recomputed from scratch against the host's live layout:
//!
//! 1. **Resolve**: [`LayoutSource`] boxes -> [`ResolvedLayout`] (anchors in surface space)
//! 2. **Progress**: [`ScrollState`] -> [`ScrollProgress`] (four clamped scroll windows)
//! 3. **Build**: anchors + progress -> [`LineSpec`]s (three base lines, one optional)
//! 4. **Taper**: each line -> round-capped [`StrokeSegment`]s of parabolic width
//! 5. **Paint**: resize the [`Surface`] if its device-pixel size changed, clear, stroke
//!
//! [`OrbLineRenderer`] owns the little state that survives a frame (loop flag, cached
//! surface size). Hosts wire `load`/`scroll`/`resize`/refresh ticks into
//! [`OrbLineRenderer::handle_event`], or call [`OrbLineRenderer::recompute`] and
//! [`OrbLineRenderer::start_loop`] directly.
//!
//! Drawing is best effort: a missing element, a surface that cannot be sized, or an
//! unparseable color skips the frame or falls back to a default instead of erroring.
#![forbid(unsafe_code)]

pub mod config;
pub mod foundation;
pub mod geometry;
pub mod layout;
pub mod paint;
pub mod render;
pub mod runtime;
pub mod scroll;

pub use config::{LineWidths, RendererConfig};
pub use foundation::core::{Affine, PixelSize, Point, Rect, Size, Vec2};
pub use foundation::error::{OrblineError, OrblineResult};
pub use geometry::anchor::{Anchor, AnchorSet, ResolvedLayout, resolve_layout};
pub use geometry::lines::{LineSpec, build_line_set};
pub use geometry::taper::{
    LineReveal, StrokePlan, StrokeSegment, TaperedLine, line_reveal, taper_line, taper_width,
};
pub use layout::source::{ElementBox, ElementId, LayoutSource, StaticLayout, StyleWrite};
pub use paint::color::{Rgb, blend, parse_color};
pub use render::cpu::CpuSurface;
pub use render::frame::FrameRGBA;
pub use render::recording::{DrawCommand, RecordingSurface};
pub use render::surface::{DrawContext, Surface};
pub use runtime::frame_loop::{FrameHandle, FrameScheduler, LoopState, ManualScheduler};
pub use runtime::renderer::{FramePlan, FrameReport, HostEvent, OrbLineRenderer, plan_frame};
pub use scroll::progress::{ScrollProgress, ScrollState, ScrollWindows};
