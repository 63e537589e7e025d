//! Progressive reveal and width tapering.
//!
//! A canvas stroke has one width, so a tapered line is approximated by cutting the revealed
//! part into `steps` short round-capped strokes whose widths follow a parabola: thinnest at
//! the middle of the full line, widest at both ends.

use crate::{
    config::{LineWidths, RendererConfig},
    foundation::core::Point,
    foundation::math::{clamp01, lerp_point},
    geometry::lines::LineSpec,
    paint::color::{Rgb, parse_color},
};

/// One straight, round-capped stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokeSegment {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Rgb,
    pub alpha: f64,
}

/// How much of a line is visible this frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LineReveal {
    /// Distance between the endpoints.
    pub length: f64,
    /// Length already shown at zero progress.
    pub min_visible: f64,
    /// Length shown at the current progress.
    pub visible: f64,
    /// Visible fraction of the line, in `[0, 1]`.
    pub t_end: f64,
}

/// Reveal state of `line`, or `None` for coincident (or non-finite) endpoints.
///
/// Without an override the line starts `emerge_inset` short of the start orb's edge, so it
/// appears to come out of the orb rather than its center.
pub fn line_reveal(line: &LineSpec, base_progress: f64, emerge_inset: f64) -> Option<LineReveal> {
    let length = line.a.center.distance(line.b.center);
    if !(length > 0.0 && length.is_finite()) {
        return None;
    }

    let min_visible = line
        .min_visible_override
        .unwrap_or_else(|| length.min((line.a.radius - emerge_inset).max(0.0)));
    let progress = line.progress_override.unwrap_or(base_progress);
    let visible = min_visible + (length - min_visible) * progress;

    Some(LineReveal {
        length,
        min_visible,
        visible,
        t_end: clamp01(visible / length),
    })
}

/// Stroke width at parameter `mid` along the full line.
pub fn taper_width(mid: f64, widths: LineWidths) -> f64 {
    let factor = (2.0 * mid - 1.0).powi(2);
    widths.min + (widths.max - widths.min) * factor
}

/// Paint color and alpha for `line`; unparseable colors become [`Rgb::NEAR_BLACK`].
pub fn resolve_style(line: &LineSpec) -> (Rgb, f64) {
    let text = line
        .color_override
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(&line.a.color);
    let color = parse_color(text).unwrap_or(Rgb::NEAR_BLACK);
    let alpha = line.alpha_override.unwrap_or(line.a.alpha);
    (color, alpha)
}

/// Cut the revealed part of `line` into tapered strokes.
pub fn taper_line(line: &LineSpec, base_progress: f64, cfg: &RendererConfig) -> TaperedLine {
    let Some(reveal) = line_reveal(line, base_progress, cfg.emerge_inset) else {
        return TaperedLine {
            reveal: None,
            segments: Vec::new(),
        };
    };

    let (color, alpha) = resolve_style(line);
    let (a, b) = (line.a.center, line.b.center);
    let steps = f64::from(cfg.steps);
    let t_end = reveal.t_end;

    let mut segments = Vec::with_capacity(cfg.steps as usize);
    for i in 0..cfg.steps {
        let t0 = (f64::from(i) / steps) * t_end;
        let t1 = (f64::from(i + 1) / steps) * t_end;
        if t0 >= t_end {
            break;
        }

        let mid = (t0 + t1) / 2.0;
        segments.push(StrokeSegment {
            from: lerp_point(a, b, t0),
            to: lerp_point(a, b, t1),
            width: taper_width(mid, line.widths),
            color,
            alpha,
        });
    }

    TaperedLine {
        reveal: Some(reveal),
        segments,
    }
}

/// Strokes for one line, in draw order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TaperedLine {
    pub reveal: Option<LineReveal>,
    pub segments: Vec<StrokeSegment>,
}

/// Strokes for every line of a frame, in draw order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct StrokePlan {
    pub lines: Vec<TaperedLine>,
}

impl StrokePlan {
    pub fn build(lines: &[LineSpec], base_progress: f64, cfg: &RendererConfig) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| taper_line(line, base_progress, cfg))
                .collect(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(|l| l.segments.len()).sum()
    }

    pub fn segments(&self) -> impl Iterator<Item = &StrokeSegment> {
        self.lines.iter().flat_map(|l| l.segments.iter())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/taper.rs"]
mod tests;
