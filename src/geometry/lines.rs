use crate::{
    config::{LineWidths, RendererConfig},
    geometry::anchor::{Anchor, AnchorSet},
    paint::color::parse_color,
    scroll::progress::ScrollProgress,
};

/// A line between two anchors, drawn from `a` towards `b`.
///
/// Unset overrides inherit from anchor `a` (color, alpha), the shared base progress, or the
/// emerge-from-orb default for the initial reveal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineSpec {
    pub a: Anchor,
    pub b: Anchor,
    pub widths: LineWidths,
    pub color_override: Option<String>,
    pub alpha_override: Option<f64>,
    pub progress_override: Option<f64>,
    pub min_visible_override: Option<f64>,
}

impl LineSpec {
    pub fn new(a: Anchor, b: Anchor, widths: LineWidths) -> Self {
        Self {
            a,
            b,
            widths,
            color_override: None,
            alpha_override: None,
            progress_override: None,
            min_visible_override: None,
        }
    }
}

/// The frame's line set: one line per pair of mandatory anchors, plus the quaternary line
/// when that anchor is present.
pub fn build_line_set(
    anchors: &AnchorSet,
    progress: &ScrollProgress,
    cfg: &RendererConfig,
) -> Vec<LineSpec> {
    let mut lines = vec![
        LineSpec::new(
            anchors.primary.clone(),
            anchors.secondary.clone(),
            cfg.primary_secondary,
        ),
        LineSpec::new(
            anchors.secondary.clone(),
            anchors.tertiary.clone(),
            cfg.secondary_tertiary,
        ),
        LineSpec::new(
            anchors.primary.clone(),
            anchors.tertiary.clone(),
            cfg.primary_tertiary,
        ),
    ];

    if let Some(q) = &anchors.quaternary {
        lines.push(quaternary_line(q, &anchors.primary, progress, cfg));
    }
    lines
}

fn quaternary_line(
    quaternary: &Anchor,
    primary: &Anchor,
    progress: &ScrollProgress,
    cfg: &RendererConfig,
) -> LineSpec {
    let color = match (parse_color(&primary.color), parse_color(&quaternary.color)) {
        (Some(start), Some(end)) => start.blend_half(end).to_css(),
        _ => primary.color.clone(),
    };

    LineSpec {
        color_override: Some(color),
        alpha_override: Some(1.0),
        progress_override: Some(progress.quaternary_line),
        min_visible_override: Some(0.0),
        ..LineSpec::new(quaternary.clone(), primary.clone(), cfg.quaternary)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/lines.rs"]
mod tests;
