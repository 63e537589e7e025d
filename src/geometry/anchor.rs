use crate::{
    config::RendererConfig,
    foundation::core::{Point, Rect},
    layout::source::{ElementId, LayoutSource},
};

/// A circular reference point in surface-local coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub center: Point,
    pub radius: f64,
    /// Raw style text; parsed only when a line is painted.
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl Anchor {
    pub fn new(center: Point, radius: f64, color: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            color: color.into(),
            alpha: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnchorSet {
    pub primary: Anchor,
    pub secondary: Anchor,
    pub tertiary: Anchor,
    pub quaternary: Option<Anchor>,
}

/// Everything the renderer reads from layout for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLayout {
    /// Background container box in viewport coordinates.
    pub container: Rect,
    pub anchors: AnchorSet,
    /// Whether both quaternary elements exist and should receive the scale write.
    pub scale_targets_present: bool,
}

/// Resolve anchors for one frame.
///
/// Returns `None` when the background, the surface, or any mandatory orb is missing; the
/// frame is then skipped without error.
pub fn resolve_layout<L: LayoutSource + ?Sized>(
    layout: &L,
    cfg: &RendererConfig,
) -> Option<ResolvedLayout> {
    let Some(container) = layout.element_rect(ElementId::Background) else {
        tracing::debug!("background container missing; skipping frame");
        return None;
    };
    if layout.element_rect(ElementId::Surface).is_none() {
        tracing::debug!("surface element missing; skipping frame");
        return None;
    }

    let origin = container.origin();
    let mandatory = |id: ElementId| {
        let anchor = layout.anchor_geometry(
            id,
            origin,
            &cfg.line_color_property,
            &cfg.default_color,
        );
        if anchor.is_none() {
            tracing::debug!(element = ?id, "mandatory orb missing; skipping frame");
        }
        anchor
    };

    let primary = mandatory(ElementId::Primary)?;
    let secondary = mandatory(ElementId::Secondary)?;
    let tertiary = mandatory(ElementId::Tertiary)?;
    let quaternary = layout.anchor_geometry(
        ElementId::Quaternary,
        origin,
        &cfg.line_color_property,
        &cfg.default_quaternary_color,
    );

    let scale_targets_present = quaternary.is_some()
        && layout.element_rect(ElementId::QuaternaryFlat).is_some();

    Some(ResolvedLayout {
        container,
        anchors: AnchorSet {
            primary,
            secondary,
            tertiary,
            quaternary,
        },
        scale_targets_present,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/anchor.rs"]
mod tests;
