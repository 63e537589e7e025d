use std::collections::BTreeMap;

use crate::{
    foundation::core::{Point, Rect},
    foundation::error::{OrblineError, OrblineResult},
    geometry::anchor::Anchor,
    scroll::progress::ScrollState,
};

/// The named elements the renderer reads or writes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    /// Container whose box defines the surface's coordinate space and size.
    Background,
    /// The raster surface element.
    Surface,
    Primary,
    Secondary,
    Tertiary,
    /// Optional fourth orb.
    Quaternary,
    /// Alternate flat rendition of the fourth orb. Never contributes geometry.
    QuaternaryFlat,
}

/// Read access to the host's live layout plus the one style write the renderer performs.
///
/// Every method is queried fresh on each redraw; implementations should not cache.
pub trait LayoutSource {
    /// Bounding box of `id` in viewport coordinates, or `None` when the element is absent.
    fn element_rect(&self, id: ElementId) -> Option<Rect>;

    /// Computed value of a custom style property on `id`, untrimmed.
    fn style_property(&self, id: ElementId, key: &str) -> Option<String>;

    /// Write a custom style property on `id`. Absent elements ignore the write.
    fn set_style_property(&mut self, id: ElementId, key: &str, value: &str);

    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    fn scroll_state(&self) -> ScrollState;

    /// Circle inscribed in the box of `id`, expressed relative to `origin`.
    ///
    /// The line color comes from `color_property` (trimmed); unset or blank values fall back
    /// to `default_color`.
    fn anchor_geometry(
        &self,
        id: ElementId,
        origin: Point,
        color_property: &str,
        default_color: &str,
    ) -> Option<Anchor> {
        let rect = self.element_rect(id)?;
        let color = self
            .style_property(id, color_property)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default_color.to_string());

        Some(Anchor {
            center: Point::new(
                rect.x0 - origin.x + rect.width() / 2.0,
                rect.y0 - origin.y + rect.height() / 2.0,
            ),
            radius: rect.width().min(rect.height()) / 2.0,
            color,
            alpha: 1.0,
        })
    }
}

/// One element of a [`StaticLayout`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    pub rect: Rect,
    #[serde(default)]
    pub style: BTreeMap<String, String>,
}

/// Frozen layout snapshot, loadable from JSON.
///
/// Style writes land in the element's `style` map (like an inline style) and are also
/// appended to [`StaticLayout::writes`] so callers can observe them. The log is never
/// trimmed; long-running loops should drain it with [`StaticLayout::take_writes`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StaticLayout {
    pub device_pixel_ratio: f64,
    pub scroll: ScrollState,
    pub elements: BTreeMap<ElementId, ElementBox>,
    #[serde(skip)]
    pub writes: Vec<StyleWrite>,
}

/// A style write recorded by [`StaticLayout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleWrite {
    pub element: ElementId,
    pub key: String,
    pub value: String,
}

impl Default for StaticLayout {
    fn default() -> Self {
        Self {
            device_pixel_ratio: 1.0,
            scroll: ScrollState::new(0.0, 0.0, 0.0),
            elements: BTreeMap::new(),
            writes: Vec::new(),
        }
    }
}

impl StaticLayout {
    pub fn new(scroll: ScrollState) -> Self {
        Self {
            scroll,
            ..Self::default()
        }
    }

    pub fn with_dpr(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    pub fn with_element(mut self, id: ElementId, rect: Rect) -> Self {
        self.elements.insert(
            id,
            ElementBox {
                rect,
                style: BTreeMap::new(),
            },
        );
        self
    }

    /// Set a style value on an element added earlier; unknown elements are ignored.
    pub fn with_style(mut self, id: ElementId, key: &str, value: &str) -> Self {
        if let Some(el) = self.elements.get_mut(&id) {
            el.style.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Drain the recorded style writes.
    pub fn take_writes(&mut self) -> Vec<StyleWrite> {
        std::mem::take(&mut self.writes)
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll.scroll_y = scroll_y;
    }

    pub fn from_json_str(s: &str) -> OrblineResult<Self> {
        let layout: Self = serde_json::from_str(s)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> OrblineResult<()> {
        for (id, el) in &self.elements {
            let r = el.rect;
            if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
                return Err(OrblineError::validation(format!(
                    "element {id:?} has a non-finite rect"
                )));
            }
        }
        let s = self.scroll;
        if ![s.scroll_y, s.document_height, s.viewport_height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(OrblineError::validation("scroll state must be finite"));
        }
        Ok(())
    }
}

impl LayoutSource for StaticLayout {
    fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(&id).map(|el| el.rect)
    }

    fn style_property(&self, id: ElementId, key: &str) -> Option<String> {
        self.elements.get(&id)?.style.get(key).cloned()
    }

    fn set_style_property(&mut self, id: ElementId, key: &str, value: &str) {
        let Some(el) = self.elements.get_mut(&id) else {
            return;
        };
        el.style.insert(key.to_string(), value.to_string());
        self.writes.push(StyleWrite {
            element: id,
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn scroll_state(&self) -> ScrollState {
        self.scroll
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/source.rs"]
mod tests;
