use crate::foundation::math::{clamp01, window01};

/// Host scroll snapshot, in layout units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    /// Scrollable distance, never below `1.0` so fractions stay finite on short pages.
    pub fn max_scroll(self) -> f64 {
        (self.document_height - self.viewport_height).max(1.0)
    }
}

/// Fractions of `max_scroll` that shape each progress window.
///
/// The literals are tuned by eye; keep them as-is unless the visual changes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollWindows {
    /// Base lines are fully revealed at this fraction of the page.
    pub base_span: f64,
    /// The quaternary orb reaches full scale at this fraction.
    pub scale_span: f64,
    /// The quaternary line starts revealing at this fraction...
    pub line_start: f64,
    /// ...and finishes `line_span` later.
    pub line_span: f64,
}

impl Default for ScrollWindows {
    fn default() -> Self {
        Self {
            base_span: 0.5,
            scale_span: 0.4,
            line_start: 0.15,
            line_span: 0.25,
        }
    }
}

/// Every progress value derived from one scroll snapshot. All fields are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollProgress {
    /// Reveal progress shared by the base lines.
    pub base: f64,
    /// Raw full-page fraction.
    pub quaternary_raw: f64,
    /// Scale written to the quaternary orb elements.
    pub quaternary_scale: f64,
    /// Reveal progress of the quaternary line.
    pub quaternary_line: f64,
}

impl ScrollProgress {
    pub fn derive(state: ScrollState, windows: &ScrollWindows) -> Self {
        let max_scroll = state.max_scroll();
        let y = state.scroll_y;

        let quaternary_raw = clamp01(y / max_scroll);
        Self {
            base: clamp01(y / (max_scroll * windows.base_span)),
            quaternary_raw,
            quaternary_scale: clamp01(y / (max_scroll * windows.scale_span)),
            quaternary_line: window01(quaternary_raw, windows.line_start, windows.line_span),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
