use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{OrblineError, OrblineResult},
    scroll::progress::ScrollWindows,
};

/// Stroke width range of one line: thinnest at the middle, widest at both ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineWidths {
    pub min: f64,
    pub max: f64,
}

impl LineWidths {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for LineWidths {
    fn default() -> Self {
        Self::new(6.0, 10.0)
    }
}

/// Tunables for the renderer. `Default` is the shipped look.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Number of strokes a fully revealed line is cut into.
    pub steps: u32,
    /// How far inside the start orb's edge a line begins its reveal.
    pub emerge_inset: f64,
    pub primary_secondary: LineWidths,
    pub secondary_tertiary: LineWidths,
    pub primary_tertiary: LineWidths,
    pub quaternary: LineWidths,
    /// Line color for the three mandatory orbs when the style property is unset.
    pub default_color: String,
    /// Line color for the quaternary orb when the style property is unset.
    pub default_quaternary_color: String,
    /// Custom style property read from each orb element.
    pub line_color_property: String,
    /// Custom style property written onto the quaternary orb elements.
    pub scale_property: String,
    pub windows: ScrollWindows,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            steps: 72,
            emerge_inset: 8.0,
            primary_secondary: LineWidths::new(6.0, 10.0),
            secondary_tertiary: LineWidths::new(10.0, 50.0),
            primary_tertiary: LineWidths::new(8.0, 14.0),
            quaternary: LineWidths::new(9.0, 16.0),
            default_color: "#0f0f0f".to_string(),
            default_quaternary_color: "#84c318".to_string(),
            line_color_property: "--line-color".to_string(),
            scale_property: "--orb-scale".to_string(),
            windows: ScrollWindows::default(),
        }
    }
}

impl RendererConfig {
    pub fn validate(&self) -> OrblineResult<()> {
        if self.steps == 0 {
            return Err(OrblineError::validation("steps must be > 0"));
        }
        if !self.emerge_inset.is_finite() {
            return Err(OrblineError::validation("emerge_inset must be finite"));
        }

        for (name, w) in [
            ("primary_secondary", self.primary_secondary),
            ("secondary_tertiary", self.secondary_tertiary),
            ("primary_tertiary", self.primary_tertiary),
            ("quaternary", self.quaternary),
        ] {
            if !(w.min.is_finite() && w.max.is_finite()) || w.min < 0.0 || w.max < 0.0 {
                return Err(OrblineError::validation(format!(
                    "{name} widths must be finite and >= 0"
                )));
            }
        }

        let win = &self.windows;
        for (name, v) in [
            ("windows.base_span", win.base_span),
            ("windows.scale_span", win.scale_span),
            ("windows.line_span", win.line_span),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(OrblineError::validation(format!("{name} must be > 0")));
            }
        }
        if !win.line_start.is_finite() {
            return Err(OrblineError::validation("windows.line_start must be finite"));
        }

        if self.line_color_property.is_empty() || self.scale_property.is_empty() {
            return Err(OrblineError::validation(
                "style property names must not be empty",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(s: &str) -> OrblineResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> OrblineResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
