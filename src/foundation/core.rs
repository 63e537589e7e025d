pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Backing-store dimensions of a raster surface, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const EMPTY: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Device-pixel size for a layout box: each side is `floor(logical * dpr)`.
    ///
    /// Negative or non-finite products collapse to zero.
    pub fn from_logical(size: Size, dpr: f64) -> Self {
        fn scale(v: f64, dpr: f64) -> u32 {
            let px = (v * dpr).floor();
            if px.is_finite() && px > 0.0 {
                px.min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        }

        Self {
            width: scale(size.width, dpr),
            height: scale(size.height, dpr),
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Normalize a host-reported device pixel ratio; anything unusable means `1.0`.
pub fn sanitize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
