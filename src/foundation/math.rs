use crate::foundation::core::Point;

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
///
/// `NaN` maps to `0.0` so a degenerate ratio never leaks into geometry.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[inline]
/// Point at parameter `t` on the segment `a -> b` (unclamped).
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[inline]
/// Linear remap of `x` from the window `[start, start + span]` onto `[0, 1]`, clamped.
pub fn window01(x: f64, start: f64, span: f64) -> f64 {
    clamp01((x - start) / span)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
