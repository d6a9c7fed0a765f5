//! Scale and arc-path math, kept free of any drawing surface.
//!
//! Angles are measured from twelve o'clock, growing clockwise, matching the
//! convention of the emitted SVG paths.

use std::f64::consts::PI;

pub const TAU: f64 = 2.0 * PI;

/// Angular gap between adjacent arcs, in radians.
pub const PAD_ANGLE: f64 = 0.01;

/// Linear scale mapping a domain interval onto a range interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (r1 - r0) * (value - d0) / (d1 - d0)
    }
}

/// Square-root scale: interpolates in sqrt space so that ring *area*, not
/// radius, tracks the normalized radial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        SqrtScale { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let (s0, s1) = (d0.max(0.0).sqrt(), d1.max(0.0).sqrt());
        if (s1 - s0).abs() < f64::EPSILON {
            return r0;
        }
        let t = (value.max(0.0).sqrt() - s0) / (s1 - s0);
        r0 + (r1 - r0) * t
    }
}

/// One arc's resolved geometry, in radians and pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Resolve a node's normalized extents through the current scales.
///
/// Angles clamp to one full turn; the outer radius backs off one pixel to
/// leave a visible separator between rings.
pub fn compute_arc(
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    scale_x: &LinearScale,
    scale_y: &SqrtScale,
) -> ArcShape {
    ArcShape {
        start_angle: scale_x.map(x0).clamp(0.0, TAU),
        end_angle: scale_x.map(x1).clamp(0.0, TAU),
        inner_radius: scale_y.map(y0).max(0.0),
        outer_radius: (scale_y.map(y1) - 1.0).max(0.0),
    }
}

impl ArcShape {
    /// SVG path for the annular sector, with the pad angle applied
    /// symmetrically (collapsing to zero width rather than inverting).
    pub fn path(&self) -> String {
        let span = (self.end_angle - self.start_angle).max(0.0);
        let half_pad = (PAD_ANGLE / 2.0).min(span / 2.0);
        let a0 = self.start_angle + half_pad;
        let a1 = self.end_angle - half_pad;
        let r0 = self.inner_radius.min(self.outer_radius);
        let r1 = self.outer_radius;

        let (x0, y0) = point(a0, r1);
        let (x1, y1) = point(a1, r1);
        let (x2, y2) = point(a1, r0);
        let (x3, y3) = point(a0, r0);
        let large = if a1 - a0 > PI { 1 } else { 0 };
        format!(
            "M{x0:.3},{y0:.3}A{r1:.3},{r1:.3} 0 {large} 1 {x1:.3},{y1:.3}L{x2:.3},{y2:.3}A{r0:.3},{r0:.3} 0 {large} 0 {x3:.3},{y3:.3}Z"
        )
    }
}

fn point(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Symmetric cubic easing, the shape used by the zoom and fade animations.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
