//! Scale-domain tweening for the zoom and fade animations.
//!
//! Transitions are explicit step functions rather than timers: the embedding
//! host samples them at whatever tick cadence it has, and a newly started
//! transition simply supersedes the visual target of any prior one. Nothing
//! here blocks or suspends.

use crate::render::geometry::ease_cubic_in_out;

/// Zoom transition length.
pub const ZOOM_MS: u64 = 300;

/// Highlight-reset fade length.
pub const FADE_MS: u64 = 500;

/// The three scale intervals a zoom animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub y_range: (f64, f64),
}

/// An in-flight zoom: interpolates the scale state captured at trigger time
/// toward the target over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTween {
    pub duration_ms: u64,
    from: ScaleState,
    to: ScaleState,
}

impl ScaleTween {
    pub fn new(from: ScaleState, to: ScaleState, duration_ms: u64) -> Self {
        ScaleTween {
            duration_ms,
            from,
            to,
        }
    }

    /// Eased state after `elapsed_ms`; clamps at the target past the end.
    pub fn sample(&self, elapsed_ms: u64) -> ScaleState {
        let t = ease_cubic_in_out(self.progress(elapsed_ms));
        ScaleState {
            x_domain: lerp_pair(self.from.x_domain, self.to.x_domain, t),
            y_domain: lerp_pair(self.from.y_domain, self.to.y_domain, t),
            y_range: lerp_pair(self.from.y_range, self.to.y_range, t),
        }
    }

    pub fn finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn target(&self) -> ScaleState {
        self.to
    }

    fn progress(&self, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }
}

/// An in-flight opacity fade: every arc eases from its captured opacity
/// back to fully opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityFade {
    pub duration_ms: u64,
    from: Vec<f64>,
}

impl OpacityFade {
    pub fn new(from: Vec<f64>, duration_ms: u64) -> Self {
        OpacityFade { duration_ms, from }
    }

    pub fn sample(&self, elapsed_ms: u64) -> Vec<f64> {
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            ease_cubic_in_out((elapsed_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0))
        };
        self.from.iter().map(|o| o + (1.0 - o) * t).collect()
    }

    pub fn finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

fn lerp_pair(from: (f64, f64), to: (f64, f64), t: f64) -> (f64, f64) {
    (
        from.0 + (to.0 - from.0) * t,
        from.1 + (to.1 - from.1) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(x: (f64, f64), y: (f64, f64), r: (f64, f64)) -> ScaleState {
        ScaleState {
            x_domain: x,
            y_domain: y,
            y_range: r,
        }
    }

    #[test]
    fn tween_starts_at_from_and_ends_at_to() {
        let from = state((0.0, 1.0), (0.0, 1.0), (0.0, 480.0));
        let to = state((0.2, 0.4), (0.3, 1.0), (20.0, 480.0));
        let tween = ScaleTween::new(from, to, ZOOM_MS);
        assert_eq!(tween.sample(0), from);
        assert_eq!(tween.sample(ZOOM_MS), to);
        assert_eq!(tween.sample(ZOOM_MS * 10), to);
    }

    #[test]
    fn tween_midpoint_is_between_endpoints() {
        let from = state((0.0, 1.0), (0.0, 1.0), (0.0, 480.0));
        let to = state((0.5, 1.0), (0.5, 1.0), (20.0, 480.0));
        let mid = ScaleTween::new(from, to, ZOOM_MS).sample(ZOOM_MS / 2);
        assert!(mid.x_domain.0 > 0.0 && mid.x_domain.0 < 0.5);
        assert!(mid.y_range.0 > 0.0 && mid.y_range.0 < 20.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let from = state((0.0, 1.0), (0.0, 1.0), (0.0, 480.0));
        let to = state((0.2, 0.4), (0.3, 1.0), (20.0, 480.0));
        let tween = ScaleTween::new(from, to, 0);
        assert_eq!(tween.sample(0), to);
        assert!(tween.finished(0));
    }

    #[test]
    fn fade_restores_full_opacity() {
        let fade = OpacityFade::new(vec![0.3, 1.0, 0.3], FADE_MS);
        assert_eq!(fade.sample(0), vec![0.3, 1.0, 0.3]);
        assert_eq!(fade.sample(FADE_MS), vec![1.0, 1.0, 1.0]);
        let mid = fade.sample(FADE_MS / 2);
        assert!(mid[0] > 0.3 && mid[0] < 1.0);
        assert_eq!(mid[1], 1.0);
    }
}
