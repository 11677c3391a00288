//! Cubic bézier easing for the indicator backdrop fade

/// A cubic bézier easing curve anchored at (0,0) and (1,1), evaluated by
/// bisecting on the curve parameter until the x error is within tolerance.
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// The fast-out-slow-in curve used for the backdrop fade: accelerates
/// quickly out of 0 and decelerates into 1.
pub const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier {
    x1: 0.4,
    y1: 0.0,
    x2: 0.2,
    y2: 1.0,
};

const TOLERANCE: f32 = 1e-4;

impl CubicBezier {
    fn axis(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    /// Map a linear fraction in [0,1] onto the curve. Input outside [0,1]
    /// is clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let x = fraction.clamp(0.0, 1.0);
        if x <= 0.0 || x >= 1.0 {
            return x;
        }
        let mut lo = 0.0_f32;
        let mut hi = 1.0_f32;
        let mut t = x;
        // x(t) is monotonic for control points inside the unit square
        for _ in 0..32 {
            t = (lo + hi) / 2.0;
            let sample = Self::axis(t, self.x1, self.x2);
            if (sample - x).abs() < TOLERANCE {
                break;
            }
            if sample < x {
                lo = t;
            } else {
                hi = t;
            }
        }
        Self::axis(t, self.y1, self.y2).clamp(0.0, 1.0)
    }
}
