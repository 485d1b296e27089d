// Easing curves on normalized time. Inputs are clamped to [0, 1].

#[inline]
fn unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Exponential ease-out used by the smooth scroller.
#[inline]
pub fn expo_out(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * unit(t))).min(1.0)
}

#[inline]
pub fn power4_out(t: f64) -> f64 {
    1.0 - (1.0 - unit(t)).powi(4)
}

#[inline]
pub fn sine_in_out(t: f64) -> f64 {
    -((std::f64::consts::PI * unit(t)).cos() - 1.0) / 2.0
}

#[inline]
pub fn linear(t: f64) -> f64 {
    unit(t)
}

/// CSS-style cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Hero letter entrance curve.
    pub const HERO: CubicBezier = CubicBezier::new(0.43, 0.13, 0.23, 0.96);

    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn sample(a1: f64, a2: f64, s: f64) -> f64 {
        // B(s) = 3(1-s)^2 s a1 + 3(1-s) s^2 a2 + s^3
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    #[inline]
    fn slope(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Curve parameter whose x equals `x`.
    fn solve_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, s) - x;
            if err.abs() < 1e-7 {
                return s;
            }
            let d = Self::slope(self.x1, self.x2, s);
            if d.abs() < 1e-6 {
                break;
            }
            s = (s - err / d).clamp(0.0, 1.0);
        }
        // Newton stalled; bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..64 {
            let v = Self::sample(self.x1, self.x2, s);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    pub fn ease(&self, t: f64) -> f64 {
        let t = unit(t);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        Self::sample(self.y1, self.y2, self.solve_x(t))
    }

    /// `transition-timing-function` value for the same curve.
    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Named curve selectable from settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    ExpoOut,
    Power4Out,
    SineInOut,
    Linear,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::ExpoOut => expo_out(t),
            Easing::Power4Out => power4_out(t),
            Easing::SineInOut => sine_in_out(t),
            Easing::Linear => linear(t),
        }
    }
}
