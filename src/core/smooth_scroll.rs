use super::constants::{SMOOTH_SCROLL_DURATION_SEC, TOUCH_MULTIPLIER, WHEEL_MULTIPLIER};
use super::easing::Easing;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub duration: f64,
    pub easing: Easing,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    pub enabled: bool,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration: SMOOTH_SCROLL_DURATION_SEC,
            easing: Easing::ExpoOut,
            wheel_multiplier: WHEEL_MULTIPLIER,
            touch_multiplier: TOUCH_MULTIPLIER,
            enabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    /// Set on the first frame after the tween is requested.
    started_at: Option<f64>,
}

/// Frame-driven scroll position emulation. Input events move the target;
/// `advance` is called once per animation frame and eases toward it.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    current: f64,
    target: f64,
    limit: f64,
    tween: Option<Tween>,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig, limit: f64) -> Self {
        Self {
            config,
            current: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
            tween: None,
        }
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Maximum scroll offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.clamp(self.target);
        if let Some(t) = &mut self.tween {
            t.to = self.target;
        }
    }

    #[inline]
    fn clamp(&self, v: f64) -> f64 {
        v.clamp(0.0, self.limit)
    }

    fn retarget(&mut self, target: f64, duration: f64) {
        self.target = self.clamp(target);
        if (self.target - self.current).abs() < f64::EPSILON {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.current,
            to: self.target,
            duration: duration.max(0.0),
            started_at: None,
        });
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        let step = delta_y * self.config.wheel_multiplier;
        self.retarget(self.target + step, self.config.duration);
    }

    pub fn on_touch(&mut self, delta_y: f64) {
        let step = delta_y * self.config.touch_multiplier;
        self.retarget(self.target + step, self.config.duration);
    }

    pub fn scroll_to(&mut self, target: f64, duration: f64) {
        self.retarget(target, duration);
    }

    /// Adopt an offset that changed outside the emulation (keyboard, find,
    /// scrollbar drag). Cancels any running tween.
    pub fn sync(&mut self, offset: f64) {
        self.current = self.clamp(offset);
        self.target = self.current;
        self.tween = None;
    }

    pub fn stop(&mut self) {
        self.target = self.current;
        self.tween = None;
    }

    /// Advance to frame time `now_sec`. Returns the new offset while a tween
    /// is running, `None` when idle.
    pub fn advance(&mut self, now_sec: f64) -> Option<f64> {
        let tween = self.tween.as_mut()?;
        let started = *tween.started_at.get_or_insert(now_sec);
        let t = if tween.duration > 0.0 {
            (now_sec - started) / tween.duration
        } else {
            1.0
        };
        let (from, to) = (tween.from, tween.to);

        if t >= 1.0 {
            self.current = to;
            self.tween = None;
        } else {
            let eased = self.config.easing.apply(t);
            self.current = from + (to - from) * eased;
        }
        Some(self.current)
    }

    /// Share of the scrollable range travelled, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.limit <= 0.0 {
            0.0
        } else {
            (self.current / self.limit).clamp(0.0, 1.0)
        }
    }
}
