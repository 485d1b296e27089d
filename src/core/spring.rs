use super::constants::*;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Damped harmonic spring coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "unit_mass")]
    pub mass: f64,
}

fn unit_mass() -> f64 {
    1.0
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Tight follower for the cursor dot.
    pub const CURSOR: SpringConfig = SpringConfig::new(CURSOR_SPRING_STIFFNESS, CURSOR_SPRING_DAMPING);
    /// Slow, heavy follower for the background blob.
    pub const BLOB: SpringConfig = SpringConfig::new(BLOB_SPRING_STIFFNESS, BLOB_SPRING_DAMPING);
    /// Smoothing for the magnetic attraction offset.
    pub const MAGNETIC: SpringConfig =
        SpringConfig::new(MAGNETIC_SPRING_STIFFNESS, MAGNETIC_SPRING_DAMPING);

    /// Damping ratio; 1 is critical.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Splits a frame delta into stable sub-steps.
fn substeps(dt_sec: f64) -> (u32, f64) {
    let dt = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
    let n = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
    (n, dt / n as f64)
}

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Semi-implicit Euler; returns the new value.
    pub fn step(&mut self, dt_sec: f64) -> f64 {
        let (n, h) = substeps(dt_sec);
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        for _ in 0..n {
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest() {
            self.snap();
        }
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Jump to the target and stop.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

/// Two independent axes sharing one configuration.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: DVec2) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn set_target(&mut self, target: DVec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn target(&self) -> DVec2 {
        DVec2::new(self.x.target, self.y.target)
    }

    pub fn value(&self) -> DVec2 {
        DVec2::new(self.x.value, self.y.value)
    }

    pub fn step(&mut self, dt_sec: f64) -> DVec2 {
        DVec2::new(self.x.step(dt_sec), self.y.step(dt_sec))
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn snap(&mut self) {
        self.x.snap();
        self.y.snap();
    }
}
