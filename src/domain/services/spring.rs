//! Damped spring used to smooth indicator motion.
//!
//! Integrated with semi-implicit Euler in small fixed sub-steps so that a
//! long frame (tab switch, GC pause) cannot blow the simulation up.

use crate::config::SpringConfig;

/// Largest single integration step, in seconds
const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Frames longer than this are treated as this long
const MAX_FRAME: f64 = 0.064;
/// Settled once both distance (px) and speed (px/s) fall under these
const REST_DELTA: f64 = 0.1;
const REST_SPEED: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: Option<f64>,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            value: 0.0,
            velocity: 0.0,
            target: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Retarget the spring, keeping its current velocity.
    ///
    /// The very first target is snapped to: there is nothing on screen yet to
    /// animate from.
    pub fn set_target(&mut self, target: f64) {
        match self.target {
            None => self.snap_to(target),
            Some(_) => self.target = Some(target),
        }
    }

    /// Jump straight to `value` and stop
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.velocity = 0.0;
        self.target = Some(value);
    }

    pub fn is_settled(&self) -> bool {
        match self.target {
            None => true,
            Some(target) => {
                (target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
            }
        }
    }

    /// Advance by `dt` seconds. Returns `true` once the spring is at rest, in
    /// which case the value is pinned exactly on the target.
    pub fn step(&mut self, dt: f64) -> bool {
        let Some(target) = self.target else {
            return true;
        };

        let dt = dt.clamp(0.0, MAX_FRAME);
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
        let h = dt / substeps as f64;

        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;

        for _ in 0..substeps {
            let spring_force = -stiffness * (self.value - target);
            let damping_force = -damping * self.velocity;
            let acceleration = (spring_force + damping_force) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        self.settle_if_resting()
    }

    /// Pin the value onto the target if the spring is within rest thresholds
    pub fn settle_if_resting(&mut self) -> bool {
        if !self.is_settled() {
            return false;
        }
        if let Some(target) = self.target {
            self.value = target;
            self.velocity = 0.0;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 1..=max_frames {
            if spring.step(FRAME) {
                return frame;
            }
        }
        panic!("spring did not settle within {} frames", max_frames);
    }

    #[test]
    fn test_first_target_snaps() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(120.0);
        assert_eq!(spring.value(), 120.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_settles_on_new_target() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(0.0);
        spring.set_target(200.0);
        assert!(!spring.is_settled());

        let frames = run_until_settled(&mut spring, 600);
        assert!(frames > 1);
        assert_eq!(spring.value(), 200.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_moves_toward_target_each_early_frame() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(0.0);
        spring.set_target(100.0);

        let mut previous = spring.value();
        for _ in 0..5 {
            spring.step(FRAME);
            assert!(spring.value() > previous);
            previous = spring.value();
        }
    }

    #[test]
    fn test_retarget_mid_flight_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(0.0);
        spring.set_target(100.0);
        for _ in 0..3 {
            spring.step(FRAME);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(-50.0);
        assert_eq!(spring.velocity(), velocity);
        run_until_settled(&mut spring, 600);
        assert_eq!(spring.value(), -50.0);
    }

    #[test]
    fn test_long_frame_stays_finite() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(0.0);
        spring.set_target(500.0);
        spring.step(5.0);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 1_000.0);
    }

    #[test]
    fn test_tiny_retarget_lands_exactly() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(40.0);
        spring.set_target(40.05);

        assert!(spring.settle_if_resting());
        assert_eq!(spring.value(), 40.05);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_large_retarget_is_not_pinned() {
        let mut spring = Spring::new(SpringConfig::default());
        spring.set_target(40.0);
        spring.set_target(140.0);

        assert!(!spring.settle_if_resting());
        assert_eq!(spring.value(), 40.0);
    }

    #[test]
    fn test_without_target_is_idle() {
        let mut spring = Spring::new(SpringConfig::default());
        assert!(spring.step(FRAME));
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.target(), None);
    }
}
