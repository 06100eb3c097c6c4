use glam::Vec3;

use crate::{clock::TimeSource, config::SpringConfig, params::SpringParams};

pub const SMOOTH_DURATION: f32 = 0.3;
pub const SNAPPY_DURATION: f32 = 0.3;
pub const BOUNCY_DURATION: f32 = 0.5;

/// Animates a position towards a target with a spring-dampener.
///
/// One instance is kept per animated property and evaluated once per frame.
/// The only state carried between frames is the velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimate {
    params: SpringParams,
    velocity: Vec3,
}

impl SpringAnimate {
    /// Stores the constants as given, `mass` must be positive.
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        SpringAnimate::from_params(SpringParams::new(stiffness, damping, mass))
    }

    pub fn from_params(params: SpringParams) -> Self {
        SpringAnimate {
            params,
            velocity: Vec3::ZERO,
        }
    }

    pub fn from_config(config: SpringConfig) -> Self {
        SpringAnimate::from_params(config.params())
    }

    /// Spring settling in roughly `duration` seconds, see [SpringParams::from_perceptual].
    pub fn spring(duration: f32, bounce: f32) -> Self {
        SpringAnimate::from_params(SpringParams::from_perceptual(duration, bounce))
    }

    /// Critically damped, never overshoots. [SMOOTH_DURATION] is the usual duration.
    pub fn smooth(duration: f32) -> Self {
        SpringAnimate::spring(duration, 0.)
    }

    /// Slight overshoot. [SNAPPY_DURATION] is the usual duration.
    pub fn snappy(duration: f32) -> Self {
        SpringAnimate::spring(duration, 0.15)
    }

    /// Pronounced overshoot. [BOUNCY_DURATION] is the usual duration.
    pub fn bouncy(duration: f32) -> Self {
        SpringAnimate::spring(duration, 0.3)
    }

    /// Returns the position one step of `dt` seconds after `current`, pulled towards `target`.
    ///
    /// Updates the stored velocity. Neither input is retained.
    pub fn evaluate(&mut self, current: Vec3, target: Vec3, dt: f32) -> Vec3 {
        let (position, velocity) = self.params.step(current, target, self.velocity, dt);
        self.velocity = velocity;
        position
    }

    /// Same as [SpringAnimate::evaluate], reading a single delta from `time`.
    pub fn evaluate_with<T: TimeSource>(
        &mut self,
        current: Vec3,
        target: Vec3,
        time: &mut T,
    ) -> Vec3 {
        let dt = time.delta_seconds();
        self.evaluate(current, target, dt)
    }

    /// Drop any velocity, used when the animation jumps to a new start discontinuously.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn stiffness(&self) -> f32 {
        self.params.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.params.damping
    }

    pub fn mass(&self) -> f32 {
        self.params.mass
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }
}

impl Default for SpringAnimate {
    fn default() -> Self {
        SpringAnimate::smooth(SMOOTH_DURATION)
    }
}
