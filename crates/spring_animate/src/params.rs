use std::f32::consts::PI;

use glam::Vec3;
use tracing::{trace, warn};

/// Physical constants of a spring-dampener pulling a point mass towards a target.
///
/// Nothing is validated. `mass` must be positive and the perceptual duration
/// passed to [SpringParams::from_perceptual] must be positive, otherwise every
/// step produces NaN or infinite components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        SpringParams {
            stiffness,
            damping,
            mass,
        }
    }

    /// Derive unit mass constants from a settle duration in seconds and a bounce amount.
    ///
    /// A bounce of 0 is critically damped, values towards 1 oscillate longer.
    /// Bounce is not clamped.
    pub fn from_perceptual(duration: f32, bounce: f32) -> Self {
        let stiffness = (2. * PI / duration).powi(2);
        let damping = (1. - bounce) * (4. * PI) / duration;
        if !stiffness.is_finite() || !damping.is_finite() {
            warn!(
                "Non-finite spring constants from duration = {}, bounce = {}: stiffness = {}, damping = {}",
                duration, bounce, stiffness, damping
            );
        } else {
            trace!(duration, bounce, stiffness, damping, "derived spring constants");
        }
        SpringParams::new(stiffness, damping, 1.)
    }

    /// Ratio of damping to critical damping, `1 - bounce` for perceptual springs.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2. * (self.stiffness * self.mass).sqrt())
    }

    /// Advance one semi-implicit Euler step and return `(position, velocity)`.
    ///
    /// Velocity is updated from the spring and damping forces first, then the
    /// position moves with the new velocity.
    #[inline]
    pub fn step(&self, current: Vec3, target: Vec3, velocity: Vec3, dt: f32) -> (Vec3, Vec3) {
        let force = -self.stiffness * (current - target);
        let damping_force = -self.damping * velocity;
        let acceleration = (force + damping_force) / self.mass;

        let velocity = velocity + acceleration * dt;
        (current + velocity * dt, velocity)
    }
}
