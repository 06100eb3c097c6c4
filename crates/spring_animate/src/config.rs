use crate::{error::ConfigError, params::SpringParams};

/// Perceptual spring settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    /// Approximate seconds for the motion to settle
    pub duration: f32,
    /// 0 is critically damped, towards 1 bounces longer
    pub bounce: f32,
}

impl SpringConfig {
    pub const SMOOTH: SpringConfig = SpringConfig::new(0.3, 0.);
    pub const SNAPPY: SpringConfig = SpringConfig::new(0.3, 0.15);
    pub const BOUNCY: SpringConfig = SpringConfig::new(0.5, 0.3);

    pub const fn new(duration: f32, bounce: f32) -> Self {
        SpringConfig { duration, bounce }
    }

    pub fn params(&self) -> SpringParams {
        SpringParams::from_perceptual(self.duration, self.bounce)
    }

    /// Checks the ranges the presets live in. Building a spring never calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duration.is_finite() || self.duration <= 0. {
            return Err(ConfigError::NonPositiveDuration(self.duration));
        }
        if !(0.0..1.0).contains(&self.bounce) {
            return Err(ConfigError::BounceOutOfRange(self.bounce));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig::SMOOTH
    }
}
