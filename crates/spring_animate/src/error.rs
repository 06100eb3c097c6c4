use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("spring duration must be finite and positive, got {0}")]
    NonPositiveDuration(f32),
    #[error("spring bounce must be finite and within [0, 1), got {0}")]
    BounceOutOfRange(f32),
}
