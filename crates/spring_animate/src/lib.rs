pub mod batch;
pub mod clock;
pub mod config;
pub mod error;
pub mod params;
pub mod spring;

pub use clock::{FixedStep, FrameClock, TimeSource};
pub use config::SpringConfig;
pub use error::ConfigError;
pub use params::SpringParams;
pub use spring::{BOUNCY_DURATION, SMOOTH_DURATION, SNAPPY_DURATION, SpringAnimate};
