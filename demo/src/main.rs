use glam::Vec3;
use spring_animate::{FixedStep, SpringAnimate, SpringConfig, TimeSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME_RATE: f32 = 60.;
const MAX_FRAMES: usize = 300;
const SETTLE_DISTANCE: f32 = 1e-3;

/// Run a spring from the origin to `target` and report how it got there.
fn animate(name: &str, config: SpringConfig, target: Vec3) {
    let mut spring = SpringAnimate::from_config(config);
    let mut clock = FixedStep(1. / FRAME_RATE);
    let mut position = Vec3::ZERO;
    let mut peak = 0f32;

    for frame in 1..=MAX_FRAMES {
        position = spring.evaluate_with(position, target, &mut clock);
        peak = peak.max(position.length());
        if frame % 6 == 0 {
            info!("{name} frame {frame}: position = {position:.3}");
        }
        if position.distance(target) < SETTLE_DISTANCE
            && spring.velocity().length() < SETTLE_DISTANCE
        {
            info!(
                "{name} settled after {frame} frames ({:.3}s), overshoot = {:.1}%",
                frame as f32 / FRAME_RATE,
                (peak / target.length() - 1.).max(0.) * 100.
            );
            return;
        }
    }
    info!("{name} did not settle within {MAX_FRAMES} frames, position = {position:.3}");
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let target = Vec3::new(1., 0.5, -0.5);
    for (name, config) in [
        ("smooth", SpringConfig::SMOOTH),
        ("snappy", SpringConfig::SNAPPY),
        ("bouncy", SpringConfig::BOUNCY),
    ] {
        if let Err(error) = config.validate() {
            tracing::error!("skipping {name}: {error}");
            continue;
        }
        animate(name, config, target);
    }

    let mut clock = spring_animate::FrameClock::new();
    clock.delta_seconds();
    info!("wall clock frame delta: {:.6}s", clock.delta_seconds());
}
