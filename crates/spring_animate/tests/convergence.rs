use glam::Vec3;
use spring_animate::{FixedStep, SpringAnimate, SpringParams};

const FRAMES: usize = 600;

fn trajectory(mut spring: SpringAnimate, target: Vec3, dt: f32) -> Vec<Vec3> {
    let mut position = Vec3::ZERO;
    (0..FRAMES)
        .map(|_| {
            position = spring.evaluate(position, target, dt);
            position
        })
        .collect()
}

#[test]
fn critically_damped_converges_without_overshoot() {
    for dt in [1. / 30., 1. / 60., 1. / 120., 0.001] {
        let xs: Vec<f32> = trajectory(SpringAnimate::smooth(0.3), Vec3::X, dt)
            .iter()
            .map(|p| p.x)
            .collect();

        for pair in xs.windows(2) {
            assert!(pair[1] >= pair[0], "moved backwards at dt = {dt}: {pair:?}");
        }
        assert!(xs.iter().all(|x| *x <= 1. + 1e-6), "overshot at dt = {dt}");
    }
    let settled = trajectory(SpringAnimate::smooth(0.3), Vec3::X, 1. / 60.);
    assert!((settled[FRAMES - 1].x - 1.).abs() < 1e-4);
}

#[test]
fn bouncy_spring_overshoots_then_settles() {
    let xs: Vec<f32> = trajectory(SpringAnimate::bouncy(0.5), Vec3::X, 1. / 120.)
        .iter()
        .map(|p| p.x)
        .collect();
    let peak = xs.iter().cloned().fold(f32::MIN, f32::max);
    assert!(peak > 1.01, "expected overshoot, peak = {peak}");
    assert!((xs[FRAMES - 1] - 1.).abs() < 1e-3);
}

#[test]
fn any_positive_bounce_overshoots() {
    for bounce in [0.1, 0.3, 0.6, 0.9] {
        let peak = trajectory(SpringAnimate::spring(0.4, bounce), Vec3::Y, 1. / 240.)
            .iter()
            .map(|p| p.y)
            .fold(f32::MIN, f32::max);
        assert!(peak > 1., "bounce = {bounce} did not overshoot, peak = {peak}");
    }
}

#[test]
fn follows_a_moving_target() {
    let mut spring = SpringAnimate::snappy(0.3);
    let mut clock = FixedStep(1. / 60.);
    let mut position = Vec3::ZERO;
    let mut target = Vec3::ZERO;
    for frame in 0..240 {
        if frame % 60 == 0 {
            target += Vec3::new(1., 0.5, -0.25);
        }
        position = spring.evaluate_with(position, target, &mut clock);
    }
    assert!(position.distance(target) < 1e-2);
}

#[test]
fn pure_step_replays_evaluate() {
    let params = SpringParams::from_perceptual(0.5, 0.3);
    let mut spring = SpringAnimate::from_params(params);

    let mut position = Vec3::ZERO;
    let mut velocity = Vec3::ZERO;
    let mut animated = Vec3::ZERO;
    for _ in 0..100 {
        (position, velocity) = params.step(position, Vec3::ONE, velocity, 1. / 60.);
        animated = spring.evaluate(animated, Vec3::ONE, 1. / 60.);
    }
    assert_eq!(position, animated);
    assert_eq!(velocity, spring.velocity());
}
