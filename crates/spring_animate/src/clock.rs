use std::time::Instant;

/// Supplies the elapsed seconds since the previous frame.
pub trait TimeSource {
    fn delta_seconds(&mut self) -> f32;
}

/// Same delta every frame, for fixed timestep loops and deterministic replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep(pub f32);

impl TimeSource for FixedStep {
    fn delta_seconds(&mut self) -> f32 {
        self.0
    }
}

/// Wall clock delta between consecutive calls. The first call returns 0.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last: None }
    }
}

impl TimeSource for FrameClock {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last
            .map_or(0., |last| now.duration_since(last).as_secs_f32());
        self.last = Some(now);
        delta
    }
}
