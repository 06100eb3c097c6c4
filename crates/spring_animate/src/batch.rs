use glam::Vec3;
use rayon::prelude::*;

use crate::spring::SpringAnimate;

/// Evaluate every spring against its own current and target value in parallel.
///
/// Position `i` of the result belongs to `springs[i]`.
pub fn evaluate_all(
    springs: &mut [SpringAnimate],
    currents: &[Vec3],
    targets: &[Vec3],
    dt: f32,
) -> Vec<Vec3> {
    assert_eq!(springs.len(), currents.len());
    assert_eq!(springs.len(), targets.len());
    springs
        .par_iter_mut()
        .zip(currents.par_iter())
        .zip(targets.par_iter())
        .map(|((spring, current), target)| spring.evaluate(*current, *target, dt))
        .collect()
}

pub fn reset_all(springs: &mut [SpringAnimate]) {
    springs.par_iter_mut().for_each(SpringAnimate::reset);
}
