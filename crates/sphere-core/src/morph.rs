use glam::{Mat3, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

use crate::constants::JITTER_SCALE;

#[derive(Debug, Error)]
pub enum MorphError {
    #[error("morph target has {target} positions, base geometry has {base}")]
    LengthMismatch { base: usize, target: usize },
}

/// Jittered cloud target: every vertex is displaced by an independent random
/// factor per axis, drawn from `[-0.5, 0.5)`.
///
/// The x component wraps the scaled coordinate in `sin`, y and z stay
/// linear, so x lands in [-1, 1] while y and z scatter much wider.
pub fn randomness_target<R: Rng>(positions: &[Vec3], rng: &mut R) -> Vec<Vec3> {
    positions
        .iter()
        .map(|p| {
            let rx = rng.gen::<f32>() - 0.5;
            let ry = rng.gen::<f32>() - 0.5;
            let rz = rng.gen::<f32>() - 0.5;
            Vec3::new(
                (p.x * rx * JITTER_SCALE).sin(),
                p.y * ry * JITTER_SCALE,
                p.z * rz * JITTER_SCALE,
            )
        })
        .collect()
}

/// Helical twist target: stretch along x, then rotate each vertex about the
/// +X axis by an angle proportional to its own x coordinate (`PI * x / 2`).
/// Pure function of the base positions.
pub fn twist_target(positions: &[Vec3]) -> Vec<Vec3> {
    positions
        .iter()
        .map(|p| {
            let angle = std::f32::consts::PI * p.x * 0.5;
            Mat3::from_rotation_x(angle) * Vec3::new(2.0 * p.x, p.y, p.z)
        })
        .collect()
}

/// Morph targets attached to one geometry, index-aligned with its vertices.
#[derive(Default)]
pub struct MorphSet {
    targets: SmallVec<[Vec<Vec3>; 2]>,
}

impl MorphSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: Vec<Vec3>) {
        self.targets.push(target);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[inline]
    pub fn targets(&self) -> &[Vec<Vec3>] {
        &self.targets
    }

    /// Blend the base positions with every target weighted by its influence:
    /// `out[i] = base[i] + sum_j w_j * (target_j[i] - base[i])`.
    ///
    /// `out` is cleared and refilled so the caller can reuse one scratch
    /// buffer across frames. Weights beyond the target count are ignored; a
    /// missing weight counts as zero.
    pub fn blend_into(
        &self,
        base: &[Vec3],
        weights: &[f32],
        out: &mut Vec<Vec3>,
    ) -> Result<(), MorphError> {
        for target in &self.targets {
            if target.len() != base.len() {
                return Err(MorphError::LengthMismatch {
                    base: base.len(),
                    target: target.len(),
                });
            }
        }
        out.clear();
        out.extend_from_slice(base);
        for (target, &w) in self.targets.iter().zip(weights) {
            if w == 0.0 {
                continue;
            }
            for (o, (&t, &b)) in out.iter_mut().zip(target.iter().zip(base)) {
                *o += w * (t - b);
            }
        }
        Ok(())
    }
}
