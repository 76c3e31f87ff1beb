//! Orbit-style camera controls with damped motion.
//!
//! Pointer drags and wheel dollies move goal angles/distance; `update` eases
//! the live pose toward the goals each frame so the camera keeps gliding
//! briefly after the input stops.

use glam::Vec3;

use crate::constants::{
    ORBIT_DAMPING_TAU_SEC, ORBIT_DOLLY_SPEED, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
    ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SPEED,
};

#[derive(Clone, Debug)]
pub struct OrbitControls {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_goal: f32,
    pitch_goal: f32,
    distance_goal: f32,
}

impl OrbitControls {
    /// Controls pivoting around `target`, starting at the pose implied by
    /// `eye`.
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / offset.length().max(1e-6))
            .asin()
            .clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        Self {
            target,
            yaw,
            pitch,
            distance,
            yaw_goal: yaw,
            pitch_goal: pitch,
            distance_goal: distance,
        }
    }

    /// Apply a pointer drag, `dx`/`dy` normalized to the canvas size.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_goal -= dx * ORBIT_ROTATE_SPEED;
        self.pitch_goal =
            (self.pitch_goal + dy * ORBIT_ROTATE_SPEED).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Apply a wheel dolly; positive `delta` moves the camera away.
    pub fn dolly(&mut self, delta: f32) {
        let scale = (delta * ORBIT_DOLLY_SPEED).exp();
        self.distance_goal =
            (self.distance_goal * scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Advance damping by one step.
    pub fn update(&mut self, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec / ORBIT_DAMPING_TAU_SEC).exp();
        self.yaw += (self.yaw_goal - self.yaw) * alpha;
        self.pitch += (self.pitch_goal - self.pitch) * alpha;
        self.distance += (self.distance_goal - self.distance) * alpha;
    }

    /// Current camera eye position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let (sin_p, cos_p) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cos_p * sin_y, sin_p, cos_p * cos_y)
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }
}
