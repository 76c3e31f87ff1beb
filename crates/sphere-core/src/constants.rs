use glam::Vec3;

// Shared scene tuning constants used by the web frontend and host tests.

// Point cloud
pub const SPHERE_RADIUS: f32 = 0.8;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;
pub const POINT_SIZE: f32 = 0.01; // world-space point radius
pub const POINT_COLOR: [f32; 3] = [1.0, 0.2, 0.4]; // #ff3366

// Morph jitter
pub const JITTER_SCALE: f32 = 100.0; // per-axis multiplier on the random factor

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [1.0, 1.0, 1.0];

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0; // renderer never exceeds 2x backing

// Scroll tweening
pub const DEFAULT_SCRUB_SECONDS: f32 = 3.0; // shared catch-up window
pub const INTRO_DROP_HEIGHT: f32 = 1.0; // mesh drops in from y = 1
pub const INTRO_DURATION_SECONDS: f32 = 1.0;

// Orbit controls
pub const ORBIT_DAMPING_TAU_SEC: f32 = 0.15;
pub const ORBIT_ROTATE_SPEED: f32 = std::f32::consts::PI; // radians per normalized drag
pub const ORBIT_DOLLY_SPEED: f32 = 0.001; // wheel delta to distance scale
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_PITCH_LIMIT: f32 = 1.5; // keep away from the poles (radians)

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}
