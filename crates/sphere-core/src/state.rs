//! Camera and viewport state shared with the web frontend.
//!
//! These types avoid platform APIs so resize and projection math run in host
//! tests without a rendering surface.

use glam::{Mat4, Vec3};

use crate::constants::{
    camera_eye_vec3, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, MAX_PIXEL_RATIO,
};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Scene camera at its load-time pose, aspect taken from the viewport.
    pub fn initial(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Window viewport in CSS pixels plus the clamped device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: device_pixel_ratio.clamp(0.0, MAX_PIXEL_RATIO) as f32,
        }
    }

    /// Pure resize step: same clamping rules, new dimensions.
    pub fn resized(self, width: f32, height: f32, device_pixel_ratio: f64) -> Self {
        Self::new(width, height, device_pixel_ratio)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Canvas backing-store size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            ((self.width * self.pixel_ratio) as u32).max(1),
            ((self.height * self.pixel_ratio) as u32).max(1),
        )
    }
}
