// Host-side tests for the damped orbit controls.

use glam::Vec3;
use sphere_core::{
    camera_eye_vec3, OrbitControls, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PITCH_LIMIT,
    ORBIT_ROTATE_SPEED,
};

const DT: f32 = 1.0 / 60.0;

fn settle(controls: &mut OrbitControls) {
    for _ in 0..600 {
        controls.update(DT);
    }
}

#[test]
fn from_eye_reconstructs_the_starting_pose() {
    let eye = camera_eye_vec3();
    let controls = OrbitControls::from_eye(eye, Vec3::ZERO);
    assert!(
        (controls.eye() - eye).length() < 1e-5,
        "reconstructed eye {:?}",
        controls.eye()
    );
}

#[test]
fn idle_controls_hold_their_pose() {
    let mut controls = OrbitControls::from_eye(camera_eye_vec3(), Vec3::ZERO);
    let before = controls.eye();
    settle(&mut controls);
    assert!((controls.eye() - before).length() < 1e-5);
}

#[test]
fn drag_converges_to_the_goal_yaw() {
    let eye = camera_eye_vec3();
    let mut controls = OrbitControls::from_eye(eye, Vec3::ZERO);
    controls.rotate(0.5, 0.0);
    settle(&mut controls);

    let distance = eye.length();
    let pitch = (eye.y / distance).asin();
    let yaw = eye.x.atan2(eye.z) - 0.5 * ORBIT_ROTATE_SPEED;
    let expected = distance * Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos());
    assert!(
        (controls.eye() - expected).length() < 1e-3,
        "eye {:?} expected {:?}",
        controls.eye(),
        expected
    );
}

#[test]
fn damping_moves_gradually_toward_the_goal() {
    let mut controls = OrbitControls::from_eye(camera_eye_vec3(), Vec3::ZERO);
    let before = controls.eye();
    controls.rotate(0.5, 0.0);
    controls.update(DT);
    let after_one = controls.eye();
    let moved = (after_one - before).length();
    assert!(moved > 0.0, "damping froze the camera");
    assert!(moved < 0.5, "one frame jumped too far: {moved}");
}

#[test]
fn pitch_is_clamped_away_from_the_poles() {
    let mut controls = OrbitControls::from_eye(camera_eye_vec3(), Vec3::ZERO);
    controls.rotate(0.0, 100.0);
    settle(&mut controls);
    let eye = controls.eye();
    let sin_pitch = eye.y / controls.distance();
    assert!(
        sin_pitch <= ORBIT_PITCH_LIMIT.sin() + 1e-4,
        "pitch escaped the clamp: {sin_pitch}"
    );
}

#[test]
fn dolly_is_clamped_to_the_distance_range() {
    let mut controls = OrbitControls::from_eye(camera_eye_vec3(), Vec3::ZERO);
    controls.dolly(1.0e9);
    settle(&mut controls);
    assert!(controls.distance() <= ORBIT_MAX_DISTANCE + 1e-4);

    controls.dolly(-1.0e9);
    settle(&mut controls);
    assert!(controls.distance() >= ORBIT_MIN_DISTANCE - 1e-4);
}
