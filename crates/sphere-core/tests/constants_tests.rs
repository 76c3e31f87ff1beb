// Host-side tests for constants and their mathematical relationships.

use sphere_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_within_reasonable_bounds() {
    assert!(SPHERE_RADIUS > 0.0);
    assert!(SPHERE_WIDTH_SEGMENTS >= 3);
    assert!(SPHERE_HEIGHT_SEGMENTS >= 2);

    // Points should be small relative to the sphere itself
    assert!(POINT_SIZE > 0.0);
    assert!(POINT_SIZE < SPHERE_RADIUS);

    for c in POINT_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }

    assert!(JITTER_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_consistent() {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);

    // The camera starts inside the orbit distance clamps
    let eye_distance = camera_eye_vec3().length();
    assert!(eye_distance >= ORBIT_MIN_DISTANCE);
    assert!(eye_distance <= ORBIT_MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tween_constants_are_positive() {
    assert!(DEFAULT_SCRUB_SECONDS > 0.0);
    assert!(INTRO_DURATION_SECONDS > 0.0);
    assert!(INTRO_DROP_HEIGHT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_constants_have_logical_relationships() {
    assert!(ORBIT_DAMPING_TAU_SEC > 0.0);
    assert!(ORBIT_ROTATE_SPEED > 0.0);
    assert!(ORBIT_DOLLY_SPEED > 0.0);
    assert!(ORBIT_MIN_DISTANCE > 0.0);
    assert!(ORBIT_MAX_DISTANCE > ORBIT_MIN_DISTANCE);

    // Pitch clamp must stay short of the poles
    assert!(ORBIT_PITCH_LIMIT > 0.0);
    assert!(ORBIT_PITCH_LIMIT < std::f32::consts::FRAC_PI_2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_cap_is_sane() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
