// Host-side tests for the morph-target generators and blending.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_core::{randomness_target, twist_target, MorphSet, SphereGeometry};

fn base_sphere() -> SphereGeometry {
    SphereGeometry::new(0.8, 32, 32)
}

#[test]
fn both_targets_are_index_aligned_with_the_base() {
    let geometry = base_sphere();
    let n = geometry.vertex_count();
    assert_eq!(n, 1089);

    let mut rng = StdRng::seed_from_u64(1);
    let random = randomness_target(&geometry.positions, &mut rng);
    let twist = twist_target(&geometry.positions);
    assert_eq!(random.len(), n);
    assert_eq!(twist.len(), n);

    // Flat view: exactly 3 floats per base vertex.
    assert_eq!(bytemuck::cast_slice::<Vec3, f32>(&random).len(), 3 * n);
    assert_eq!(bytemuck::cast_slice::<Vec3, f32>(&twist).len(), 3 * n);
}

#[test]
fn empty_base_yields_empty_targets() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(randomness_target(&[], &mut rng).is_empty());
    assert!(twist_target(&[]).is_empty());
}

#[test]
fn twist_is_bit_for_bit_deterministic() {
    let geometry = base_sphere();
    let a = twist_target(&geometry.positions);
    let b = twist_target(&geometry.positions);
    assert_eq!(a, b);
}

#[test]
fn twist_leaves_the_x_zero_plane_fixed() {
    let base = vec![
        Vec3::new(0.0, 0.3, -0.7),
        Vec3::new(0.0, -1.2, 0.4),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let twisted = twist_target(&base);
    // Angle is zero at x = 0, so the output is exactly (0, y, z).
    assert_eq!(twisted, base);
}

#[test]
fn twist_doubles_x_and_rotates_about_x() {
    let base = vec![
        Vec3::new(0.5, 0.0, 0.0),
        Vec3::new(-0.25, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];
    let twisted = twist_target(&base);
    for (p, t) in base.iter().zip(&twisted) {
        assert!((t.x - 2.0 * p.x).abs() < 1e-6, "x not doubled: {p:?} -> {t:?}");
        // Rotation about x preserves the yz radius.
        let r_base = (p.y * p.y + p.z * p.z).sqrt();
        let r_twist = (t.y * t.y + t.z * t.z).sqrt();
        assert!((r_base - r_twist).abs() < 1e-5, "yz radius changed: {p:?} -> {t:?}");
    }
}

#[test]
fn randomness_is_reproducible_for_a_fixed_seed() {
    let geometry = base_sphere();
    let a = randomness_target(&geometry.positions, &mut StdRng::seed_from_u64(7));
    let b = randomness_target(&geometry.positions, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn randomness_differs_across_generations() {
    let geometry = base_sphere();
    let mut rng = StdRng::seed_from_u64(7);
    let a = randomness_target(&geometry.positions, &mut rng);
    let b = randomness_target(&geometry.positions, &mut rng);
    let differing = a.iter().zip(&b).filter(|(x, y)| x != y).count();
    assert!(
        differing > a.len() / 2,
        "only {differing} of {} vertices differ",
        a.len()
    );
}

#[test]
fn randomness_x_component_stays_in_sine_range() {
    let geometry = base_sphere();
    let target = randomness_target(&geometry.positions, &mut StdRng::seed_from_u64(3));
    for (i, t) in target.iter().enumerate() {
        assert!(t.x >= -1.0 && t.x <= 1.0, "vertex {i} x out of range: {}", t.x);
    }
}

#[test]
fn blend_at_zero_weights_is_the_base() {
    let geometry = base_sphere();
    let mut morphs = MorphSet::new();
    morphs.push(randomness_target(
        &geometry.positions,
        &mut StdRng::seed_from_u64(5),
    ));
    morphs.push(twist_target(&geometry.positions));

    let mut out = Vec::new();
    morphs
        .blend_into(&geometry.positions, &[0.0, 0.0], &mut out)
        .unwrap();
    assert_eq!(out, geometry.positions);
}

#[test]
fn blend_at_full_weight_matches_the_target() {
    let geometry = base_sphere();
    let twist = twist_target(&geometry.positions);
    let mut morphs = MorphSet::new();
    morphs.push(randomness_target(
        &geometry.positions,
        &mut StdRng::seed_from_u64(5),
    ));
    morphs.push(twist.clone());

    let mut out = Vec::new();
    morphs
        .blend_into(&geometry.positions, &[0.0, 1.0], &mut out)
        .unwrap();
    for (i, (o, t)) in out.iter().zip(&twist).enumerate() {
        assert!(
            (*o - *t).length() < 1e-5,
            "vertex {i} not at the target: {o:?} vs {t:?}"
        );
    }
}

#[test]
fn blend_interpolates_halfway() {
    let base = vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
    let target = vec![Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 2.0)];
    let mut morphs = MorphSet::new();
    morphs.push(target);

    let mut out = Vec::new();
    morphs.blend_into(&base, &[0.5], &mut out).unwrap();
    assert!((out[0] - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    assert!((out[1] - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-6);
}

#[test]
fn blend_reuses_the_scratch_buffer() {
    let geometry = base_sphere();
    let mut morphs = MorphSet::new();
    morphs.push(twist_target(&geometry.positions));

    let mut out = vec![Vec3::splat(9.0); 4];
    morphs
        .blend_into(&geometry.positions, &[1.0], &mut out)
        .unwrap();
    assert_eq!(out.len(), geometry.vertex_count());
}

#[test]
fn mismatched_target_length_is_an_error() {
    let geometry = base_sphere();
    let mut morphs = MorphSet::new();
    morphs.push(vec![Vec3::ZERO; 3]);

    let mut out = Vec::new();
    let err = morphs
        .blend_into(&geometry.positions, &[1.0], &mut out)
        .unwrap_err();
    assert!(err.to_string().contains("morph target"));
}
