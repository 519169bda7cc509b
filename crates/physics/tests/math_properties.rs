use tumble_physics::{Mat3, Quat, Vec3};

const EPS: f32 = 1e-4;

fn random_matrix(rng: &mut fastrand::Rng) -> Mat3 {
    let mut m = [0.0; 9];
    for v in &mut m {
        *v = rng.f32() * 2.0 - 1.0;
    }
    Mat3::from_cols_array(m)
}

/// Diagonally dominant, so comfortably invertible.
fn random_invertible_matrix(rng: &mut fastrand::Rng) -> Mat3 {
    random_matrix(rng) + Mat3::scale(3.0)
}

fn random_vector(rng: &mut fastrand::Rng) -> Vec3 {
    Vec3::new(
        rng.f32() * 20.0 - 10.0,
        rng.f32() * 20.0 - 10.0,
        rng.f32() * 20.0 - 10.0,
    )
}

#[test]
fn matrix_multiply_is_associative() {
    let mut rng = fastrand::Rng::with_seed(1);
    for _ in 0..200 {
        let (a, b, c) = (
            random_matrix(&mut rng),
            random_matrix(&mut rng),
            random_matrix(&mut rng),
        );
        assert!(((a * b) * c).abs_diff_eq(&(a * (b * c)), EPS));
    }
}

#[test]
fn matrix_multiply_distributes_over_addition() {
    let mut rng = fastrand::Rng::with_seed(2);
    for _ in 0..200 {
        let (a, b, c) = (
            random_matrix(&mut rng),
            random_matrix(&mut rng),
            random_matrix(&mut rng),
        );
        assert!((a * (b + c)).abs_diff_eq(&(a * b + a * c), EPS));
        assert!(((a + b) * c).abs_diff_eq(&(a * c + b * c), EPS));
    }
}

#[test]
fn identity_scale_is_neutral() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..50 {
        let m = random_matrix(&mut rng);
        assert_eq!(m * Mat3::scale(1.0), m);
        assert_eq!(Mat3::scale(1.0) * m, m);
    }
}

#[test]
fn matrix_product_agrees_with_composed_maps() {
    let mut rng = fastrand::Rng::with_seed(4);
    for _ in 0..100 {
        let (a, b) = (random_matrix(&mut rng), random_matrix(&mut rng));
        let v = random_vector(&mut rng);
        assert!(((a * b) * v - a * (b * v)).length() < 1e-3);
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..200 {
        let m = random_invertible_matrix(&mut rng);
        assert!((m.inverse() * m).abs_diff_eq(&Mat3::IDENTITY, EPS));
        assert!((m * m.inverse()).abs_diff_eq(&Mat3::IDENTITY, EPS));
    }
}

#[test]
fn inverse_of_scale_is_reciprocal_scale() {
    for s in [0.25_f32, 0.4, 1.0, 2.5, -3.0, 1000.0] {
        let inverse = Mat3::scale(s).inverse();
        let expected = Mat3::scale(1.0 / s);
        assert!(inverse.abs_diff_eq(&expected, 1e-6 * (1.0 / s).abs().max(1.0)));
    }
}

#[test]
fn double_transpose_is_exact() {
    let mut rng = fastrand::Rng::with_seed(6);
    for _ in 0..100 {
        let m = random_matrix(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn rotation_inverse_is_its_transpose() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        let axis = random_vector(&mut rng);
        if axis.length_squared() < 1e-3 {
            continue;
        }
        let r = Mat3::from_rotation(Quat::from_axis_angle(axis, rng.f32() * 6.0));
        assert!(r.inverse().abs_diff_eq(&r.transpose(), EPS));
        assert!((r.determinant() - 1.0).abs() < EPS);
    }
}

#[test]
fn normalize_yields_unit_length() {
    let mut rng = fastrand::Rng::with_seed(8);
    for _ in 0..500 {
        let v = random_vector(&mut rng);
        if v == Vec3::ZERO {
            continue;
        }
        assert!((v.normalize().length() - 1.0).abs() < 1e-5);
    }
    assert!((Vec3::new(1e-3, 0.0, 0.0).normalize().length() - 1.0).abs() < 1e-6);
}
