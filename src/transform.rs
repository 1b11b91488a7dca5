//! Rotation and translation builders.
//!
//! All matrices follow the row-vector convention of [`Mat4`]: a composition
//! `A * B` applies `A` first. The composition orders below are relied on by
//! the camera and by object rotation, so they must not be reordered.

use crate::error::Result;
use crate::math::{mat4::Mat4, vec3::Vec3};

/// Builds the three-axis Euler rotation `Rx * Ry * Rz`.
///
/// With row vectors this rotates around X first, then Y, then Z.
/// `angles` holds the per-axis angles in radians.
pub fn rotation_matrix(angles: Vec3) -> Mat4 {
    Mat4::rotation_x(angles.x) * Mat4::rotation_y(angles.y) * Mat4::rotation_z(angles.z)
}

/// Builds the affine translation by `offset` (translation in the last row).
pub fn translation_matrix(offset: Vec3) -> Mat4 {
    Mat4::translation(offset)
}

/// Builds `T(-pivot) * R(angles) * T(pivot)`: rotation about `pivot` instead of the origin.
pub fn pivot_rotation_matrix(angles: Vec3, pivot: Vec3) -> Mat4 {
    translation_matrix(-pivot) * rotation_matrix(angles) * translation_matrix(pivot)
}

/// Rotates `point` by `angles` around `pivot`.
pub fn pivot_rotate(point: Vec3, angles: Vec3, pivot: Vec3) -> Result<Vec3> {
    pivot_rotation_matrix(angles, pivot).transform_point(point)
}

/// Rotates `point` around `pivot` by the angular rate `angles` (radians per
/// second) integrated over `dt` seconds.
///
/// Called every frame with the same `angles`, this spins at a constant
/// angular velocity regardless of frame rate.
pub fn pivot_rotate_scaled(point: Vec3, angles: Vec3, pivot: Vec3, dt: f32) -> Result<Vec3> {
    pivot_rotate(point, angles * dt, pivot)
}

/// Uniform linear motion: `point + velocity * dt`.
pub fn translate_by_velocity(point: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
    point + velocity * dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(rotation_matrix(Vec3::ZERO), Mat4::identity());

        let pivot = Vec3::new(-2.0, 0.5, 3.0);
        for p in [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-7.0, 0.1, 9.0)] {
            assert_vec_eq(pivot_rotate(p, Vec3::ZERO, pivot).unwrap(), p);
        }
    }

    #[test]
    fn pivot_is_a_fixed_point() {
        let pivot = Vec3::new(2.0, -1.0, 3.0);
        for angles in [
            Vec3::new(0.3, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-2.5, 0.7, 4.0),
        ] {
            assert_vec_eq(pivot_rotate(pivot, angles, pivot).unwrap(), pivot);
        }
    }

    #[test]
    fn rotates_around_pivot_not_origin() {
        // A point one unit right of the pivot, quarter turn around Y.
        let pivot = Vec3::new(0.0, 0.0, 3.0);
        let p = pivot_rotate(Vec3::new(1.0, 0.0, 3.0), Vec3::new(0.0, FRAC_PI_2, 0.0), pivot)
            .unwrap();
        assert_vec_eq(p, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn composition_order_is_x_then_y_then_z() {
        let angles = Vec3::new(0.4, -1.1, 0.9);
        let p = Vec3::new(1.0, 2.0, 3.0);

        let composed = rotation_matrix(angles).transform_point(p).unwrap();
        let stepwise = [
            Mat4::rotation_x(angles.x),
            Mat4::rotation_y(angles.y),
            Mat4::rotation_z(angles.z),
        ]
        .iter()
        .try_fold(p, |acc, m| m.transform_point(acc))
        .unwrap();
        assert_vec_eq(composed, stepwise);

        let reversed = (Mat4::rotation_z(angles.z)
            * Mat4::rotation_y(angles.y)
            * Mat4::rotation_x(angles.x))
        .transform_point(p)
        .unwrap();
        assert!((composed - reversed).magnitude() > 1e-3);
    }

    #[test]
    fn negated_angles_undo_rotation() {
        let p = Vec3::new(0.5, -2.0, 4.0);

        // Single axis: R(a) followed by R(-a).
        for angles in [
            Vec3::new(0.8, 0.0, 0.0),
            Vec3::new(0.0, -1.3, 0.0),
            Vec3::new(0.0, 0.0, 2.2),
        ] {
            let m = rotation_matrix(angles) * rotation_matrix(-angles);
            assert_vec_eq(m.transform_point(p).unwrap(), p);
        }

        // Three axes: undo in reverse axis order.
        let angles = Vec3::new(0.3, 1.2, -0.7);
        let undo = Mat4::rotation_z(-angles.z)
            * Mat4::rotation_y(-angles.y)
            * Mat4::rotation_x(-angles.x);
        let m = rotation_matrix(angles) * undo;
        assert_vec_eq(m.transform_point(p).unwrap(), p);

        // A rotation's inverse is its transpose.
        let rotation = rotation_matrix(angles);
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(undo.get(row, col), rotation.get(col, row), epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn scaled_rotation_uses_rate_times_dt() {
        let pivot = Vec3::new(1.0, 1.0, 1.0);
        let p = Vec3::new(2.0, 0.0, 5.0);
        let rate = Vec3::new(0.0, 1.0, 0.5);

        let scaled = pivot_rotate_scaled(p, rate, pivot, 0.25).unwrap();
        let direct = pivot_rotate(p, Vec3::new(0.0, 0.25, 0.125), pivot).unwrap();
        assert_vec_eq(scaled, direct);

        assert_vec_eq(pivot_rotate_scaled(p, rate, pivot, 0.0).unwrap(), p);
    }

    #[test]
    fn translate_by_velocity_integrates_linearly() {
        let p = translate_by_velocity(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 0.0, -4.0), 0.5);
        assert_eq!(p, Vec3::new(2.0, 2.0, 1.0));
    }
}
