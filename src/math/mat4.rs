//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Points are **row vectors** on the left: `p * Mat4`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `A * B` applied to `p` is `(p * A) * B`,
//!   so A is applied first, then B
//!
//! # Example
//! ```ignore
//! let transform = to_origin * rotation * back;  // to_origin applied first
//! let result = transform.transform_point(vertex)?;
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use crate::error::{Error, Result};

/// 4x4 matrix stored row-major as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn zero() -> Self {
        Mat4::new([[0.0; 4]; 4])
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last row (row-vector convention).
    pub fn translation(offset: Vec3) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [offset.x, offset.y, offset.z, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Transforms a point treated as the homogeneous row `(x, y, z, 1)`.
    ///
    /// Computes `(x', y', z', w) = (x, y, z, 1) * self` and divides `x', y', z'`
    /// by `w`. Returns [`Error::DegenerateTransform`] when `w` is exactly zero.
    pub fn transform_point(&self, p: Vec3) -> Result<Vec3> {
        let m = &self.data;
        let x = p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0];
        let y = p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1];
        let z = p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2];
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];

        if w == 0.0 {
            return Err(Error::DegenerateTransform { w });
        }

        Ok(Vec3::new(x / w, y / w, z / w))
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

/// Matrix multiplication: `C[i][j] = sum_k A[i][k] * B[k][j]`.
///
/// For the row-vector convention, `A * B` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Mat4 {
        Mat4::new([
            [1.0, 2.0, 3.0, 4.0],
            [-5.0, 6.5, 0.0, 7.0],
            [8.0, -9.0, 10.0, 0.25],
            [11.0, 12.0, -13.0, 14.0],
        ])
    }

    #[test]
    fn multiply_by_identity_is_noop() {
        let a = sample();
        assert_eq!(a * Mat4::identity(), a);
        assert_eq!(Mat4::identity() * a, a);
    }

    #[test]
    fn multiply_is_not_commutative() {
        let t = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
        let r = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        assert_ne!(t * r, r * t);
    }

    #[test]
    fn multiply_matches_row_column_sums() {
        let a = sample();
        let mut b = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                b.set(row, col, a.get(col, row));
            }
        }
        let c = a * b;
        // Row 0 of A dotted with column 0 of B (= row 0 of A).
        assert_relative_eq!(c.get(0, 0), 1.0 + 4.0 + 9.0 + 16.0);
        assert_relative_eq!(c.get(1, 2), -5.0 * 8.0 + 6.5 * -9.0 + 7.0 * 0.25);
    }

    #[test]
    fn translation_lives_in_last_row() {
        let t = Mat4::translation(Vec3::new(2.0, -3.0, 4.0));
        assert_eq!(t.get(3, 0), 2.0);
        assert_eq!(t.get(3, 1), -3.0);
        assert_eq!(t.get(3, 2), 4.0);

        let p = t.transform_point(Vec3::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(p, Vec3::new(3.0, -2.0, 5.0));
    }

    #[test]
    fn transform_point_divides_by_w() {
        let mut m = Mat4::identity();
        m.set(3, 3, 2.0);
        let p = m.transform_point(Vec3::new(4.0, 6.0, 8.0)).unwrap();
        assert_eq!(p, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn transform_point_rejects_zero_w() {
        let mut m = Mat4::identity();
        m.set(3, 3, 0.0);
        m.set(2, 3, 1.0);

        // w = z, so any point on the z = 0 plane is degenerate.
        let err = m.transform_point(Vec3::new(1.0, 2.0, 0.0)).unwrap_err();
        assert_eq!(err, Error::DegenerateTransform { w: 0.0 });

        // Tiny but non-zero w still divides.
        assert!(m.transform_point(Vec3::new(1.0, 2.0, 1e-6)).is_ok());
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let r = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let p = r.transform_point(Vec3::RIGHT).unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }
}
