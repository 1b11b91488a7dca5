//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the
//! perspective parameters (near/far planes, field of view, aspect ratio) and
//! the two scalars derived from them. It is validated once at construction,
//! so a `Projection` that exists always yields a usable matrix.

use log::debug;

use crate::error::{Error, Result};
use crate::math::mat4::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Near clipping plane distance.
    near: f32,
    /// Far clipping plane distance.
    far: f32,
    /// Field of view in degrees.
    fov_degrees: f32,
    /// Screen height divided by screen width.
    aspect_ratio: f32,
    /// `1 / tan(fov / 2)`.
    fov_scale: f32,
    /// `far / (far - near)`.
    depth_scale: f32,
}

impl Projection {
    /// Creates a projection, rejecting parameters that would give the matrix
    /// a zero or non-finite diagonal entry.
    ///
    /// # Arguments
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > `near`)
    /// * `fov_degrees` - Field of view, strictly between 0 and 180 degrees
    /// * `aspect_ratio` - Screen height divided by screen width
    pub fn new(near: f32, far: f32, fov_degrees: f32, aspect_ratio: f32) -> Result<Self> {
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(Error::invalid_projection(format!(
                "field of view {fov_degrees} must be between 0 and 180 degrees"
            )));
        }
        if !(near > 0.0) {
            return Err(Error::invalid_projection(format!(
                "near plane {near} must be positive"
            )));
        }
        if !(far > near) {
            return Err(Error::invalid_projection(format!(
                "far plane {far} must lie beyond near plane {near}"
            )));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(Error::invalid_projection(format!(
                "aspect ratio {aspect_ratio} must be positive"
            )));
        }

        let fov_scale = 1.0 / (fov_degrees.to_radians() * 0.5).tan();
        let depth_scale = far / (far - near);

        let projection = Self {
            near,
            far,
            fov_degrees,
            aspect_ratio,
            fov_scale,
            depth_scale,
        };

        let matrix = projection.matrix();
        for i in 0..3 {
            let entry = matrix.get(i, i);
            if entry == 0.0 || !entry.is_finite() {
                return Err(Error::invalid_projection(format!(
                    "diagonal entry [{i}][{i}] is {entry}"
                )));
            }
        }

        debug!(
            "projection: near={near} far={far} fov={fov_degrees} aspect={aspect_ratio} \
             fov_scale={fov_scale} depth_scale={depth_scale}"
        );

        Ok(projection)
    }

    /// Creates a projection whose aspect ratio is `height / width` of the screen.
    pub fn for_viewport(
        near: f32,
        far: f32,
        fov_degrees: f32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        Self::new(near, far, fov_degrees, height as f32 / width as f32)
    }

    /// Returns the near clipping plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Returns the far clipping plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Returns the field of view in degrees.
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Returns the aspect ratio (height / width).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn fov_scale(&self) -> f32 {
        self.fov_scale
    }

    pub fn depth_scale(&self) -> f32 {
        self.depth_scale
    }

    /// Generates the perspective matrix.
    ///
    /// Row-vector layout: view-space `z` is copied into `w` through `[2][3]`,
    /// and the near-plane offset sits in the translation row at `[3][2]`.
    pub fn matrix(&self) -> Mat4 {
        let mut m = Mat4::zero();
        m.set(0, 0, self.aspect_ratio * self.fov_scale);
        m.set(1, 1, self.fov_scale);
        m.set(2, 2, self.depth_scale);
        m.set(3, 2, -self.near * self.depth_scale);
        m.set(2, 3, 1.0);
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn derived_scalars() {
        let proj = Projection::new(0.1, 1000.0, 90.0, 0.75).unwrap();
        assert_relative_eq!(proj.fov_scale(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(proj.depth_scale(), 1000.0 / 999.9, epsilon = 1e-6);
    }

    #[test]
    fn matrix_layout() {
        let proj = Projection::new(0.1, 1000.0, 90.0, 0.75).unwrap();
        let m = proj.matrix();

        assert_relative_eq!(m.get(0, 0), 0.75, epsilon = 1e-6);
        assert_relative_eq!(m.get(1, 1), 1.0, epsilon = 1e-6);
        assert_relative_eq!(m.get(2, 2), proj.depth_scale());
        assert_relative_eq!(m.get(3, 2), -0.1 * proj.depth_scale());
        assert_eq!(m.get(2, 3), 1.0);

        let nonzero = (0..4)
            .flat_map(|r| (0..4).map(move |c| (r, c)))
            .filter(|&(r, c)| m.get(r, c) != 0.0)
            .count();
        assert_eq!(nonzero, 5);
    }

    #[test]
    fn near_plane_maps_to_zero_depth_and_far_to_one() {
        let proj = Projection::new(0.5, 50.0, 60.0, 1.0).unwrap();
        let m = proj.matrix();

        let near = m.transform_point(Vec3::new(0.0, 0.0, 0.5)).unwrap();
        let far = m.transform_point(Vec3::new(0.0, 0.0, 50.0)).unwrap();
        assert_relative_eq!(near.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn for_viewport_uses_height_over_width() {
        let proj = Projection::for_viewport(0.1, 1000.0, 90.0, 800, 600).unwrap();
        assert_relative_eq!(proj.aspect_ratio(), 0.75);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        for (near, far, fov) in [
            (0.1, 1000.0, 180.0),
            (0.1, 1000.0, 0.0),
            (0.1, 1000.0, -45.0),
            (1.0, 1.0, 90.0),
            (10.0, 1.0, 90.0),
            (0.0, 100.0, 90.0),
            (0.1, f32::NAN, 90.0),
        ] {
            let err = Projection::new(near, far, fov, 0.75).unwrap_err();
            assert!(matches!(err, Error::InvalidProjection { .. }), "{err}");
        }

        assert!(Projection::new(0.1, 100.0, 90.0, 0.0).is_err());
    }

    #[test]
    fn rejects_empty_viewport() {
        let err = Projection::for_viewport(0.1, 100.0, 90.0, 0, 600).unwrap_err();
        assert_eq!(err, Error::InvalidViewport { width: 0, height: 600 });
    }
}
