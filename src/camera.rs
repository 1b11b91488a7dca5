//! First-person wireframe camera.
//!
//! # State
//!
//! The camera holds a position, an Euler rotation (radians, per axis) and a
//! velocity. The velocity is a per-frame accumulator, not a physical quantity:
//!
//! 1. [`Camera::accumulate_directional_input`] adds one unit step per active
//!    direction and renormalizes the sum.
//! 2. [`Camera::integrate`] moves the camera by `velocity * damping` and
//!    clears the velocity.
//!
//! Look input ([`Camera::apply_look_input`]) is independent of both and may
//! arrive at any point in the frame.

use log::trace;

use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::transform::{pivot_rotate, rotation_matrix, translation_matrix};

/// Tuning constants for camera movement and look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Fraction of the accumulated velocity applied per integration step.
    pub damping: f32,
    /// Radians of rotation per pixel of pointer motion.
    pub look_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            damping: 0.1,
            look_sensitivity: 0.002,
        }
    }
}

/// Movement directions held down during a frame.
///
/// Sampled once per frame from the keyboard state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementInput {
    /// Active directions as (world axis, sign) pairs, in a fixed order.
    fn active_axes(&self) -> impl Iterator<Item = (Vec3, f32)> {
        [
            (self.forward, Vec3::FORWARD, 1.0),
            (self.back, Vec3::FORWARD, -1.0),
            (self.right, Vec3::RIGHT, 1.0),
            (self.left, Vec3::RIGHT, -1.0),
            (self.up, Vec3::UP, 1.0),
            (self.down, Vec3::UP, -1.0),
        ]
        .into_iter()
        .filter(|(active, _, _)| *active)
        .map(|(_, axis, sign)| (axis, sign))
    }
}

/// The scene's single viewpoint.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Vec3,
    velocity: Vec3,
    projection: Projection,
    settings: CameraSettings,
}

impl Camera {
    /// Creates a camera at the origin with no rotation.
    pub fn new(projection: Projection) -> Self {
        Self::with_settings(projection, CameraSettings::default())
    }

    pub fn with_settings(projection: Projection, settings: CameraSettings) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            projection,
            settings,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler angles in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Teleports the camera without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub(crate) fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// Computes the view matrix: `R(-rotation) * T(-position)`.
    ///
    /// Both the rotation and the translation are negated, and the rotation
    /// comes first in the composition.
    pub fn view_matrix(&self) -> Mat4 {
        rotation_matrix(-self.rotation) * translation_matrix(-self.position)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Local axis for a world axis: rotated by the camera orientation around
    /// the camera position, then normalized.
    fn local_axis(&self, world_axis: Vec3) -> Result<Vec3> {
        Ok(pivot_rotate(world_axis, self.rotation, self.position)?.normalize())
    }

    /// Adds a `dt`-scaled step along the local axis of every active direction,
    /// then renormalizes the velocity.
    ///
    /// Renormalizing caps diagonal movement at the speed of single-axis
    /// movement. With nothing pressed the velocity stays zero.
    pub fn accumulate_directional_input(&mut self, input: &MovementInput, dt: f32) -> Result<()> {
        for (world_axis, sign) in input.active_axes() {
            let axis = self.local_axis(world_axis)?;
            self.velocity = self.velocity + axis * (sign * dt);
        }

        self.velocity = self.velocity.normalize();
        Ok(())
    }

    /// Moves by `velocity * damping` and clears the velocity.
    pub fn integrate(&mut self) {
        self.position = self.position + self.velocity * self.settings.damping;
        self.velocity = Vec3::ZERO;
    }

    /// One frame of keyboard movement: accumulate, then integrate.
    pub fn update(&mut self, input: &MovementInput, dt: f32) -> Result<()> {
        self.accumulate_directional_input(input, dt)?;
        self.integrate();
        Ok(())
    }

    /// Applies relative pointer motion.
    ///
    /// `dx` decreases `rotation.x` and `dy` increases `rotation.y`, each by
    /// `look_sensitivity` radians per pixel. The whole rotation vector is
    /// then normalized, which caps the combined angle magnitude at 1.
    pub fn apply_look_input(&mut self, dx: i32, dy: i32) {
        let sensitivity = self.settings.look_sensitivity;
        self.rotation.x -= dx as f32 * sensitivity;
        self.rotation.y += dy as f32 * sensitivity;
        self.rotation = self.rotation.normalize();

        trace!("camera rotation {}", self.rotation);
    }
}

// =============================================================================
// Tests
// =============================================================================
