//! Viewer configuration.
//!
//! All tunables of the viewer in one place, with defaults matching an
//! 800x600 window, a 90 degree field of view, and a 180 FPS frame cap.

use crate::camera::{Camera, CameraSettings};
use crate::error::Result;
use crate::projection::Projection;
use crate::scene::Scene;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const MAX_FPS: u32 = 180;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Frame rate cap used by the frame limiter.
    pub max_fps: u32,
    pub camera: CameraSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "wirecam".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
            max_fps: MAX_FPS,
            camera: CameraSettings::default(),
        }
    }
}

impl ViewerConfig {
    /// Builds the validated projection for the configured screen.
    pub fn projection(&self) -> Result<Projection> {
        Projection::for_viewport(self.near, self.far, self.fov_degrees, self.width, self.height)
    }

    /// Builds an empty scene with a camera at the origin.
    pub fn scene(&self) -> Result<Scene> {
        let camera = Camera::with_settings(self.projection()?, self.camera);
        Scene::with_camera(self.width, self.height, camera)
    }

    /// Target duration of one frame in seconds. Zero means uncapped.
    pub fn frame_time(&self) -> f32 {
        if self.max_fps == 0 {
            0.0
        } else {
            1.0 / self.max_fps as f32
        }
    }
}
