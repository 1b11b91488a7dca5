//! A minimal real-time 3D wireframe projector.
//!
//! World-space triangles go through the camera view matrix and a perspective
//! projection, get divided by `w`, and are mapped to pixel coordinates as
//! three line segments per triangle. Drawing the lines, windowing, and input
//! polling belong to the caller; the optional `sdl` feature provides an SDL2
//! implementation of them.
//!
//! # Quick Start
//!
//! ```
//! use wirecam::prelude::*;
//!
//! let config = ViewerConfig::default();
//! let mut scene = config.scene()?;
//! scene.add_object(RenderableObject::cuboid(Vec3::new(0.0, 0.0, 3.0), 1.0, 1.0, 1.0));
//!
//! let mut lines: Vec<LineSegment> = Vec::new();
//! let drawn = SceneProjector::new(&scene).render(&mut lines)?;
//! assert_eq!(drawn, 12);
//! assert_eq!(lines.len(), 36);
//! # Ok::<(), wirecam::Error>(())
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod math;
pub mod projection;
pub mod projector;
pub mod scene;
pub mod transform;
#[cfg(feature = "sdl")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, CameraSettings, MovementInput};
pub use config::ViewerConfig;
pub use error::{Error, Result};
pub use projection::Projection;
pub use projector::{LineSegment, LineSink, SceneProjector, ScreenTriangle};
pub use scene::{Mesh, ObjectId, RenderableObject, Scene, Triangle};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirecam::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, CameraSettings, MovementInput};

    // Configuration
    pub use crate::config::ViewerConfig;

    // Projection
    pub use crate::projection::Projection;
    pub use crate::projector::{LineSegment, LineSink, SceneProjector, ScreenTriangle};

    // Scene
    pub use crate::scene::{Mesh, ObjectId, RenderableObject, Scene, Triangle};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Window & Input
    #[cfg(feature = "sdl")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
