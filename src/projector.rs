//! World-space triangles to pixel-space line segments.
//!
//! Each vertex goes through three stages, each available on its own:
//!
//! 1. [`to_view_space`]: camera view matrix
//! 2. [`to_clip_space`]: projection matrix, including the perspective divide
//! 3. [`to_screen`]: normalized device coordinates to pixels
//!
//! [`SceneProjector`] chains them for every triangle of every object and hands
//! three edges per triangle to a [`LineSink`].

use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::scene::{Scene, Triangle};

/// A line between two pixel-space points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
}

impl LineSegment {
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }
}

/// A projected triangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec2; 3],
}

impl ScreenTriangle {
    /// The wireframe outline, always in the order p0-p1, p1-p2, p2-p0.
    pub fn edges(&self) -> [LineSegment; 3] {
        let [p0, p1, p2] = self.points;
        [
            LineSegment::new(p0, p1),
            LineSegment::new(p1, p2),
            LineSegment::new(p2, p0),
        ]
    }
}

/// A line-drawing primitive.
///
/// Implemented by whatever surface the wireframe ends up on.
pub trait LineSink {
    fn draw_line(&mut self, from: Vec2, to: Vec2) -> Result<()>;
}

/// Records segments instead of drawing them.
impl LineSink for Vec<LineSegment> {
    fn draw_line(&mut self, from: Vec2, to: Vec2) -> Result<()> {
        self.push(LineSegment::new(from, to));
        Ok(())
    }
}

/// World space to view space.
pub fn to_view_space(point: Vec3, view: &Mat4) -> Result<Vec3> {
    view.transform_point(point)
}

/// View space to normalized device coordinates (perspective divide included).
pub fn to_clip_space(point: Vec3, projection: &Mat4) -> Result<Vec3> {
    projection.transform_point(point)
}

/// Maps normalized device coordinates to pixels: `(ndc + 1) * 0.5 * size`.
pub fn to_screen(ndc: Vec3, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * width as f32,
        (ndc.y + 1.0) * 0.5 * height as f32,
    )
}

/// Projects one scene as seen by its camera during one frame.
///
/// The view matrix is taken from the camera when the projector is created,
/// so camera input for the frame must be applied before that. The scene stays
/// borrowed until the projector is dropped.
#[derive(Debug, Clone, Copy)]
pub struct SceneProjector<'a> {
    scene: &'a Scene,
    view: Mat4,
    projection: Mat4,
}

impl<'a> SceneProjector<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            view: scene.camera().view_matrix(),
            projection: *scene.projection_matrix(),
        }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    pub fn project_point(&self, point: Vec3) -> Result<Vec2> {
        let view_space = to_view_space(point, &self.view)?;
        let ndc = to_clip_space(view_space, &self.projection)?;
        Ok(to_screen(ndc, self.scene.width(), self.scene.height()))
    }

    pub fn project_triangle(&self, triangle: &Triangle) -> Result<ScreenTriangle> {
        let [a, b, c] = triangle.points;
        Ok(ScreenTriangle {
            points: [
                self.project_point(a)?,
                self.project_point(b)?,
                self.project_point(c)?,
            ],
        })
    }

    fn triangles(&self) -> impl Iterator<Item = &'a Triangle> {
        self.scene
            .objects()
            .iter()
            .flat_map(|object| object.mesh().triangles())
    }

    /// Every triangle of every object, in object then mesh order.
    pub fn project_scene(&self) -> Result<Vec<ScreenTriangle>> {
        self.triangles()
            .map(|triangle| self.project_triangle(triangle))
            .collect()
    }

    /// Projects the scene and draws three edges per triangle into `sink`.
    ///
    /// Returns the number of triangles drawn.
    pub fn render<S: LineSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let mut count = 0;
        for triangle in self.triangles() {
            let projected = self.project_triangle(triangle)?;
            for edge in projected.edges() {
                sink.draw_line(edge.from, edge.to)?;
            }
            count += 1;
        }
        Ok(count)
    }
}
