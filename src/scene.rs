//! Scene geometry and the per-scene context.
//!
//! A [`Scene`] owns the single [`Camera`], the append-only list of
//! [`RenderableObject`]s, the screen dimensions, and the projection matrix
//! cached from the camera's projection parameters.

use log::debug;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::transform::{pivot_rotation_matrix, translate_by_velocity};

/// Three world-space vertices. No normal, color, or material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { points: [a, b, c] }
    }
}

/// An ordered list of triangles. Order decides draw order only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vec3> {
        self.triangles.iter_mut().flat_map(|t| t.points.iter_mut())
    }
}

/// A mesh plus the pivot it rotates around.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableObject {
    mesh: Mesh,
    center: Vec3,
}

impl RenderableObject {
    pub fn new(mesh: Mesh, center: Vec3) -> Self {
        Self { mesh, center }
    }

    /// Builds an axis-aligned box of 12 triangles centered on `center`,
    /// which also becomes the rotation pivot.
    pub fn cuboid(center: Vec3, width: f32, height: f32, depth: f32) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let corner = |sx: f32, sy: f32, sz: f32| {
            Vec3::new(center.x + sx * hw, center.y + sy * hh, center.z + sz * hd)
        };

        // Each face is two triangles sharing the first corner.
        let faces = [
            // North (+Z)
            [(-1.0, -1.0, 1.0), (-1.0, 1.0, 1.0), (1.0, 1.0, 1.0), (1.0, -1.0, 1.0)],
            // East (+X)
            [(1.0, -1.0, -1.0), (1.0, 1.0, -1.0), (1.0, 1.0, 1.0), (1.0, -1.0, 1.0)],
            // West (-X)
            [(-1.0, -1.0, 1.0), (-1.0, 1.0, 1.0), (-1.0, 1.0, -1.0), (-1.0, -1.0, -1.0)],
            // Top (+Y)
            [(-1.0, 1.0, -1.0), (-1.0, 1.0, 1.0), (1.0, 1.0, 1.0), (1.0, 1.0, -1.0)],
            // Bottom (-Y)
            [(-1.0, -1.0, -1.0), (-1.0, -1.0, 1.0), (1.0, -1.0, 1.0), (1.0, -1.0, -1.0)],
            // South (-Z)
            [(-1.0, -1.0, -1.0), (-1.0, 1.0, -1.0), (1.0, 1.0, -1.0), (1.0, -1.0, -1.0)],
        ];

        let mut mesh = Mesh::default();
        for quad in faces {
            let [a, b, c, d] = quad.map(|(sx, sy, sz)| corner(sx, sy, sz));
            mesh.push(Triangle::new(a, b, c));
            mesh.push(Triangle::new(a, c, d));
        }

        Self::new(mesh, center)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Rotation pivot.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Rotates every vertex around the center by the angular rate `angles`
    /// (radians per second) over `dt` seconds.
    pub fn rotate(&mut self, angles: Vec3, dt: f32) -> Result<()> {
        let m = pivot_rotation_matrix(angles * dt, self.center);
        for v in self.mesh.vertices_mut() {
            *v = m.transform_point(*v)?;
        }
        Ok(())
    }

    /// Moves every vertex by `velocity * dt`. The pivot does not move.
    pub fn translate(&mut self, velocity: Vec3, dt: f32) {
        for v in self.mesh.vertices_mut() {
            *v = translate_by_velocity(*v, velocity, dt);
        }
    }
}

/// Index of an object in its scene. Objects are never removed, so ids stay valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Camera, objects, and screen: everything the projector reads per frame.
#[derive(Debug, Clone)]
pub struct Scene {
    width: u32,
    height: u32,
    camera: Camera,
    projection_matrix: Mat4,
    objects: Vec<RenderableObject>,
}

impl Scene {
    /// Creates an empty scene with a camera at the origin.
    pub fn new(width: u32, height: u32, projection: Projection) -> Result<Self> {
        Self::with_camera(width, height, Camera::new(projection))
    }

    /// Creates an empty scene around an existing camera. The camera's
    /// projection must have been built for a `width` x `height` screen.
    pub fn with_camera(width: u32, height: u32, camera: Camera) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        check_aspect(width, height, camera.projection())?;
        Ok(Self {
            width,
            height,
            projection_matrix: camera.projection().matrix(),
            camera,
            objects: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The cached projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Replaces the camera's projection parameters. The cached matrix is
    /// rebuilt only when the parameters actually differ.
    ///
    /// The new projection must use this scene's aspect ratio; otherwise the
    /// scene is left untouched.
    pub fn set_projection(&mut self, projection: Projection) -> Result<()> {
        if *self.camera.projection() == projection {
            return Ok(());
        }
        check_aspect(self.width, self.height, &projection)?;
        self.projection_matrix = projection.matrix();
        self.camera.set_projection(projection);
        Ok(())
    }

    /// Appends an object and returns its id.
    pub fn add_object(&mut self, object: RenderableObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        debug!(
            "added object {} with {} triangles around {}",
            id.0,
            object.mesh().len(),
            object.center()
        );
        self.objects.push(object);
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&RenderableObject> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut RenderableObject> {
        self.objects.get_mut(id.0)
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[RenderableObject] {
        &self.objects
    }
}

/// Aspect ratios closer than this count as equal.
const ASPECT_TOLERANCE: f32 = 1e-6;

fn check_aspect(width: u32, height: u32, projection: &Projection) -> Result<()> {
    let expected = height as f32 / width as f32;
    if (projection.aspect_ratio() - expected).abs() > ASPECT_TOLERANCE {
        return Err(Error::invalid_projection(format!(
            "aspect ratio {} does not match a {}x{} screen ({})",
            projection.aspect_ratio(),
            width,
            height,
            expected
        )));
    }
    Ok(())
}
