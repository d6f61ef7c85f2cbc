//! The boundary between the scene and whatever API actually draws it.
//!
//! A [`Scene`](crate::gfx::scene::Scene) turns itself into an ordered list of
//! [`DrawCall`]s each frame; a [`FrameRenderer`] consumes them.

use cgmath::Matrix4;

use crate::gfx::camera::CameraUniform;
use crate::gfx::geometry::Shape;
use crate::gfx::scene::light::LightUniform;

/// How the vertices of a draw call are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Lines,
}

/// Identifies a shared vertex buffer so renderers can upload it once and reuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferId {
    Grid,
    Solid(Shape),
}

/// One draw against shared, immutable geometry.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    pub buffer: BufferId,
    pub primitive: Primitive,
    pub vertices: &'a [[f32; 3]],
    /// Present only for textured draws
    pub tex_coords: Option<&'a [[f32; 2]]>,
    pub model: Matrix4<f32>,
    pub color: [f32; 4],
}

impl DrawCall<'_> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Implemented by the host renderer.
///
/// Calls arrive in order: one `begin_frame`, any number of `draw`s, one `end_frame`.
pub trait FrameRenderer {
    fn begin_frame(&mut self, camera: &CameraUniform, lights: &[LightUniform]);
    fn draw(&mut self, call: &DrawCall<'_>);
    fn end_frame(&mut self) {}
}
