use std::sync::Arc;

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

use crate::error::SceneError;
use crate::gfx::geometry::{Shape, Solid, SolidLibrary};
use crate::gfx::resources::palette::{Palette, DEFAULT_OBJECT_COLOR};

/// Translate / rotate / scale parameters of one placed object.
///
/// Rotation is in degrees about each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vector3<f32>) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// Composes `T * Rz * Ry * Rx * S`.
    ///
    /// Scale is applied first in local space, then X, Y and Z rotations, then
    /// translation. The order is fixed: combined rotate and scale edits look
    /// different under any other order.
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.translation);
        let rx = Matrix4::from_angle_x(Deg(self.rotation.x));
        let ry = Matrix4::from_angle_y(Deg(self.rotation.y));
        let rz = Matrix4::from_angle_z(Deg(self.rotation.z));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * rz * ry * rx * s
    }
}

/// A placed instance of a shared [`Solid`].
///
/// Every mutator recomputes the cached model matrix before returning, so the
/// matrix handed to a renderer always matches the transform fields.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    solid: Arc<Solid>,
    color: usize,
    transform: Transform,
    model_matrix: Matrix4<f32>,
}

impl SceneObject {
    /// Default object: white sphere at the origin, unit scale, no rotation.
    pub fn new(library: &SolidLibrary) -> Self {
        Self::build(
            library.solid(Shape::Sphere),
            DEFAULT_OBJECT_COLOR,
            Transform::default(),
        )
    }

    /// Places `solid` with an explicit color and transform.
    ///
    /// Fails with [`SceneError::UnknownColor`] when `color` is not in `palette`.
    pub fn with_transform(
        solid: Arc<Solid>,
        color: usize,
        transform: Transform,
        palette: &Palette,
    ) -> Result<Self, SceneError> {
        check_color(color, palette)?;
        Ok(Self::build(solid, color, transform))
    }

    fn build(solid: Arc<Solid>, color: usize, transform: Transform) -> Self {
        let mut object = Self {
            name: "Object".to_string(),
            solid,
            color,
            transform,
            model_matrix: Matrix4::identity(),
        };
        object.recompute_model_matrix();
        object
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn shape(&self) -> Shape {
        self.solid.shape
    }

    /// The shared geometry this object draws.
    pub fn solid(&self) -> &Arc<Solid> {
        &self.solid
    }

    pub fn vertex_count(&self) -> usize {
        self.solid.vertex_count()
    }

    /// Rebinds the object to another solid.
    ///
    /// Vertex buffer, texture coordinates and vertex count all come from the
    /// same [`Solid`], so they change together.
    pub fn set_shape(&mut self, shape: Shape, library: &SolidLibrary) {
        if self.solid.shape != shape {
            log::debug!("{}: {:?} -> {:?}", self.name, self.solid.shape, shape);
            self.solid = library.solid(shape);
        }
    }

    pub fn color(&self) -> usize {
        self.color
    }

    pub fn set_color(&mut self, color: usize, palette: &Palette) -> Result<(), SceneError> {
        check_color(color, palette)?;
        self.color = color;
        Ok(())
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.recompute_model_matrix();
    }

    /// Edits any of the nine transform fields in place, then recomputes.
    pub fn update_transform<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Transform),
    {
        edit(&mut self.transform);
        self.recompute_model_matrix();
    }

    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.update_transform(|t| t.translation = translation);
    }

    /// Set rotation in degrees about X, Y and Z
    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.update_transform(|t| t.rotation = rotation);
    }

    pub fn set_scale(&mut self, scale: Vector3<f32>) {
        self.update_transform(|t| t.scale = scale);
    }

    /// Rebuilds the model matrix from the current transform fields.
    pub fn recompute_model_matrix(&mut self) {
        self.model_matrix = self.transform.matrix();
    }

    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.model_matrix
    }
}

fn check_color(color: usize, palette: &Palette) -> Result<(), SceneError> {
    match palette.get(color) {
        Some(_) => Ok(()),
        None => Err(SceneError::UnknownColor {
            index: color,
            len: palette.len(),
        }),
    }
}
