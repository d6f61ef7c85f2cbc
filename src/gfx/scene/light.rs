//! Phong light sources.
//!
//! Each light also carries a placement matrix used to draw a small sphere
//! marker at its position.

use cgmath::{Matrix4, Vector3, Vector4};

use crate::gfx::camera::camera_utils::convert_matrix4_to_array;

/// Uniform scale of the sphere drawn at a light's position.
pub const LIGHT_MARKER_SCALE: f32 = 0.25;

/// GPU uniform data for one light
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub position: [f32; 4],
    pub shininess: f32,
    /// 1 when the light contributes, 0 otherwise
    pub enabled: u32,
    _padding: [f32; 2],
}

#[derive(Debug, Clone)]
pub struct Light {
    pub enabled: bool,
    pub ambient: Vector4<f32>,
    pub diffuse: Vector4<f32>,
    pub specular: Vector4<f32>,
    pub shininess: f32,
    /// Palette index of the marker sphere
    pub marker_color: usize,
    /// `w = 0` marks a directional light pointing from `xyz` toward the origin.
    position: Vector4<f32>,
    placement: Matrix4<f32>,
}

impl Default for Light {
    fn default() -> Self {
        let mut light = Self {
            enabled: true,
            ambient: Vector4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Vector4::new(1.0, 1.0, 1.0, 1.0),
            specular: Vector4::new(1.0, 1.0, 1.0, 1.0),
            shininess: 40.0,
            marker_color: 0,
            position: Vector4::new(25.0, 25.0, 25.0, 0.0),
            placement: Matrix4::from_scale(LIGHT_MARKER_SCALE),
        };
        light.update_placement();
        light
    }
}

impl Light {
    pub fn position(&self) -> Vector4<f32> {
        self.position
    }

    /// Moves the light, keeping its `w` component.
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position.x = x;
        self.position.y = y;
        self.position.z = z;
        self.update_placement();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Marker transform: `T(position.xyz) * S(0.25)`.
    pub fn placement_matrix(&self) -> Matrix4<f32> {
        self.placement
    }

    fn update_placement(&mut self) {
        let t = Matrix4::from_translation(Vector3::new(
            self.position.x,
            self.position.y,
            self.position.z,
        ));
        self.placement = t * Matrix4::from_scale(LIGHT_MARKER_SCALE);
    }

    pub fn to_uniform(&self) -> LightUniform {
        LightUniform {
            ambient: self.ambient.into(),
            diffuse: self.diffuse.into(),
            specular: self.specular.into(),
            position: self.position.into(),
            shininess: self.shininess,
            enabled: self.enabled as u32,
            _padding: [0.0; 2],
        }
    }

    /// Column-major placement matrix for upload.
    pub fn placement_array(&self) -> [[f32; 4]; 4] {
        convert_matrix4_to_array(self.placement)
    }
}
