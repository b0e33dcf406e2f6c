// renderer/uniforms.rs
use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::scene::Lighting;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    pub fn from_matrices(proj: Mat4, view: Mat4) -> Self {
        Self {
            proj: proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// std140 mirror of [`Lighting`]; shininess lives in `.x` of the last vec4.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable, PartialEq, Debug)]
pub struct LightingUniform {
    pub light_position: [f32; 4],
    pub light_ambient: [f32; 4],
    pub light_diffuse: [f32; 4],
    pub light_specular: [f32; 4],
    pub global_ambient: [f32; 4],
    pub material_ambient: [f32; 4],
    pub material_diffuse: [f32; 4],
    pub material_specular: [f32; 4],
    pub material_shininess: [f32; 4],
}

impl From<&Lighting> for LightingUniform {
    fn from(l: &Lighting) -> Self {
        Self {
            light_position: l.light_position,
            light_ambient: l.light_ambient,
            light_diffuse: l.light_diffuse,
            light_specular: l.light_specular,
            global_ambient: l.global_ambient,
            material_ambient: l.material_ambient,
            material_diffuse: l.material_diffuse,
            material_specular: l.material_specular,
            material_shininess: [l.material_shininess, 0.0, 0.0, 0.0],
        }
    }
}
