//! Per-frame camera and object transforms.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Cube is pushed this far in front of the camera
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -6.0);
/// Radians of rotation per unit of frame delta
pub const ROTATION_RATE: f64 = 0.001;
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const CLEAR_DEPTH: f32 = 1.0;

/// Rotation angle for one frame. Derived from the delta alone, never accumulated.
pub fn rotation_angle(delta_time: f64) -> f32 {
    (delta_time * ROTATION_RATE) as f32
}

/// Perspective projection with a 45° vertical field of view.
///
/// Produces wgpu clip space (depth in `0..1`).
pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FIELD_OF_VIEW_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Translate in front of the camera, then rotate about Z, then about Y.
pub fn model_view_matrix(delta_time: f64) -> Mat4 {
    let angle = rotation_angle(delta_time);
    Mat4::from_translation(CAMERA_OFFSET) * Mat4::from_rotation_z(angle) * Mat4::from_rotation_y(angle)
}

/// Uniform block uploaded once per frame
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub projection_matrix: [[f32; 4]; 4],
    pub model_view_matrix: [[f32; 4]; 4],
}

impl SceneUniforms {
    pub fn new() -> Self {
        Self {
            projection_matrix: Mat4::IDENTITY.to_cols_array_2d(),
            model_view_matrix: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Matrices for one frame at the given aspect ratio and delta
    pub fn for_frame(aspect: f32, delta_time: f64) -> Self {
        Self {
            projection_matrix: projection_matrix(aspect).to_cols_array_2d(),
            model_view_matrix: model_view_matrix(delta_time).to_cols_array_2d(),
        }
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new()
    }
}
