//! wgpu renderer responsible for drawing the cube.
//!
//! The renderer owns every GPU handle (surface, device, program, buffers)
//! and exposes a single `render_frame(delta_time)` to the animation driver.

use crate::domain::config::SceneConfig;
use crate::domain::errors::{RenderError, RenderResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::scene::transform::{CLEAR_COLOR, CLEAR_DEPTH};
use crate::domain::scene::{Mesh, SceneUniforms, generate_box};
use crate::infrastructure::rendering::gpu_structures::{
    GpuBuffers, SCENE_BIND_GROUP, create_depth_texture,
};
use crate::infrastructure::rendering::shader_pipeline::{ShaderProgram, ShaderSources};
use wgpu::util::DeviceExt;

mod initialization;
mod render_loop;
mod scene;

pub use initialization::is_webgpu_supported;
pub use scene::CubeScene;

/// Browser-backed renderer for the rotating cube
pub struct CubeRenderer {
    canvas_id: String,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: CubeScene,
}

impl CubeRenderer {
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}
