pub mod gpu_structures;
pub mod renderer;
pub mod shader_pipeline;
pub mod shaders;

pub use renderer::{CubeRenderer, CubeScene};
pub use shader_pipeline::{ShaderProgram, ShaderSources};
