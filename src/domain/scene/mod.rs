pub mod frame_clock;
pub mod mesh;
pub mod transform;

pub use frame_clock::{FrameClock, FrameStats};
pub use mesh::{Mesh, Vertex, generate_box};
pub use transform::{SceneUniforms, model_view_matrix, projection_matrix, rotation_angle};
