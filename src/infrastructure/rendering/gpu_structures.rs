use wgpu::util::DeviceExt;

use crate::domain::scene::{Mesh, SceneUniforms, Vertex};

/// Shader input locations of the vertex attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribLocations {
    pub vertex_position: u32,
    pub vertex_color: u32,
}

/// Byte offsets of each matrix inside the uniform block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocations {
    pub projection_matrix: wgpu::BufferAddress,
    pub model_view_matrix: wgpu::BufferAddress,
}

pub const ATTRIB_LOCATIONS: AttribLocations =
    AttribLocations { vertex_position: 0, vertex_color: 1 };

pub const UNIFORM_LOCATIONS: UniformLocations = UniformLocations {
    projection_matrix: std::mem::offset_of!(SceneUniforms, projection_matrix) as wgpu::BufferAddress,
    model_view_matrix: std::mem::offset_of!(SceneUniforms, model_view_matrix) as wgpu::BufferAddress,
};

/// Bind group slot holding the scene uniforms
pub const SCENE_BIND_GROUP: u32 = 0;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

impl Vertex {
    /// Interleaved layout: position at offset 0, color at offset 3 floats
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: ATTRIB_LOCATIONS.vertex_position,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: (3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
                shader_location: ATTRIB_LOCATIONS.vertex_color,
                format: wgpu::VertexFormat::Float32x3,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Immutable vertex and index buffers of the cube
pub struct GpuBuffers {
    pub vertex: wgpu::Buffer,
    pub indices: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuBuffers {
    /// Upload a mesh once; neither buffer is writable afterwards
    pub fn upload(device: &wgpu::Device, mesh: &Mesh) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self { vertex, indices, index_count: mesh.index_count() }
    }
}

/// Depth attachment matching the surface size
pub fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    depth_texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_position_in_each_vertex() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn matrices_are_packed_back_to_back() {
        assert_eq!(UNIFORM_LOCATIONS.projection_matrix, 0);
        assert_eq!(UNIFORM_LOCATIONS.model_view_matrix, 64);
    }
}
