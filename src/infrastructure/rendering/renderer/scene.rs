use super::*;

/// Device-side state of the cube: program, buffers, uniforms and depth target.
///
/// Independent of any surface, so it can also draw into an offscreen texture.
pub struct CubeScene {
    program: ShaderProgram,
    buffers: GpuBuffers,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    aspect: f32,
}

impl CubeScene {
    pub async fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        mesh: &Mesh,
        width: u32,
        height: u32,
    ) -> RenderResult<Self> {
        let program = ShaderProgram::new(device, ShaderSources::default(), color_format).await?;
        let buffers = GpuBuffers::upload(device, mesh);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::bytes_of(&SceneUniforms::new()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &program.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("scene_bind_group"),
        });

        let depth_view = create_depth_texture(device, width, height);
        let aspect = width as f32 / height.max(1) as f32;

        Ok(Self { program, buffers, uniform_buffer, uniform_bind_group, depth_view, aspect })
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn index_count(&self) -> u32 {
        self.buffers.index_count
    }

    /// Upload this frame's matrices and record the clear + indexed draw.
    pub fn encode(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        delta_time: f64,
    ) {
        let uniforms = SceneUniforms::for_frame(self.aspect, delta_time);
        let locations = self.program.uniform_locations;
        queue.write_buffer(
            &self.uniform_buffer,
            locations.projection_matrix,
            bytemuck::cast_slice(&uniforms.projection_matrix),
        );
        queue.write_buffer(
            &self.uniform_buffer,
            locations.model_view_matrix,
            bytemuck::cast_slice(&uniforms.model_view_matrix),
        );

        let [r, g, b, a] = CLEAR_COLOR;
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Cube Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_DEPTH),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.program.pipeline);
        render_pass.set_bind_group(SCENE_BIND_GROUP, &self.uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.buffers.vertex.slice(..));
        render_pass.set_index_buffer(self.buffers.indices.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.buffers.index_count, 0, 0..1);
    }
}
