//! Compiles the two shader stages and links them into a render pipeline.
//!
//! Both steps run inside a wgpu validation error scope, so a bad source or a
//! stage mismatch surfaces as a [`RenderError`] instead of an uncaptured
//! device error. The diagnostic is logged before it is returned.

use crate::domain::errors::{RenderError, RenderResult, ShaderStage};
use crate::domain::logging::{LogComponent, LogLevel, get_logger};
use crate::infrastructure::rendering::gpu_structures::{
    ATTRIB_LOCATIONS, AttribLocations, DEPTH_FORMAT, SCENE_BIND_GROUP, UNIFORM_LOCATIONS,
    UniformLocations,
};
use crate::infrastructure::rendering::shaders::{
    FRAGMENT_ENTRY_POINT, FRAGMENT_SHADER_SOURCE, VERTEX_ENTRY_POINT, VERTEX_SHADER_SOURCE,
};
use crate::domain::scene::Vertex;
use crate::log_debug;

/// Source text of both stages
#[derive(Debug, Clone, Copy)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl Default for ShaderSources<'static> {
    fn default() -> Self {
        Self { vertex: VERTEX_SHADER_SOURCE, fragment: FRAGMENT_SHADER_SOURCE }
    }
}

/// Linked program plus the locations the renderer binds against
pub struct ShaderProgram {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub attrib_locations: AttribLocations,
    pub uniform_locations: UniformLocations,
    _vertex_module: wgpu::ShaderModule,
    _fragment_module: wgpu::ShaderModule,
}

impl ShaderProgram {
    /// Compile and link both stages for a surface of `color_format`
    pub async fn new(
        device: &wgpu::Device,
        sources: ShaderSources<'_>,
        color_format: wgpu::TextureFormat,
    ) -> RenderResult<Self> {
        let vertex = compile_shader(device, ShaderStage::Vertex, sources.vertex).await?;
        let fragment = compile_shader(device, ShaderStage::Fragment, sources.fragment).await?;
        link_program(device, vertex, fragment, color_format).await
    }
}

fn report(error: RenderError, metadata: &str) -> RenderError {
    get_logger().log_with_metadata(
        LogLevel::Error,
        LogComponent::Infrastructure("ShaderPipeline"),
        &error.to_string(),
        metadata,
    );
    error
}

fn compilation_errors(info: &wgpu::CompilationInfo) -> Option<String> {
    let errors: Vec<String> = info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
        .map(|m| match &m.location {
            Some(loc) => format!("{}:{} {}", loc.line_number, loc.line_position, m.message),
            None => m.message.clone(),
        })
        .collect();

    if errors.is_empty() { None } else { Some(errors.join("\n")) }
}

/// Compile one stage from WGSL source
pub async fn compile_shader(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> RenderResult<wgpu::ShaderModule> {
    let label: &'static str = stage.into();

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let scope_error = device.pop_error_scope().await;
    let info = module.get_compilation_info().await;

    let diagnostic = match (compilation_errors(&info), scope_error) {
        (Some(messages), _) => messages,
        (None, Some(error)) => error.to_string(),
        (None, None) => {
            log_debug!(LogComponent::Infrastructure("ShaderPipeline"), "{} shader compiled", stage);
            return Ok(module);
        }
    };

    Err(report(RenderError::ShaderCompilation { stage, diagnostic: diagnostic.clone() }, &diagnostic))
}

/// Link compiled stages into the cube's render pipeline
pub async fn link_program(
    device: &wgpu::Device,
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
) -> RenderResult<ShaderProgram> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bind_group_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Cube Pipeline Layout"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Cube Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &vertex,
            entry_point: Some(VERTEX_ENTRY_POINT),
            buffers: &[Vertex::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &fragment,
            entry_point: Some(FRAGMENT_ENTRY_POINT),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
        multiview: None,
        cache: None,
    });

    if let Some(error) = device.pop_error_scope().await {
        let diagnostic = error.to_string();
        return Err(report(RenderError::ProgramLink { diagnostic: diagnostic.clone() }, &diagnostic));
    }

    log_debug!(
        LogComponent::Infrastructure("ShaderPipeline"),
        "program linked (bind group {})",
        SCENE_BIND_GROUP
    );

    Ok(ShaderProgram {
        pipeline,
        bind_group_layout,
        attrib_locations: ATTRIB_LOCATIONS,
        uniform_locations: UNIFORM_LOCATIONS,
        _vertex_module: vertex,
        _fragment_module: fragment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sources_are_embedded() {
        let sources = ShaderSources::default();
        assert!(sources.vertex.contains("@vertex"));
        assert!(sources.vertex.contains(VERTEX_ENTRY_POINT));
        assert!(sources.fragment.contains("@fragment"));
        assert!(sources.fragment.contains(FRAGMENT_ENTRY_POINT));
    }
}
