/// WGSL vertex stage: positions go through projection * model-view, colors pass through.
pub const VERTEX_SHADER_SOURCE: &str = r#"
struct SceneUniforms {
    projection_matrix: mat4x4<f32>,
    model_view_matrix: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

struct VertexInput {
    @location(0) vertex_position: vec3<f32>,
    @location(1) vertex_color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = scene.projection_matrix * scene.model_view_matrix * vec4<f32>(in.vertex_position, 1.0);
    out.color = in.vertex_color;
    return out;
}
"#;

/// WGSL fragment stage: emits the interpolated color unchanged.
pub const FRAGMENT_SHADER_SOURCE: &str = r#"
@fragment
fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(color, 1.0);
}
"#;

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";
