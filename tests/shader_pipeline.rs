#![cfg(not(target_arch = "wasm32"))]
//! Needs a native adapter; every test returns early when none is available.

use rotating_cube_wasm::domain::errors::{RenderError, ShaderStage};
use rotating_cube_wasm::domain::logging::{LogLevel, MemoryLogger, init_logger};
use rotating_cube_wasm::infrastructure::rendering::shaders::{
    FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE,
};
use rotating_cube_wasm::infrastructure::rendering::{ShaderProgram, ShaderSources};
use std::sync::OnceLock;

const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn captured_logs() -> &'static MemoryLogger {
    static LOGS: OnceLock<MemoryLogger> = OnceLock::new();
    LOGS.get_or_init(|| {
        let logger = MemoryLogger::new();
        init_logger(Box::new(logger.clone()));
        logger
    })
}

fn test_device() -> Option<wgpu::Device> {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance.request_adapter(&wgpu::RequestAdapterOptions::default()).await.ok()?;
        let descriptor =
            wgpu::DeviceDescriptor { required_limits: adapter.limits(), ..Default::default() };
        let (device, _queue) = adapter.request_device(&descriptor).await.ok()?;
        Some(device)
    })
}

fn build(device: &wgpu::Device, vertex: &str, fragment: &str) -> Result<ShaderProgram, RenderError> {
    pollster::block_on(ShaderProgram::new(device, ShaderSources { vertex, fragment }, COLOR_FORMAT))
}

fn logged_error_containing(needle: &str) -> bool {
    captured_logs()
        .entries_at(LogLevel::Error)
        .iter()
        .any(|entry| entry.message.contains(needle) && entry.metadata.is_some())
}

#[test]
fn embedded_sources_link() {
    captured_logs();
    let Some(device) = test_device() else {
        eprintln!("Skipping test: no GPU adapter");
        return;
    };
    let program = build(&device, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE);
    let program = program.expect("stock shaders must compile and link");
    assert_eq!(program.attrib_locations.vertex_position, 0);
    assert_eq!(program.attrib_locations.vertex_color, 1);
    assert_eq!(program.uniform_locations.model_view_matrix, 64);
}

#[test]
fn malformed_vertex_source_is_rejected_and_logged() {
    captured_logs();
    let Some(device) = test_device() else {
        eprintln!("Skipping test: no GPU adapter");
        return;
    };
    let broken = "@vertex fn vs_main( -> @builtin(position) vec4<f32> { return; }";
    match build(&device, broken, FRAGMENT_SHADER_SOURCE) {
        Err(RenderError::ShaderCompilation { stage, diagnostic }) => {
            assert_eq!(stage, ShaderStage::Vertex);
            assert!(!diagnostic.is_empty());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed vertex shader compiled"),
    }
    assert!(logged_error_containing("vertex shader"));
}

#[test]
fn malformed_fragment_source_is_rejected_and_logged() {
    captured_logs();
    let Some(device) = test_device() else {
        eprintln!("Skipping test: no GPU adapter");
        return;
    };
    let broken = "@fragment fn fs_main() -> @location(0) vec4<f32> { return colr; }";
    match build(&device, VERTEX_SHADER_SOURCE, broken) {
        Err(RenderError::ShaderCompilation { stage, .. }) => assert_eq!(stage, ShaderStage::Fragment),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed fragment shader compiled"),
    }
    assert!(logged_error_containing("fragment shader"));
}

#[test]
fn mismatched_stages_fail_to_link() {
    captured_logs();
    let Some(device) = test_device() else {
        eprintln!("Skipping test: no GPU adapter");
        return;
    };
    // reads an inter-stage location the vertex stage never writes
    let fragment = r#"
@fragment
fn fs_main(@location(3) tint: vec4<f32>) -> @location(0) vec4<f32> {
    return tint;
}
"#;
    match build(&device, VERTEX_SHADER_SOURCE, fragment) {
        Err(RenderError::ProgramLink { diagnostic }) => assert!(!diagnostic.is_empty()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("mismatched stages linked"),
    }
    assert!(logged_error_containing("Unable to initialize the shader program"));
}
