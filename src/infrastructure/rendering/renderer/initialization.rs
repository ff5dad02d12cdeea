use super::*;
use crate::log_debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Whether the browser exposes `navigator.gpu`. Without it wgpu falls back to WebGL2.
pub fn is_webgpu_supported() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window.navigator(), &"gpu".into()).unwrap_or(false))
        .unwrap_or(false)
}

fn find_canvas(canvas_id: &str) -> RenderResult<HtmlCanvasElement> {
    gloo::utils::document()
        .get_element_by_id(canvas_id)
        .ok_or_else(|| {
            RenderError::ContextUnavailable(format!("Canvas with id '{}' not found", canvas_id))
        })?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::ContextUnavailable(format!("Element '{}' is not a canvas", canvas_id)))
}

#[cfg(target_arch = "wasm32")]
fn create_canvas_surface(
    instance: &wgpu::Instance,
    canvas: HtmlCanvasElement,
) -> RenderResult<wgpu::Surface<'static>> {
    instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
        .map_err(|e| RenderError::ContextUnavailable(format!("Failed to create surface: {}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
fn create_canvas_surface(
    _instance: &wgpu::Instance,
    _canvas: HtmlCanvasElement,
) -> RenderResult<wgpu::Surface<'static>> {
    Err(RenderError::ContextUnavailable("canvas surfaces exist only on wasm32".to_string()))
}

impl CubeRenderer {
    /// Acquire the canvas context, compile the program and upload the cube.
    ///
    /// Any failure is fatal; nothing is retried.
    pub async fn new(scene_config: &SceneConfig) -> RenderResult<Self> {
        let canvas = find_canvas(&scene_config.canvas_id)?;
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        get_logger().info(
            LogComponent::Infrastructure("CubeRenderer"),
            &format!("🎯 Canvas '{}' found: {}x{}", scene_config.canvas_id, width, height),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = create_canvas_surface(&instance, canvas)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::ContextUnavailable(format!("Failed to find adapter: {}", e)))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| RenderError::ContextUnavailable(format!("Failed to create device: {}", e)))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| {
                RenderError::ContextUnavailable("Surface reports no supported formats".to_string())
            })?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log_debug!(
            LogComponent::Infrastructure("CubeRenderer"),
            "Surface config: {}x{}, format: {:?}, backend: {:?}",
            config.width,
            config.height,
            config.format,
            adapter.get_info().backend
        );

        let mesh = generate_box(scene_config.cube_center, scene_config.cube_size);
        let scene = CubeScene::new(&device, surface_format, &mesh, width, height).await?;

        get_logger().info(
            LogComponent::Infrastructure("CubeRenderer"),
            &format!("✅ Cube renderer ready ({} indices)", scene.index_count()),
        );

        Ok(Self {
            canvas_id: scene_config.canvas_id.clone(),
            surface,
            device,
            queue,
            config,
            scene,
        })
    }
}
