use wasm_bindgen::prelude::*;

use crate::domain::config::SceneConfig;
use crate::domain::errors::RenderResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::scene::FrameStats;
use crate::infrastructure::rendering::{CubeRenderer, renderer::is_webgpu_supported};
use crate::presentation::animation_loop::{active_loop_stats, start_animation_loop};
use crate::{log_error, log_info};

/// Build the renderer for `config` and start animating it.
///
/// Initialization happens entirely before the first frame is requested; any
/// failure is logged and aborts startup.
pub async fn launch(config: SceneConfig) -> RenderResult<()> {
    get_logger().set_min_level(config.min_log_level());
    log_info!(
        LogComponent::Presentation("Launch"),
        "🚀 Launching cube on '{}' (center {:?}, size {})",
        config.canvas_id,
        config.cube_center,
        config.cube_size
    );

    match CubeRenderer::new(&config).await {
        Ok(renderer) => {
            start_animation_loop(renderer);
            Ok(())
        }
        Err(e) => {
            log_error!(LogComponent::Presentation("Launch"), "❌ Startup aborted: {}", e);
            Err(e)
        }
    }
}

/// Start the scene described by a JSON `SceneConfig`; missing fields use defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub async fn start_with_config(config_json: String) -> Result<(), JsValue> {
    let config = SceneConfig::from_json(&config_json).inspect_err(|e| {
        log_error!(LogComponent::Presentation("API"), "{}", e);
    })?;
    launch(config).await?;
    Ok(())
}

/// JSON summary of the renderer and its frame statistics
#[wasm_bindgen(js_name = performanceInfo)]
pub fn performance_info() -> String {
    performance_report(is_webgpu_supported(), active_loop_stats())
}

#[wasm_bindgen(js_name = isWebGpuSupported)]
pub fn webgpu_supported() -> bool {
    is_webgpu_supported()
}

pub fn performance_report(webgpu: bool, stats: Option<FrameStats>) -> String {
    let backend = if webgpu { "WebGPU" } else { "WebGL2" };
    let report = match stats {
        Some(stats) => serde_json::json!({
            "backend": backend,
            "status": "running",
            "frames": stats.frame_count,
            "last_delta": stats.last_delta,
            "avg_fps": stats.avg_fps,
        }),
        None => serde_json::json!({
            "backend": backend,
            "status": "idle",
        }),
    };
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_report_has_no_frame_stats() {
        let report: serde_json::Value =
            serde_json::from_str(&performance_report(true, None)).unwrap();
        assert_eq!(report["status"], "idle");
        assert_eq!(report["backend"], "WebGPU");
        assert!(report.get("avg_fps").is_none());
    }

    #[test]
    fn running_report_carries_stats() {
        let stats = FrameStats { frame_count: 12, last_delta: 0.02, avg_fps: 50.0 };
        let report: serde_json::Value =
            serde_json::from_str(&performance_report(false, Some(stats))).unwrap();
        assert_eq!(report["status"], "running");
        assert_eq!(report["backend"], "WebGL2");
        assert_eq!(report["frames"], 12);
        assert_eq!(report["avg_fps"], 50.0);
    }
}
