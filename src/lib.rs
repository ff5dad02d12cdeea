use wasm_bindgen::prelude::*;

use crate::domain::config::SceneConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Install panic hook, logger and clock, then launch the stock scene
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = SceneConfig::default();
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.min_log_level()));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Rotating cube initializing");

    wasm_bindgen_futures::spawn_local(async move {
        // failures are already logged by `launch`
        let _ = presentation::wasm_api::launch(config).await;
    });
}
