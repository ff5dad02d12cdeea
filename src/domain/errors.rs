use strum::{Display, IntoStaticStr};
use wasm_bindgen::JsValue;

/// Programmable pipeline stage a shader source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Startup failures. Every variant is fatal to initialization.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Canvas, surface, adapter or device could not be obtained
    ContextUnavailable(String),
    ShaderCompilation { stage: ShaderStage, diagnostic: String },
    ProgramLink { diagnostic: String },
    Configuration(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::ContextUnavailable(msg) => {
                write!(f, "Graphics context unavailable: {}", msg)
            }
            RenderError::ShaderCompilation { stage, diagnostic } => {
                write!(f, "An error occurred compiling the {} shader: {}", stage, diagnostic)
            }
            RenderError::ProgramLink { diagnostic } => {
                write!(f, "Unable to initialize the shader program: {}", diagnostic)
            }
            RenderError::Configuration(msg) => write!(f, "Invalid scene configuration: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RenderError> for JsValue {
    fn from(error: RenderError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::Configuration(error.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
