//! Error types for page behavior.
//!
//! Nothing here is ever shown to the visitor. Browser glue logs these and
//! skips the affected feature.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid skill level {level:?} for {name}: expected a percentage like \"90%\"")]
    InvalidSkillLevel { name: String, level: String },
    #[error("unknown project filter: {0}")]
    UnknownFilter(String),
    #[error("browser call failed: {0}")]
    Browser(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for BehaviorError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        BehaviorError::Browser(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, BehaviorError>;
