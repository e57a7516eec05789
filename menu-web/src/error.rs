//! Error types for the menu page

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Main error type for menu loading and page wiring
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to fetch items: server responded with status {0}")]
    StatusError(u16),

    #[error("Invalid menu data: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Required element '{0}' not found")]
    MissingAnchor(String),

    #[error("Browser API unavailable: {0}")]
    Unavailable(&'static str),

    #[error("JavaScript error: {0}")]
    JsError(String),
}

impl From<JsValue> for MenuError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        MenuError::JsError(message)
    }
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;
