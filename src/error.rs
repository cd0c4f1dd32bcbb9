//! Structured error types for filmstrip.
//!
//! The scroll-focus engine itself never fails; these errors cover the edges
//! around it: configuration, DOM binding and the simulation CLI.

/// All errors that can occur outside the engine core.
#[derive(Debug, thiserror::Error)]
pub enum FilmstripError {
    /// A configuration value is out of its accepted range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Options passed from JavaScript could not be deserialized.
    #[error("Invalid options: {0}")]
    Options(String),

    /// A required DOM element was not found.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for ad-hoc messages.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilmstripError>;

impl From<String> for FilmstripError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for FilmstripError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<FilmstripError> for wasm_bindgen::JsValue {
    fn from(e: FilmstripError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for FilmstripError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Options(e.to_string())
    }
}
