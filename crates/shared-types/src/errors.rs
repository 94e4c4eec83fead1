//! Common error types used across all bar chart crates

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Base error type for all bar chart operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ChartError {
    // Data-related errors
    #[error("Data fetch failed: {message}")]
    DataFetch { message: String },

    #[error("HTTP error! status: {status}")]
    Network { status: u16 },

    #[error("Request timeout after {duration_ms}ms")]
    Timeout { duration_ms: u32 },

    #[error("Data parse error: {message}")]
    DataParse {
        message: String,
        offset: Option<usize>,
    },

    #[error("Invalid data format: {expected} but got {actual}")]
    InvalidFormat { expected: String, actual: String },

    #[error("Dataset '{name}' contains no data points")]
    EmptyDataset { name: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // Browser errors
    #[error("DOM error: {message}")]
    Dom { message: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for bar chart operations
pub type ChartResult<T> = Result<T, ChartError>;

impl ChartError {
    pub fn dom(message: impl Into<String>) -> Self {
        ChartError::Dom {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::DataParse {
            message: err.to_string(),
            offset: Some(err.line()),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for ChartError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ChartError::DataParse {
            message: err.to_string(),
            offset: None,
        }
    }
}

impl From<chrono::ParseError> for ChartError {
    fn from(err: chrono::ParseError) -> Self {
        ChartError::InvalidFormat {
            expected: "date as YYYY-MM-DD or RFC 3339".to_string(),
            actual: err.to_string(),
        }
    }
}

impl From<JsValue> for ChartError {
    fn from(err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        ChartError::JsInterop { message }
    }
}

impl From<ChartError> for JsValue {
    fn from(err: ChartError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
