//! Error types shared by the DOM layer and the network layer.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::constants::{UPLOAD_ERROR_ALERT, UPLOAD_REJECTED_ALERT};

/// Failures while wiring or mutating the page.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElementType {
        id: &'static str,
        expected: &'static str,
    },
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(js_error_text(&value))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Outcome of a failed `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The server answered, but not with a usable document record.
    #[error("upload rejected with HTTP {status}")]
    Rejected { status: u16, reason: Option<String> },
    /// The request never completed or the body was not JSON.
    #[error("upload transport error: {0}")]
    Transport(String),
}

impl UploadError {
    pub fn alert_text(&self) -> &'static str {
        match self {
            UploadError::Rejected { .. } => UPLOAD_REJECTED_ALERT,
            UploadError::Transport(_) => UPLOAD_ERROR_ALERT,
        }
    }
}

impl From<JsValue> for UploadError {
    fn from(value: JsValue) -> Self {
        UploadError::Transport(js_error_text(&value))
    }
}

/// Any failure of `POST /ask`: transport, non-JSON body or a body without
/// an `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ask request failed: {0}")]
pub struct AskError(pub String);

impl From<JsValue> for AskError {
    fn from(value: JsValue) -> Self {
        AskError(js_error_text(&value))
    }
}

/// Best-effort text for a thrown JS value (`TypeError: Failed to fetch`).
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
