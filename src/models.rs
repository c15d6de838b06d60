//! Wire models for the two backend endpoints.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

/// Body returned by `POST /upload`.
///
/// A healthy server answers `{"filename": "...", "status": "Indexed successfully"}`.
/// A misconfigured one still answers 200 but with `{"error": "..."}` only,
/// so every field is optional here and [`UploadBody::into_document`] decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadBody {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A document the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub filename: String,
    pub status: Option<String>,
}

impl UploadBody {
    /// Turn a 2xx body into the accepted document, or a rejection when the
    /// server did not name the stored file (missing or blank `filename`).
    pub fn into_document(self, http_status: u16) -> Result<UploadedDocument, UploadError> {
        match self.filename {
            Some(filename) if !filename.trim().is_empty() => Ok(UploadedDocument {
                filename,
                status: self.status,
            }),
            _ => Err(UploadError::Rejected {
                status: http_status,
                reason: self.error,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// FastAPI error body (`{"detail": "..."}`); only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
