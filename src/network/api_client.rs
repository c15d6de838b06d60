use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::config::api_url;
use crate::constants::{ASK_PATH, UPLOAD_FIELD_NAME, UPLOAD_PATH};
use crate::error::{AskError, UploadError};
use crate::intake::UploadSource;
use crate::models::{AskRequest, AskResponse, ErrorDetail, UploadBody, UploadedDocument};
use crate::schema_validation::{validate_ask_response, validate_upload_response};
use crate::utils::console_warn;

// REST client for the two document-chat endpoints
pub struct ApiClient;

impl ApiClient {
    /// `POST /upload` with the file as multipart form data.
    ///
    /// Any non-2xx status is a rejection.  A 2xx body without `filename` is
    /// a rejection too (see [`UploadBody::into_document`]).
    pub async fn upload_document(file: &dyn UploadSource) -> Result<UploadedDocument, UploadError> {
        let form = FormData::new()?;
        file.append_to(&form, UPLOAD_FIELD_NAME)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        // The browser sets the multipart boundary; no Content-Type here.
        opts.set_body(&form);

        let resp = Self::send(&api_url(UPLOAD_PATH), &opts).await?;
        let status = resp.status();

        if !resp.ok() {
            let reason = Self::read_json(&resp)
                .await
                .ok()
                .and_then(|v| serde_json::from_value::<ErrorDetail>(v).ok())
                .map(|e| e.detail);
            return Err(UploadError::Rejected { status, reason });
        }

        let body = Self::read_json(&resp).await?;
        if !validate_upload_response(&body) {
            console_warn(&format!("Upload response does not match contract: {}", body));
        }
        let body: UploadBody = decode(body).map_err(UploadError::Transport)?;

        let result = body.into_document(status);
        if let Err(UploadError::Rejected { reason: Some(reason), .. }) = &result {
            console_warn(&format!("Server refused document: {}", reason));
        }
        result
    }

    /// `POST /ask` with `{"query": ...}`.
    ///
    /// The status code is deliberately not checked: any body that decodes
    /// into an [`AskResponse`] is an answer, anything else is an error.
    pub async fn ask(query: &str) -> Result<AskResponse, AskError> {
        let payload = serde_json::to_string(&AskRequest {
            query: query.to_string(),
        })
        .map_err(|e| AskError(format!("Failed to encode question: {}", e)))?;

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/json")?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&payload));

        let resp = Self::send(&api_url(ASK_PATH), &opts).await?;
        if !resp.ok() {
            debug_log!("/ask answered HTTP {} {}", resp.status(), resp.status_text());
        }

        let body = Self::read_json(&resp).await?;
        if !validate_ask_response(&body) {
            console_warn(&format!("Ask response does not match contract: {}", body));
        }
        decode(body).map_err(AskError)
    }

    // Helper function to issue a fetch and wait for the response headers
    async fn send(url: &str, opts: &RequestInit) -> Result<Response, JsValue> {
        let request = Request::new_with_str_and_init(url, opts)?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        resp_value.dyn_into::<Response>()
    }

    async fn read_json(resp: &Response) -> Result<Value, JsValue> {
        let json = JsFuture::from(resp.json()?).await?;
        serde_wasm_bindgen::from_value(json)
            .map_err(|e| JsValue::from_str(&format!("Response is not JSON: {}", e)))
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("Unexpected response body: {}", e))
}
