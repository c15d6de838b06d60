//! Browser tests for the REST client with `window.fetch` replaced by a
//! canned response.
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use document_chat_frontend::error::UploadError;
use document_chat_frontend::intake::UploadSource;
use document_chat_frontend::network::ApiClient;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{FormData, Request};

wasm_bindgen_test_configure!(run_in_browser);

const LAST_REQUEST: &str = "__lastFetchRequest";

/// Swaps `window.fetch` for a stub and puts the real one back on drop.
/// The stub keeps the request it received under `window.__lastFetchRequest`.
struct FetchStub {
    original: JsValue,
}

impl FetchStub {
    fn install(body_js: &str) -> Self {
        let window = web_sys::window().unwrap();
        let original = Reflect::get(&window, &"fetch".into()).unwrap();
        let stub = Function::new_with_args(
            "request",
            &format!("window.{} = request; {}", LAST_REQUEST, body_js),
        );
        Reflect::set(&window, &"fetch".into(), &stub).unwrap();
        FetchStub { original }
    }

    fn respond(status: u16, content_type: &str, body: &str) -> Self {
        Self::install(&format!(
            "return Promise.resolve(new Response({}, {{ status: {}, headers: {{ 'Content-Type': {} }} }}));",
            serde_json::to_string(body).unwrap(),
            status,
            serde_json::to_string(content_type).unwrap(),
        ))
    }

    fn fail(message: &str) -> Self {
        Self::install(&format!(
            "return Promise.reject(new TypeError({}));",
            serde_json::to_string(message).unwrap()
        ))
    }

    fn last_request(&self) -> Request {
        let window = web_sys::window().unwrap();
        Reflect::get(&window, &LAST_REQUEST.into()).unwrap().unchecked_into()
    }
}

impl Drop for FetchStub {
    fn drop(&mut self) {
        let window = web_sys::window().unwrap();
        Reflect::set(&window, &"fetch".into(), &self.original).unwrap();
        Reflect::delete_property(&window, &LAST_REQUEST.into()).unwrap();
    }
}

#[derive(Debug)]
struct PdfBytes(&'static str);

impl UploadSource for PdfBytes {
    fn file_name(&self) -> String {
        self.0.to_string()
    }

    fn append_to(&self, form: &FormData, field: &str) -> Result<(), JsValue> {
        form.append_with_str(field, "%PDF-1.4")
    }
}

// ---------------------------------------------------------------------------
// POST /upload
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn upload_success_returns_document() {
    let stub = FetchStub::respond(
        200,
        "application/json",
        r#"{"filename":"report.pdf","status":"Indexed successfully"}"#,
    );

    let doc = ApiClient::upload_document(&PdfBytes("report.pdf")).await.unwrap();
    assert_eq!(doc.filename, "report.pdf");
    assert_eq!(doc.status.as_deref(), Some("Indexed successfully"));

    let request = stub.last_request();
    assert_eq!(request.method(), "POST");
    assert!(request.url().ends_with("/upload"), "{}", request.url());
}

#[wasm_bindgen_test]
async fn upload_http_error_is_rejected_with_detail() {
    let _stub = FetchStub::respond(
        500,
        "application/json",
        r#"{"detail":"Error processing PDF: file is encrypted"}"#,
    );

    match ApiClient::upload_document(&PdfBytes("locked.pdf")).await {
        Err(UploadError::Rejected { status, reason }) => {
            assert_eq!(status, 500);
            assert!(reason.unwrap().contains("encrypted"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn upload_http_error_without_json_is_still_rejected() {
    let _stub = FetchStub::respond(413, "text/plain", "Request Entity Too Large");

    let result = ApiClient::upload_document(&PdfBytes("huge.pdf")).await;
    assert_eq!(result, Err(UploadError::Rejected { status: 413, reason: None }));
}

#[wasm_bindgen_test]
async fn upload_non_json_success_is_transport_error() {
    let _stub = FetchStub::respond(200, "text/html", "<html><body>proxy page</body></html>");

    let result = ApiClient::upload_document(&PdfBytes("report.pdf")).await;
    assert!(matches!(result, Err(UploadError::Transport(_))), "{:?}", result);
}

#[wasm_bindgen_test]
async fn upload_error_body_on_success_status_is_rejected() {
    let _stub = FetchStub::respond(200, "application/json", r#"{"error":"Server missing API Key."}"#);

    match ApiClient::upload_document(&PdfBytes("report.pdf")).await {
        Err(UploadError::Rejected { status, reason }) => {
            assert_eq!(status, 200);
            assert_eq!(reason.as_deref(), Some("Server missing API Key."));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[wasm_bindgen_test]
async fn upload_network_failure_is_transport_error() {
    let _stub = FetchStub::fail("Failed to fetch");

    let result = ApiClient::upload_document(&PdfBytes("report.pdf")).await;
    assert_eq!(result, Err(UploadError::Transport("Failed to fetch".into())));
}

// ---------------------------------------------------------------------------
// POST /ask
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn ask_sends_query_json_and_returns_answer() {
    let stub = FetchStub::respond(200, "application/json", r#"{"answer":"It's a quarterly report."}"#);

    let answer = ApiClient::ask("What is the summary?").await.unwrap();
    assert_eq!(answer.answer, "It's a quarterly report.");

    let request = stub.last_request();
    assert_eq!(request.method(), "POST");
    assert!(request.url().ends_with("/ask"), "{}", request.url());
    assert_eq!(
        request.headers().get("Content-Type").unwrap().as_deref(),
        Some("application/json")
    );
    let sent = JsFuture::from(request.text().unwrap()).await.unwrap();
    assert_eq!(sent.as_string().unwrap(), r#"{"query":"What is the summary?"}"#);
}

#[wasm_bindgen_test]
async fn ask_answer_on_error_status_still_counts() {
    let _stub = FetchStub::respond(400, "application/json", r#"{"answer":"Partial answer."}"#);

    let answer = ApiClient::ask("hello").await.unwrap();
    assert_eq!(answer.answer, "Partial answer.");
}

#[wasm_bindgen_test]
async fn ask_detail_body_is_error() {
    let _stub = FetchStub::respond(
        400,
        "application/json",
        r#"{"detail":"No document indexed. Please upload a PDF first."}"#,
    );

    let err = ApiClient::ask("hello").await.unwrap_err();
    assert!(err.0.contains("answer"), "{}", err);
}

#[wasm_bindgen_test]
async fn ask_network_failure_is_error() {
    let _stub = FetchStub::fail("Failed to fetch");

    let err = ApiClient::ask("hello").await.unwrap_err();
    assert_eq!(err.0, "Failed to fetch");
}
