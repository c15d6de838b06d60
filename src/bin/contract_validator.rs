//! Fast contract validation binary.
//!
//! Checks that the request structs serialize to exactly what the backend
//! expects and that sample backend responses pass the embedded schemas and
//! decode into the frontend models.

use std::process;

use document_chat_frontend::models::{AskRequest, AskResponse, UploadBody};
use document_chat_frontend::schema_validation::{validate_ask_response, validate_upload_response};
use serde_json::{json, Value};

fn main() {
    println!("🔍 Running contract validation checks...");

    let checks: [(&str, fn() -> Result<(), String>); 3] = [
        ("AskRequest", check_ask_request),
        ("Upload responses", check_upload_responses),
        ("Ask responses", check_ask_responses),
    ];

    let mut failed = false;
    for (name, check) in checks {
        match check() {
            Ok(()) => println!("  ✅ {}", name),
            Err(e) => {
                println!("  ❌ {}: {}", name, e);
                failed = true;
            }
        }
    }

    if failed {
        println!("❌ Contract validation failed");
        process::exit(1);
    }
    println!("✅ All contract validation checks passed");
}

fn check_ask_request() -> Result<(), String> {
    let value = serde_json::to_value(AskRequest {
        query: "What is the summary?".to_string(),
    })
    .map_err(|e| format!("failed to serialize: {}", e))?;

    let obj = value.as_object().ok_or("not a JSON object")?;
    if obj.len() != 1 {
        return Err(format!("expected only 'query', got {:?}", obj.keys().collect::<Vec<_>>()));
    }
    match obj.get("query") {
        Some(Value::String(_)) => Ok(()),
        _ => Err("missing or invalid 'query' field".to_string()),
    }
}

fn check_upload_responses() -> Result<(), String> {
    let ok = json!({"filename": "report.pdf", "status": "Indexed successfully"});
    if !validate_upload_response(&ok) {
        return Err("success body rejected by schema".into());
    }
    let body: UploadBody = serde_json::from_value(ok).map_err(|e| e.to_string())?;
    body.into_document(200).map_err(|e| e.to_string())?;

    let misconfigured = json!({"error": "Server missing API Key."});
    let body: UploadBody = serde_json::from_value(misconfigured).map_err(|e| e.to_string())?;
    if body.into_document(200).is_ok() {
        return Err("error body was accepted as a document".into());
    }

    let unnamed: UploadBody = serde_json::from_value(json!({"filename": ""})).map_err(|e| e.to_string())?;
    if validate_upload_response(&json!({"filename": ""})) || unnamed.into_document(200).is_ok() {
        return Err("empty filename was accepted".into());
    }
    Ok(())
}

fn check_ask_responses() -> Result<(), String> {
    let ok = json!({"answer": "It's a quarterly report."});
    if !validate_ask_response(&ok) {
        return Err("answer body rejected by schema".into());
    }
    serde_json::from_value::<AskResponse>(ok).map_err(|e| e.to_string())?;

    let detail = json!({"detail": "No document indexed. Please upload a PDF first."});
    if serde_json::from_value::<AskResponse>(detail).is_ok() {
        return Err("error detail decoded as an answer".into());
    }
    Ok(())
}
