//! Schema validation helpers – compiled into WASM.
//!
//! Used to flag backend contract drift in the console.  Whether a response
//! counts as success is still decided by the serde models.

use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    static ref UPLOAD_RESPONSE_SCHEMA: JSONSchema = compile(
        include_str!("schema/upload_response.json"),
        "upload response"
    );
    static ref ASK_RESPONSE_SCHEMA: JSONSchema =
        compile(include_str!("schema/ask_response.json"), "ask response");
}

fn compile(raw: &str, name: &str) -> JSONSchema {
    // The schemas are embedded at compile time; a broken one is a build bug.
    let parsed: Value = serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("{} schema must be valid JSON: {}", name, e));
    JSONSchema::compile(&parsed).unwrap_or_else(|e| panic!("invalid {} schema: {}", name, e))
}

/// Validate a `POST /upload` body.
pub fn validate_upload_response(value: &Value) -> bool {
    UPLOAD_RESPONSE_SCHEMA.is_valid(value)
}

/// Validate a `POST /ask` body.
pub fn validate_ask_response(value: &Value) -> bool {
    ASK_RESPONSE_SCHEMA.is_valid(value)
}
