use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[macro_use]
pub mod macros;
pub mod command_executors;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod intake;
pub mod messages;
pub mod models;
pub mod network;
pub mod schema_validation;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update;
pub mod utils;
pub mod views;


pub use network::config::init_api_config_js;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    network::config::init_api_config();

    let window = web_sys::window().ok_or(error::UiError::NoWindow)?;
    let document = window.document().ok_or(error::UiError::NoDocument)?;

    // The page markup must be parsed before the regions can be looked up.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount(&doc) {
                utils::console_error(&format!("Failed to mount document chat UI: {}", e));
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    mount(&document)?;
    Ok(())
}

/// Resolve every page region, attach the event handlers and install the
/// view controller used by the command executor.
fn mount(document: &Document) -> Result<(), error::UiError> {
    let view = views::ViewController::from_document(document)?;
    ui::events::setup_ui_event_handlers(document, &view)?;
    views::install(view);

    debug_log!(
        "Document chat UI mounted (api base: '{}')",
        network::config::api_url("")
    );
    Ok(())
}
