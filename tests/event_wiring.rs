//! Browser tests that mount the whole page through `start()` and drive it
//! with real DOM events.  Requests never leave the page: `window.fetch` is
//! replaced by a stub that counts calls and never settles.
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use document_chat_frontend::intake::handle_files;
use document_chat_frontend::state::{AppState, Role, APP_STATE};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div id="upload-section">
  <div id="drop-area">Drop a PDF</div>
  <input type="file" id="fileElem">
  <div id="upload-loader" class="hidden"></div>
</div>
<div id="doc-status" class="empty"></div>
<div id="chat-section" class="hidden">
  <div id="chat-messages"></div>
  <input type="text" id="user-input">
  <button id="send-btn">Send</button>
</div>
"#;

const FETCH_CALLS: &str = "__fetchCalls";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn by_id<T: JsCast>(doc: &Document, id: &str) -> T {
    doc.get_element_by_id(id).unwrap().unchecked_into()
}

/// Fresh state, a counting `fetch` stub, the fixture, then the real entry
/// point.  The caller removes the returned container.
fn mount_app(doc: &Document) -> Element {
    APP_STATE.with(|state| *state.borrow_mut() = AppState::new());

    let window = web_sys::window().unwrap();
    Reflect::set(&window, &FETCH_CALLS.into(), &0.into()).unwrap();
    let stub = Function::new_no_args(&format!(
        "window.{0} += 1; return new Promise(function () {{}});",
        FETCH_CALLS
    ));
    Reflect::set(&window, &"fetch".into(), &stub).unwrap();

    let container = doc.create_element("div").unwrap();
    container.set_inner_html(FIXTURE);
    doc.body().unwrap().append_child(&container).unwrap();

    // The test page is fully parsed, so this mounts immediately.
    document_chat_frontend::start().unwrap();
    container
}

fn fetch_calls() -> f64 {
    let window = web_sys::window().unwrap();
    Reflect::get(&window, &FETCH_CALLS.into()).unwrap().as_f64().unwrap()
}

fn press(input: &HtmlInputElement, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keypress", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn conversation() -> Vec<(Role, String, bool)> {
    APP_STATE.with(|state| {
        state
            .borrow()
            .messages
            .iter()
            .map(|m| (m.role, m.text.clone(), m.pending))
            .collect()
    })
}

fn expected_exchange(question: &str) -> Vec<(Role, String, bool)> {
    vec![
        (Role::User, question.to_string(), false),
        (Role::Bot, "Thinking...".to_string(), true),
    ]
}

#[wasm_bindgen_test]
async fn enter_key_sends_question() {
    let doc = document();
    let container = mount_app(&doc);
    let input: HtmlInputElement = by_id(&doc, "user-input");

    input.set_value("What is the summary?");
    press(&input, "Enter");

    assert_eq!(conversation(), expected_exchange("What is the summary?"));
    assert_eq!(APP_STATE.with(|s| s.borrow().pending_questions), 1);
    assert_eq!(input.value(), "");

    let list: HtmlElement = by_id(&doc, "chat-messages");
    assert_eq!(list.child_element_count(), 2);
    assert_eq!(list.last_element_child().unwrap().text_content().unwrap(), "Thinking...");

    // Let the spawned request start.
    TimeoutFuture::new(0).await;
    assert_eq!(fetch_calls(), 1.0);

    container.remove();
}

#[wasm_bindgen_test]
async fn other_keys_do_not_send() {
    let doc = document();
    let container = mount_app(&doc);
    let input: HtmlInputElement = by_id(&doc, "user-input");

    input.set_value("What is the summary?");
    press(&input, "a");
    press(&input, "Shift");

    assert!(conversation().is_empty());
    assert_eq!(input.value(), "What is the summary?");
    TimeoutFuture::new(0).await;
    assert_eq!(fetch_calls(), 0.0);

    container.remove();
}

#[wasm_bindgen_test]
async fn send_button_click_sends_question() {
    let doc = document();
    let container = mount_app(&doc);
    let input: HtmlInputElement = by_id(&doc, "user-input");
    let send: HtmlElement = by_id(&doc, "send-btn");

    input.set_value("  Who wrote it?  ");
    send.click();
    assert_eq!(conversation(), expected_exchange("Who wrote it?"));

    // Blank input is ignored.
    input.set_value("   ");
    send.click();
    assert_eq!(conversation().len(), 2);

    TimeoutFuture::new(0).await;
    assert_eq!(fetch_calls(), 1.0);

    container.remove();
}

#[wasm_bindgen_test]
async fn empty_file_selection_issues_no_upload() {
    let doc = document();
    let container = mount_app(&doc);

    handle_files(None);

    let picker: HtmlInputElement = doc.create_element("input").unwrap().unchecked_into();
    picker.set_type("file");
    let empty = picker.files().unwrap();
    assert_eq!(empty.length(), 0);
    handle_files(Some(empty));

    // The page's own picker firing `change` with nothing chosen.
    let file_input: HtmlInputElement = by_id(&doc, "fileElem");
    file_input.dispatch_event(&Event::new("change").unwrap()).unwrap();

    assert!(!APP_STATE.with(|s| s.borrow().is_uploading()));
    let loader: HtmlElement = by_id(&doc, "upload-loader");
    assert!(loader.class_list().contains("hidden"));
    let drop_area: HtmlElement = by_id(&doc, "drop-area");
    assert_ne!(drop_area.style().get_property_value("display").unwrap(), "none");

    TimeoutFuture::new(0).await;
    assert_eq!(fetch_calls(), 0.0);

    container.remove();
}
