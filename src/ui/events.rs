//! Event handlers for the upload and chat sections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Event, EventTarget, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::error::UiError;
use crate::intake::handle_files;
use crate::messages::Message;
use crate::state::dispatch_global_message;
use crate::views::ViewController;

const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Entry point – call once after the view controller was built.
pub fn setup_ui_event_handlers(document: &Document, view: &ViewController) -> Result<(), UiError> {
    setup_drag_suppression(document, view)?;
    setup_drop_area_handlers(view)?;
    setup_file_picker_handler(view)?;
    setup_chat_handlers(view)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// File intake
// ---------------------------------------------------------------------------

/// Keep the browser from opening a file dropped anywhere on the page.
fn setup_drag_suppression(document: &Document, view: &ViewController) -> Result<(), UiError> {
    let body = document.body().ok_or(UiError::MissingElement("body"))?;
    let targets: [&EventTarget; 2] = [view.drop_area(), &body];

    for target in targets {
        for name in DRAG_EVENTS {
            let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
                e.prevent_default();
                e.stop_propagation();
            }));
            target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())?;
            cb.forget();
        }
    }
    Ok(())
}

/// <div id="drop-area">: highlight, drop and click-to-browse.
fn setup_drop_area_handlers(view: &ViewController) -> Result<(), UiError> {
    let drop_area = view.drop_area();

    for (name, hovering) in [("dragenter", true), ("dragover", true), ("dragleave", false)] {
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: DragEvent| {
            dispatch_global_message(Message::DragHover(hovering));
        }));
        drop_area.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let on_drop = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: DragEvent| {
        dispatch_global_message(Message::DragHover(false));
        handle_files(e.data_transfer().and_then(|dt| dt.files()));
    }));
    drop_area.add_event_listener_with_callback("drop", on_drop.as_ref().unchecked_ref())?;
    on_drop.forget();

    let file_input = view.file_input().clone();
    let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        file_input.click();
    }));
    drop_area.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}

/// <input type="file" id="fileElem">
fn setup_file_picker_handler(view: &ViewController) -> Result<(), UiError> {
    let input = view.file_input().clone();
    let target = input.clone();
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        handle_files(input.files());
        // Reset so choosing the same file again still fires `change`.
        input.set_value("");
    }));
    target.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

fn submit_from(input: &HtmlInputElement) {
    dispatch_global_message(Message::SubmitQuestion(input.value()));
}

/// Send button click and Enter in the input both submit.
fn setup_chat_handlers(view: &ViewController) -> Result<(), UiError> {
    let input = view.user_input().clone();
    let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        submit_from(&input);
    }));
    view.send_button()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let input = view.user_input().clone();
    let on_key = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit_from(&input);
        }
    }));
    view.user_input()
        .add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}
