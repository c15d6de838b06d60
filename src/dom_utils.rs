//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! The page markup mixes two hiding conventions: the drop target and the
//! upload section use inline `display`, the loader and the chat section use
//! the `hidden` class.  Both are wrapped here.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::HIDDEN_CLASS;
use crate::error::UiError;

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) -> Result<(), UiError> {
    el.class_list().remove_1(HIDDEN_CLASS)?;
    Ok(())
}

/// Hide the element via the `hidden` class.
pub fn hide(el: &Element) -> Result<(), UiError> {
    el.class_list().add_1(HIDDEN_CLASS)?;
    Ok(())
}

/// Toggle inline `display` between `block` and `none`.
pub fn set_displayed(el: &HtmlElement, visible: bool) -> Result<(), UiError> {
    let value = if visible { "block" } else { "none" };
    el.style().set_property("display", value)?;
    Ok(())
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), UiError> {
    el.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Look up a fixed page region by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &'static str,
    expected: &'static str,
) -> Result<T, UiError> {
    document
        .get_element_by_id(id)
        .ok_or(UiError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| UiError::WrongElementType { id, expected })
}
