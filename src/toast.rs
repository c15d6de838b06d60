//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! disappear after a few seconds.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::constants::TOAST_DURATION_MS;
use crate::error::UiError;

/// Show a green confirmation toast.
pub fn success(document: &Document, message: &str) -> Result<(), UiError> {
    ensure_styles(document)?;
    let root = ensure_root(document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name("toast");
    toast.class_list().add_1("toast-success")?;
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(TOAST_DURATION_MS, move || toast.remove()).forget();
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, UiError> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or(UiError::MissingElement("body"))?
        .append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), UiError> {
    if document.get_element_by_id("toast-styles").is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or(UiError::MissingElement("body"))?
            .append_child(&style)?,
    };
    Ok(())
}
