//! The view controller: owns explicit references to every page region and
//! is the only code that mutates them.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::constants::*;
use crate::dom_utils::{element_by_id, hide, set_class, set_displayed, show};
use crate::error::UiError;
use crate::messages::ViewOp;
use crate::state::{ChatMessage, DocumentStatus, MessageId};
use crate::toast;
use crate::utils::{format_time, truncate_graphemes};

pub struct ViewController {
    document: Document,
    drop_area: HtmlElement,
    file_input: HtmlInputElement,
    upload_section: HtmlElement,
    chat_section: HtmlElement,
    upload_loader: HtmlElement,
    doc_status: HtmlElement,
    chat_messages: HtmlElement,
    user_input: HtmlInputElement,
    send_button: HtmlElement,
}

impl ViewController {
    /// Resolve all regions once.  Fails if the markup lacks any of them.
    pub fn from_document(document: &Document) -> Result<Self, UiError> {
        Ok(Self {
            document: document.clone(),
            drop_area: element_by_id(document, DROP_AREA_ID, "HtmlElement")?,
            file_input: element_by_id(document, FILE_INPUT_ID, "HtmlInputElement")?,
            upload_section: element_by_id(document, UPLOAD_SECTION_ID, "HtmlElement")?,
            chat_section: element_by_id(document, CHAT_SECTION_ID, "HtmlElement")?,
            upload_loader: element_by_id(document, UPLOAD_LOADER_ID, "HtmlElement")?,
            doc_status: element_by_id(document, DOC_STATUS_ID, "HtmlElement")?,
            chat_messages: element_by_id(document, CHAT_MESSAGES_ID, "HtmlElement")?,
            user_input: element_by_id(document, USER_INPUT_ID, "HtmlInputElement")?,
            send_button: element_by_id(document, SEND_BUTTON_ID, "HtmlElement")?,
        })
    }

    pub fn drop_area(&self) -> &HtmlElement {
        &self.drop_area
    }

    pub fn file_input(&self) -> &HtmlInputElement {
        &self.file_input
    }

    pub fn user_input(&self) -> &HtmlInputElement {
        &self.user_input
    }

    pub fn send_button(&self) -> &HtmlElement {
        &self.send_button
    }

    pub fn apply(&self, op: &ViewOp) -> Result<(), UiError> {
        match op {
            ViewOp::SetDropAreaVisible(visible) => set_displayed(&self.drop_area, *visible),
            ViewOp::SetDropHighlight(on) => set_class(&self.drop_area, HIGHLIGHT_CLASS, *on),
            ViewOp::SetLoaderVisible(true) => show(&self.upload_loader),
            ViewOp::SetLoaderVisible(false) => hide(&self.upload_loader),
            ViewOp::ShowDocumentStatus(doc) => self.render_document_status(doc),
            ViewOp::EnterChatMode => {
                set_displayed(&self.upload_section, false)?;
                show(&self.chat_section)
            }
            ViewOp::AppendMessage(message) => self.add_message(message).map(|_| ()),
            ViewOp::RemoveMessage(id) => {
                self.remove_message(*id);
                Ok(())
            }
            ViewOp::ClearInput => {
                self.user_input.set_value("");
                Ok(())
            }
            ViewOp::FocusInput => Ok(self.user_input.focus()?),
            ViewOp::Alert(text) => self.alert(text),
            ViewOp::Toast(text) => toast::success(&self.document, text),
        }
    }

    fn render_document_status(&self, doc: &DocumentStatus) -> Result<(), UiError> {
        let label = self.document.create_element("span")?;
        label.set_text_content(Some(&format!(
            "{} {}",
            DOC_STATUS_ICON,
            truncate_graphemes(&doc.filename, MAX_FILENAME_GRAPHEMES)
        )));
        label.set_attribute("title", &doc.filename)?;

        self.doc_status.set_text_content(None);
        self.doc_status.append_child(&label)?;
        self.doc_status.class_list().remove_1(EMPTY_CLASS)?;
        Ok(())
    }

    /// Render a message bubble at the end of the list and scroll to it.
    pub fn add_message(&self, message: &ChatMessage) -> Result<MessageId, UiError> {
        let row = self.document.create_element("div")?;
        row.set_id(&message.id.dom_id());
        row.class_list().add_2(MESSAGE_CLASS, message.role.css_class())?;

        let bubble: HtmlElement = self.document.create_element("div")?.unchecked_into();
        bubble.set_class_name(BUBBLE_CLASS);
        // textContent, never innerHTML: answers are untrusted text.
        bubble.set_text_content(Some(&message.text));
        bubble.set_title(&format_time(&message.created_at));

        if message.pending {
            row.class_list().add_1(PENDING_CLASS)?;
            bubble.style().set_property("opacity", PENDING_OPACITY)?;
        }

        row.append_child(&bubble)?;
        self.chat_messages.append_child(&row)?;
        self.scroll_to_bottom();
        Ok(message.id)
    }

    /// Remove a rendered message.  Returns `false` when it is not on the page.
    pub fn remove_message(&self, id: MessageId) -> bool {
        match self.find_message(id) {
            Some(el) => {
                el.remove();
                true
            }
            None => false,
        }
    }

    fn find_message(&self, id: MessageId) -> Option<Element> {
        self.document.get_element_by_id(&id.dom_id())
    }

    fn scroll_to_bottom(&self) {
        self.chat_messages.set_scroll_top(self.chat_messages.scroll_height());
    }

    fn alert(&self, text: &str) -> Result<(), UiError> {
        let window = self.document.default_view().ok_or(UiError::NoWindow)?;
        window.alert_with_message(text)?;
        Ok(())
    }
}

thread_local! {
    static VIEW: RefCell<Option<ViewController>> = RefCell::new(None);
}

/// Make `view` the target of all subsequent view commands.
pub fn install(view: ViewController) {
    VIEW.with(|cell| *cell.borrow_mut() = Some(view));
}

/// Apply a view command to the installed controller.  Before `install` the
/// command is dropped with a warning.
pub fn apply(op: &ViewOp) -> Result<(), UiError> {
    VIEW.with(|cell| match cell.borrow().as_ref() {
        Some(view) => view.apply(op),
        None => {
            crate::utils::console_warn(&format!("View not mounted; dropping {:?}", op));
            Ok(())
        }
    })
}
