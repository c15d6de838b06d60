//! File intake – turns a drop or a picker selection into at most one upload.
//!
//! Only the first file of a list is used; the rest are ignored.  The reducer
//! sees files through [`UploadSource`] so it never has to touch a real
//! `web_sys::File`.

use std::fmt;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{File, FileList, FormData};

use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Anything that can be sent as the `file` part of the upload form.
pub trait UploadSource: fmt::Debug {
    fn file_name(&self) -> String;

    fn append_to(&self, form: &FormData, field: &str) -> Result<(), JsValue>;
}

impl UploadSource for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn append_to(&self, form: &FormData, field: &str) -> Result<(), JsValue> {
        form.append_with_blob_and_filename(field, self, &self.name())
    }
}

/// First item of a selection, if there is one.
pub fn select_first<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}

/// Iterate a DOM `FileList` in order.
pub fn file_list_items(list: &FileList) -> impl Iterator<Item = File> + '_ {
    (0..list.length()).filter_map(move |idx| list.item(idx))
}

/// Shared entry point for drops and picker changes.  An empty or missing
/// list does nothing.
pub fn handle_files(list: Option<FileList>) {
    let first = list.as_ref().and_then(|l| select_first(file_list_items(l)));
    match first {
        Some(file) => {
            debug_log!("Selected '{}' for upload", file.name());
            dispatch_global_message(Message::FileSelected(Rc::new(file)));
        }
        None => debug_log!("File intake received no files"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_yields_nothing() {
        assert_eq!(select_first(Vec::<&str>::new()), None);
    }

    #[test]
    fn only_first_file_is_taken() {
        assert_eq!(select_first(vec!["report.pdf", "notes.pdf", "extra.pdf"]), Some("report.pdf"));
    }
}
