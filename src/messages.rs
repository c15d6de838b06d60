// src/messages.rs
//
// Events the page can observe, and the side effects the reducer asks for.
//
use std::rc::Rc;

use crate::error::{AskError, UploadError};
use crate::intake::UploadSource;
use crate::models::UploadedDocument;
use crate::state::{ChatMessage, DocumentStatus, MessageId};

#[derive(Debug, Clone)]
pub enum Message {
    /// A drag entered/left the drop target.
    DragHover(bool),
    /// The first file of a drop or picker selection.
    FileSelected(Rc<dyn UploadSource>),
    UploadSucceeded(UploadedDocument),
    UploadFailed(UploadError),

    /// Raw (untrimmed) value of the chat input.
    SubmitQuestion(String),
    AnswerReceived {
        pending_id: MessageId,
        answer: String,
    },
    AskFailed {
        pending_id: MessageId,
        error: AskError,
    },
}

/// A single DOM mutation, applied by the view controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    SetDropAreaVisible(bool),
    SetDropHighlight(bool),
    SetLoaderVisible(bool),
    ShowDocumentStatus(DocumentStatus),
    /// Hide the upload section and reveal the chat section.
    EnterChatMode,
    AppendMessage(ChatMessage),
    RemoveMessage(MessageId),
    ClearInput,
    FocusInput,
    Alert(&'static str),
    Toast(String),
}

#[derive(Debug)]
pub enum Command {
    View(ViewOp),

    /// `POST /upload` with the file as multipart form data.
    UploadDocument(Rc<dyn UploadSource>),

    /// `POST /ask`; the answer replaces the placeholder `pending_id`.
    AskQuestion {
        query: String,
        pending_id: MessageId,
    },
}

impl From<ViewOp> for Command {
    fn from(op: ViewOp) -> Self {
        Command::View(op)
    }
}
