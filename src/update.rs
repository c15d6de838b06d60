// src/update.rs
//
// The page reducer.  Mutates `AppState` and returns the DOM/network side
// effects to run; it never touches the DOM itself.
//
use std::rc::Rc;

use crate::constants::{ASK_ERROR_TEXT, THINKING_TEXT};
use crate::error::UploadError;
use crate::intake::UploadSource;
use crate::messages::{Command, Message, ViewOp};
use crate::models::UploadedDocument;
use crate::state::{AppState, DocumentStatus, MessageId, PageMode, Role, UploadPhase};
use crate::utils::console_warn;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands: Vec<Command> = Vec::new();

    match msg {
        Message::DragHover(active) => {
            if state.drop_highlighted != active {
                state.drop_highlighted = active;
                commands.push(ViewOp::SetDropHighlight(active).into());
            }
        }
        Message::FileSelected(file) => begin_upload(state, file, &mut commands),
        Message::UploadSucceeded(doc) => finish_upload_ok(state, doc, &mut commands),
        Message::UploadFailed(err) => finish_upload_err(state, err, &mut commands),
        Message::SubmitQuestion(raw) => submit_question(state, &raw, &mut commands),
        Message::AnswerReceived { pending_id, answer } => {
            settle_question(state, pending_id, answer, &mut commands);
        }
        Message::AskFailed { pending_id, error } => {
            debug_log!("Ask {} failed: {}", pending_id, error);
            settle_question(state, pending_id, ASK_ERROR_TEXT.to_string(), &mut commands);
        }
    }

    commands
}

fn begin_upload(state: &mut AppState, file: Rc<dyn UploadSource>, commands: &mut Vec<Command>) {
    if state.mode == PageMode::Chat {
        console_warn("Ignoring file selection: a document is already loaded");
        return;
    }

    state.upload_phase = UploadPhase::Uploading {
        filename: file.file_name(),
    };
    commands.push(ViewOp::SetDropAreaVisible(false).into());
    commands.push(ViewOp::SetLoaderVisible(true).into());
    commands.push(Command::UploadDocument(file));
}

fn finish_upload_ok(state: &mut AppState, doc: UploadedDocument, commands: &mut Vec<Command>) {
    // An overlapping upload may land after the page already switched; the
    // first document stays.
    if state.mode == PageMode::Upload {
        let status = DocumentStatus {
            filename: doc.filename,
            server_status: doc.status,
        };
        state.document = Some(status.clone());
        state.mode = PageMode::Chat;

        commands.push(ViewOp::ShowDocumentStatus(status.clone()).into());
        commands.push(ViewOp::EnterChatMode.into());
        commands.push(ViewOp::FocusInput.into());
        if let Some(text) = status.server_status {
            commands.push(ViewOp::Toast(text).into());
        }
    }
    end_upload(state, commands);
}

fn finish_upload_err(state: &mut AppState, err: UploadError, commands: &mut Vec<Command>) {
    commands.push(ViewOp::Alert(err.alert_text()).into());
    if state.mode == PageMode::Upload {
        commands.push(ViewOp::SetDropAreaVisible(true).into());
    }
    end_upload(state, commands);
}

/// Runs on every upload exit path.
fn end_upload(state: &mut AppState, commands: &mut Vec<Command>) {
    if let UploadPhase::Uploading { filename } = std::mem::take(&mut state.upload_phase) {
        debug_log!("Upload of '{}' settled", filename);
    }
    commands.push(ViewOp::SetLoaderVisible(false).into());
}

fn submit_question(state: &mut AppState, raw: &str, commands: &mut Vec<Command>) {
    let text = raw.trim();
    if text.is_empty() {
        return;
    }

    let user = state.push_message(Role::User, text, false);
    commands.push(ViewOp::AppendMessage(user).into());
    commands.push(ViewOp::ClearInput.into());

    let placeholder = state.push_message(Role::Bot, THINKING_TEXT, true);
    let pending_id = placeholder.id;
    commands.push(ViewOp::AppendMessage(placeholder).into());

    state.pending_questions += 1;
    commands.push(Command::AskQuestion {
        query: text.to_string(),
        pending_id,
    });
}

/// Swap a pending placeholder for the final bot bubble.
fn settle_question(state: &mut AppState, pending_id: MessageId, text: String, commands: &mut Vec<Command>) {
    if !state.remove_message(pending_id) {
        console_warn(&format!("Placeholder {} was already gone", pending_id));
    }
    state.pending_questions = state.pending_questions.saturating_sub(1);
    debug_log!("Ask {} settled, {} still pending", pending_id, state.pending_questions);
    commands.push(ViewOp::RemoveMessage(pending_id).into());

    let reply = state.push_message(Role::Bot, text, false);
    commands.push(ViewOp::AppendMessage(reply).into());
}
