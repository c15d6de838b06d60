use wasm_bindgen_futures::spawn_local;

use crate::messages::{Command, Message};
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;
use crate::utils::{console_error, console_warn};
use crate::views;

/// Perform one side effect requested by the reducer.  Network commands
/// complete by dispatching a follow-up message.
pub fn execute_command(cmd: Command) {
    match cmd {
        Command::View(op) => {
            if let Err(e) = views::apply(&op) {
                console_warn(&format!("Failed to apply {:?}: {}", op, e));
            }
        }
        Command::UploadDocument(file) => {
            spawn_local(async move {
                let msg = match ApiClient::upload_document(file.as_ref()).await {
                    Ok(doc) => {
                        debug_log!("Uploaded '{}'", doc.filename);
                        Message::UploadSucceeded(doc)
                    }
                    Err(e) => {
                        console_error(&format!("Error: {}", e));
                        Message::UploadFailed(e)
                    }
                };
                dispatch_global_message(msg);
            });
        }
        Command::AskQuestion { query, pending_id } => {
            spawn_local(async move {
                let msg = match ApiClient::ask(&query).await {
                    Ok(resp) => Message::AnswerReceived {
                        pending_id,
                        answer: resp.answer,
                    },
                    Err(e) => {
                        console_error(&format!("Error: {}", e));
                        Message::AskFailed { pending_id, error: e }
                    }
                };
                dispatch_global_message(msg);
            });
        }
    }
}
