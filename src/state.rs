use std::cell::RefCell;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::command_executors::execute_command;
use crate::constants::MESSAGE_ID_PREFIX;
use crate::messages::{Command, Message};
use crate::update::update;

/// Which half of the page is active.  Only ever moves Upload -> Chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Upload,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading { filename: String },
}

/// The document shown in the status badge once an upload succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStatus {
    pub filename: String,
    pub server_status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    pub fn value(self) -> u64 {
        self.0
    }

    /// Id of the DOM element rendering this message.
    pub fn dom_id(self) -> String {
        format!("{}{}", MESSAGE_ID_PREFIX, self.value())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Per-session id source.  Ids are never reused, so two placeholders that
/// are pending at the same time cannot collide.
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    next: u64,
}

impl MessageIdGenerator {
    pub fn next_id(&mut self) -> MessageId {
        self.next += 1;
        MessageId(self.next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub pending: bool,
    pub created_at: DateTime<Utc>,
}

// Store global application state
#[derive(Debug, Default)]
pub struct AppState {
    pub mode: PageMode,
    pub document: Option<DocumentStatus>,
    pub upload_phase: UploadPhase,
    pub drop_highlighted: bool,
    /// Rendered conversation in creation order.
    pub messages: Vec<ChatMessage>,
    /// Asks sent but not yet answered.
    pub pending_questions: usize,
    ids: MessageIdGenerator,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    /// Append a message and return a copy for rendering.
    pub fn push_message(&mut self, role: Role, text: impl Into<String>, pending: bool) -> ChatMessage {
        let message = ChatMessage {
            id: self.ids.next_id(),
            role,
            text: text.into(),
            pending,
            created_at: Utc::now(),
        };
        self.messages.push(message.clone());
        message
    }

    /// Remove a message by id.  Unknown ids are ignored.
    pub fn remove_message(&mut self, id: MessageId) -> bool {
        match self.messages.iter().position(|m| m.id == id) {
            Some(idx) => {
                self.messages.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.upload_phase, UploadPhase::Uploading { .. })
    }
}

thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run a message through the reducer, then execute the resulting commands
/// once the state borrow is released.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        execute_command(cmd);
    }
}
