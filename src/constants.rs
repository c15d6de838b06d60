// Page regions provided by the HTML markup
pub const DROP_AREA_ID: &str = "drop-area";
pub const FILE_INPUT_ID: &str = "fileElem";
pub const UPLOAD_SECTION_ID: &str = "upload-section";
pub const CHAT_SECTION_ID: &str = "chat-section";
pub const UPLOAD_LOADER_ID: &str = "upload-loader";
pub const DOC_STATUS_ID: &str = "doc-status";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const USER_INPUT_ID: &str = "user-input";
pub const SEND_BUTTON_ID: &str = "send-btn";

// CSS classes toggled by the controller
pub const HIDDEN_CLASS: &str = "hidden";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const EMPTY_CLASS: &str = "empty";
pub const MESSAGE_CLASS: &str = "message";
pub const BUBBLE_CLASS: &str = "bubble";
pub const PENDING_CLASS: &str = "pending";
pub const PENDING_OPACITY: &str = "0.7";

/// Prefix for chat message element ids (`message-42`).
pub const MESSAGE_ID_PREFIX: &str = "message-";

// Backend endpoints (relative to the configured API base)
pub const UPLOAD_PATH: &str = "/upload";
pub const ASK_PATH: &str = "/ask";
pub const UPLOAD_FIELD_NAME: &str = "file";

// User-facing copy
pub const THINKING_TEXT: &str = "Thinking...";
pub const UPLOAD_REJECTED_ALERT: &str = "Upload failed. Please try again.";
pub const UPLOAD_ERROR_ALERT: &str = "An error occurred during upload.";
pub const ASK_ERROR_TEXT: &str = "Sorry, I encountered an error.";
pub const DOC_STATUS_ICON: &str = "📄";

/// Longest filename (in graphemes) shown in the document status badge.
pub const MAX_FILENAME_GRAPHEMES: usize = 48;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4000;
