//! Small crate-wide convenience macros.

/// Log to the developer console in debug builds only.  Usable both as a
/// statement and as a `()` expression (e.g. a match arm).
///
/// ```rust,ignore
/// debug_log!("Upload finished: {}", filename);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::utils::console_log(&format!($($arg)*));
        }
    };
}
