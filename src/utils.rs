//! Utility helpers shared across the WASM frontend.

use chrono::{DateTime, Utc};
use unicode_segmentation::UnicodeSegmentation;

// Console logging.  The reducer also runs in native unit tests, where there
// is no browser console, so those builds go to stderr instead.

#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_log(msg: &str) {
    eprintln!("[log] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_warn(msg: &str) {
    eprintln!("[warn] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console_error(msg: &str) {
    eprintln!("[error] {}", msg);
}

/// Shorten `text` to at most `max` user-perceived characters, marking the cut
/// with an ellipsis.  Grapheme-aware so emoji and combining marks in
/// filenames are never split.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = graphemes[..max - 1].concat();
    out.push('…');
    out
}

/// `HH:MM` in UTC, used for the bubble tooltip.
pub fn format_time(ts: &DateTime<Utc>) -> String {
    ts.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_graphemes("report.pdf", 48), "report.pdf");
    }

    #[test]
    fn long_names_are_cut_with_ellipsis() {
        assert_eq!(truncate_graphemes("quarterly-report.pdf", 10), "quarterly…");
        assert_eq!(truncate_graphemes("quarterly-report.pdf", 10).chars().count(), 10);
    }

    #[test]
    fn truncation_respects_graphemes() {
        // "e" + combining acute accent is one grapheme
        let name = "e\u{301}e\u{301}e\u{301}.pdf";
        let cut = truncate_graphemes(name, 3);
        assert_eq!(cut, "e\u{301}e\u{301}…");
    }

    #[test]
    fn time_is_hours_and_minutes() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 30).unwrap();
        assert_eq!(format_time(&ts), "09:07");
    }
}
