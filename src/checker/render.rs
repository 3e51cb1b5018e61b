// src/checker/render.rs
// =============================================================================
// Formatting helpers shared by all five checkers.
//
// - section_header: the centered "<NAME> RESULTS" banner
// - truncate_message: long validator messages are cut at 60 characters
// - cap: long lists stop after a few rows and print an overflow notice
// - plain: JSON values printed without quotes around strings
// - emit!: appends one line to a report being built in a String
// =============================================================================

use serde_json::Value;
use std::borrow::Cow;

/// `writeln!` into a `String` report. Needs `std::fmt::Write` in scope at the
/// call site, like `writeln!` itself.
macro_rules! emit {
    ($out:expr $(, $($arg:tt)*)?) => {
        writeln!($out $(, $($arg)*)?).expect("writing to a String cannot fail")
    };
}
pub(crate) use emit;

/// Width the section headers are centered in.
pub const PAGE_WIDTH: usize = 80;

/// Messages longer than this are cut and suffixed with " ...".
pub const MAX_MSG_LENGTH: usize = 60;

/// Size of a capped list, counting the overflow notice as one of its rows.
pub const MAX_RESULTS_TO_DISPLAY: usize = 10;

/// Builds the banner printed above each checker's results.
pub fn section_header(name: &str) -> String {
    let pad = (PAGE_WIDTH / 2).saturating_sub(name.chars().count() / 2);
    format!("\n{}{} RESULTS\n\n", " ".repeat(pad), name)
}

/// Cuts `message` to MAX_MSG_LENGTH characters, marking the cut with " ...".
pub fn truncate_message(message: &str) -> Cow<'_, str> {
    match message.char_indices().nth(MAX_MSG_LENGTH) {
        Some((cut, _)) => Cow::Owned(format!("{} ...", &message[..cut])),
        None => Cow::Borrowed(message),
    }
}

/// The rows of a capped list that made it onto the screen.
#[derive(Debug, PartialEq)]
pub struct Capped<T> {
    pub shown: Vec<T>,
    pub overflowed: bool,
}

/// Keeps the first MAX_RESULTS_TO_DISPLAY - 1 items. If a further item
/// exists, the notice takes its slot and the rest are dropped.
pub fn cap<T>(items: impl IntoIterator<Item = T>) -> Capped<T> {
    let mut items = items.into_iter();
    let shown: Vec<T> = items.by_ref().take(MAX_RESULTS_TO_DISPLAY - 1).collect();
    let overflowed = items.next().is_some();

    Capped { shown, overflowed }
}

/// The line printed in place of the rows a capped list dropped.
pub fn overflow_notice() -> String {
    let shown = MAX_RESULTS_TO_DISPLAY - 1;
    format!("(More than {} results.  Displayed first {}.)", shown, shown)
}

/// Renders a JSON value for humans: strings lose their quotes, everything
/// else uses its JSON form.
pub fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
