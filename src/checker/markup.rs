// src/checker/markup.rs
// =============================================================================
// Reads a W3C Markup Validator JSON response.
//
// The raw output needs one cleanup before it can be parsed: the "explanation"
// entries carry chunks of HTML that regularly break the JSON, and we never
// show them, so each one is cut out (key and rest of its line) first.
//
// The validator always leads with a generic notice, so the error count shown
// is one less than the number of messages (never below zero). The notice
// about the legacy interface being deprecated is not listed.
// =============================================================================

use super::render::{cap, emit, overflow_notice, truncate_message};
use crate::error::CheckError;
use regex::Regex;
use serde::Deserialize;
use std::fmt::Write;
use std::sync::LazyLock;

const DEPRECATION_NOTICE: &str = "This interface to HTML5 document checking is deprecated.";

static EXPLANATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""explanation":.+"#).expect("explanation pattern is valid"));

#[derive(Debug, Deserialize)]
struct MarkupReport {
    messages: Vec<MarkupMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkupMessage {
    #[serde(rename = "type")]
    kind: String,
    message: String,
    last_line: Option<u64>,
    last_column: Option<u64>,
}

pub fn render(body: &str, checker: &'static str) -> Result<String, CheckError> {
    let cleaned = EXPLANATION.replace_all(body, "");
    let report: MarkupReport = serde_json::from_str(&cleaned)
        .map_err(|e| CheckError::extraction(checker, e.to_string()))?;
    let mut out = String::new();

    emit!(out, "errorcount: {}", report.messages.len().saturating_sub(1));
    emit!(out);

    let listed = report.messages.iter().filter_map(|m| {
        let message = truncate_message(&m.message);
        (message != DEPRECATION_NOTICE).then(|| {
            format!(
                "({}) Line {}: Column {}.  {}",
                m.kind,
                position(m.last_line),
                position(m.last_column),
                message
            )
        })
    });

    let capped = cap(listed);
    for row in &capped.shown {
        emit!(out, "{}", row);
    }
    if capped.overflowed {
        emit!(out, "{}", overflow_notice());
    }

    Ok(out)
}

fn position(value: Option<u64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
