// src/checker/css.rs
// =============================================================================
// Reads a W3C CSS Validator JSON response.
//
//   {
//     "cssvalidation": {
//       "result": { "errorcount": 2, "warningcount": 5 },
//       "errors": [
//         { "source": "http://apple.com/main.css", "line": 12, "message": "..." },
//         ...
//       ]
//     }
//   }
//
// The counts are always printed. The error list is only printed when some
// count is above zero, grouped by stylesheet: a "Source:" line appears each
// time the source changes from the row before.
// =============================================================================

use super::render::{cap, emit, overflow_notice, plain, truncate_message};
use crate::error::CheckError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::Write;

#[derive(Debug, Deserialize)]
struct CssResponse {
    cssvalidation: CssValidation,
}

#[derive(Debug, Deserialize)]
struct CssValidation {
    result: Map<String, Value>,
    #[serde(default)]
    errors: Vec<CssIssue>,
}

#[derive(Debug, Deserialize)]
struct CssIssue {
    source: String,
    line: Option<u64>,
    message: String,
}

pub fn render(body: &str, checker: &'static str) -> Result<String, CheckError> {
    let response: CssResponse = serde_json::from_str(body)
        .map_err(|e| CheckError::extraction(checker, e.to_string()))?;
    let validation = response.cssvalidation;
    let mut out = String::new();

    emit!(out);
    for (key, value) in &validation.result {
        emit!(out, "{}: {}", key, plain(value));
    }
    emit!(out);

    let has_findings = validation
        .result
        .values()
        .any(|v| v.as_f64().is_some_and(|n| n > 0.0));
    if !has_findings {
        return Ok(out);
    }

    let capped = cap(&validation.errors);

    // Thread the previous row's source through the loop; only a change of
    // source prints a new group heading.
    capped
        .shown
        .iter()
        .copied()
        .fold(None::<&str>, |last_source, issue| {
            if last_source != Some(issue.source.as_str()) {
                if last_source.is_some() {
                    emit!(out);
                }
                emit!(out, "Source: {}", issue.source);
            }
            let line = issue.line.map(|n| n.to_string()).unwrap_or_default();
            emit!(out, "(error) Line {}.  {}", line, truncate_message(&issue.message));
            Some(issue.source.as_str())
        });

    if capped.overflowed {
        emit!(out, "{}", overflow_notice());
    }

    Ok(out)
}
