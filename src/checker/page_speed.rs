// src/checker/page_speed.rs
// =============================================================================
// Reads a Google PageSpeed Insights (v1 API) JSON response.
//
// Only three parts of the payload matter:
//
//   {
//     "score": 85,
//     "pageStats": { "numberResources": 62, "totalRequestBytes": "8400", ... },
//     "formattedResults": {
//       "ruleResults": {
//         "MinifyJavaScript": { "localizedRuleName": "Minify JavaScript", "ruleImpact": 0.3, ... },
//         ...
//       }
//     }
//   }
//
// Everything else is ignored. Key order is kept as the service sent it.
// =============================================================================

use super::render::{emit, plain};
use crate::error::CheckError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt::Write;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageSpeedReport {
    score: Value,
    page_stats: Map<String, Value>,
    formatted_results: FormattedResults,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormattedResults {
    rule_results: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleResult {
    localized_rule_name: String,
    rule_impact: Value,
}

pub fn render(body: &str, checker: &'static str) -> Result<String, CheckError> {
    let report: PageSpeedReport = serde_json::from_str(body)
        .map_err(|e| CheckError::extraction(checker, e.to_string()))?;
    let mut out = String::new();

    emit!(out, "PageSpeed score: {} / 100", plain(&report.score));

    emit!(out);
    emit!(out, "Page stats:");
    for (key, value) in &report.page_stats {
        emit!(out, "{}: {}", key, plain(value));
    }

    emit!(out);
    emit!(out, "Rules negatively impacting score:");
    for (rule_id, raw) in report.formatted_results.rule_results {
        let rule: RuleResult = serde_json::from_value(raw).map_err(|e| {
            CheckError::extraction(checker, format!("rule {}: {}", rule_id, e))
        })?;
        emit!(out, "{}: {}", rule.localized_rule_name, plain(&rule.rule_impact));
    }

    Ok(out)
}
