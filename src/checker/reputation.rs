// src/checker/reputation.rs
// =============================================================================
// Reads a WOT (Web of Trust) scorecard page.
//
// What we pull out:
// - The server's country, from the `alt` text of the flag image (#country)
// - Every reputation component block (div.rep-comp), e.g.
//   "Trustworthiness: Excellent" or "Child safety: Good"
// =============================================================================

use super::html::{joined_text, require, selector};
use super::render::emit;
use crate::error::CheckError;
use scraper::Html;
use std::fmt::Write;

pub fn render(body: &str, checker: &'static str) -> Result<String, CheckError> {
    let document = Html::parse_document(body);
    let root = document.root_element();
    let mut out = String::new();

    let country = require(root, "#country", checker)?
        .value()
        .attr("alt")
        .ok_or_else(|| CheckError::extraction(checker, "#country has no alt text"))?;
    emit!(out, "Server location: {}", country);

    let components = selector("div.rep-comp", checker)?;
    for component in document.select(&components) {
        emit!(out, "{}", joined_text(component, ": "));
    }

    Ok(out)
}
