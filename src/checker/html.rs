// src/checker/html.rs
// =============================================================================
// Helpers for the checkers whose services answer with an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to pull the host out of links listed on a
// results page, so links back to the checked site can be skipped.
//
// Rust concepts:
// - Lifetimes: ElementRef<'a> borrows from the Html document it came from
// - Iterators: scraper hands back text nodes and matches lazily
// =============================================================================

use crate::error::CheckError;
use scraper::{ElementRef, Selector};
use url::Url;

// Parses a selector written in our own source code. These are constants, but
// we still surface a failure as an extraction error instead of panicking.
pub fn selector(css: &str, checker: &'static str) -> Result<Selector, CheckError> {
    Selector::parse(css)
        .map_err(|e| CheckError::extraction(checker, format!("bad selector `{}`: {:?}", css, e)))
}

/// Finds the first element under `scope` matching `css`, or fails naming
/// what was missing.
pub fn require<'a>(
    scope: ElementRef<'a>,
    css: &str,
    checker: &'static str,
) -> Result<ElementRef<'a>, CheckError> {
    find(scope, css, checker)?.ok_or_else(|| {
        CheckError::extraction(checker, format!("no element matching `{}` in response", css))
    })
}

/// Like `require`, but a missing element is fine.
pub fn find<'a>(
    scope: ElementRef<'a>,
    css: &str,
    checker: &'static str,
) -> Result<Option<ElementRef<'a>>, CheckError> {
    let selector = selector(css, checker)?;
    let found = scope.select(&selector).next();
    Ok(found)
}

/// All the text under an element, concatenated and trimmed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Each text node trimmed, empty ones dropped, the rest joined by `separator`.
///
/// Example: `<div><b>Trustworthiness</b> <span>Excellent</span></div>` with
/// ": " gives "Trustworthiness: Excellent".
pub fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// The non-blank lines of an element's text, each trimmed.
pub fn text_lines(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when `link` is an http(s) link to somewhere other than `target`.
///
/// A leading "www." is ignored on both sides, so for target "www.apple.com"
/// the link "https://apple.com/mac" counts as internal while
/// "https://support.apple.com" does not.
pub fn is_external_link(link: &str, target: &str) -> bool {
    if !link.starts_with("http") {
        return false;
    }

    let own_site = target.trim_start_matches("www.");
    match Url::parse(link) {
        Ok(url) => match url.host_str() {
            Some(host) => !host.trim_start_matches("www.").starts_with(own_site),
            None => true,
        },
        // Can't tell where it goes, so list it rather than hide it
        Err(_) => true,
    }
}
