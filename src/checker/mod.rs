// src/checker/mod.rs
// =============================================================================
// This module knows about the five checker services.
//
// Each checker is described by a CheckerDescriptor:
// - which extractor understands its answer (Extractor enum)
// - the name shown in the output
// - the base URL the target domain is appended to
// - whether it wants a GET or a POST
//
// Submodules:
// - render: formatting shared by all checkers (headers, truncation, capping)
// - html: scraper helpers for the checkers that answer with HTML
// - reputation, security_scan, page_speed, markup, css: one per service
// =============================================================================

mod css;
mod html;
mod markup;
mod page_speed;
mod render;
mod reputation;
mod security_scan;

use crate::error::CheckError;
use crate::fetch::RequestMethod;
use std::borrow::Cow;

/// Which response format a checker speaks, and so which extractor reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// WOT scorecard page (HTML)
    Reputation,
    /// Sucuri SiteCheck results page (HTML)
    SecurityScan,
    /// Google PageSpeed Insights (JSON)
    PageSpeed,
    /// W3C Markup Validator (JSON)
    MarkupValidation,
    /// W3C CSS Validator (JSON)
    CssValidation,
}

/// Everything needed to query one checker service.
#[derive(Debug, Clone)]
pub struct CheckerDescriptor {
    pub extractor: Extractor,
    pub name: &'static str,
    /// Borrowed for the real services in `registry()`. Owned when a checker is
    /// pointed at a URL only known at runtime, as the runner tests do with
    /// their local server.
    pub base_url: Cow<'static, str>,
    pub method: RequestMethod,
}

impl CheckerDescriptor {
    /// The URL to request for `target`. The target is appended as-is; each
    /// base URL already ends with whatever query parameter or scheme prefix
    /// its service needs.
    pub fn request_url(&self, target: &str) -> String {
        format!("{}{}", self.base_url, target)
    }

    /// Turns a fetched body into the text printed for this checker,
    /// header included.
    pub fn render(&self, body: &str, target: &str) -> Result<String, CheckError> {
        let results = match self.extractor {
            Extractor::Reputation => reputation::render(body, self.name)?,
            Extractor::SecurityScan => security_scan::render(body, target, self.name)?,
            Extractor::PageSpeed => page_speed::render(body, self.name)?,
            Extractor::MarkupValidation => markup::render(body, self.name)?,
            Extractor::CssValidation => css::render(body, self.name)?,
        };

        Ok(format!("{}{}\n", render::section_header(self.name), results))
    }
}

/// The checkers every target is run through, in the order they are printed.
pub fn registry() -> Vec<CheckerDescriptor> {
    vec![
        CheckerDescriptor {
            extractor: Extractor::Reputation,
            name: "WOT SCORECARD",
            base_url: Cow::Borrowed("https://www.mywot.com/en/scorecard/"),
            method: RequestMethod::Get,
        },
        CheckerDescriptor {
            extractor: Extractor::SecurityScan,
            name: "SUCURI SECURITY SITE CHECK",
            base_url: Cow::Borrowed("https://sitecheck.sucuri.net/results/"),
            method: RequestMethod::Post,
        },
        CheckerDescriptor {
            extractor: Extractor::PageSpeed,
            name: "GOOGLE PAGESPEED INSIGHTS",
            // The API wants a full URL, so the scheme is part of the base
            base_url: Cow::Borrowed(
                "https://www.googleapis.com/pagespeedonline/v1/runPagespeed?url=http://",
            ),
            method: RequestMethod::Get,
        },
        CheckerDescriptor {
            extractor: Extractor::MarkupValidation,
            name: "W3 MARKUP VALIDATION",
            base_url: Cow::Borrowed("http://validator.w3.org/check?output=json&uri=http%3A%2F%2F"),
            method: RequestMethod::Get,
        },
        CheckerDescriptor {
            extractor: Extractor::CssValidation,
            name: "W3 CSS3 VALIDATION",
            base_url: Cow::Borrowed("http://jigsaw.w3.org/css-validator/validator?output=json&uri="),
            method: RequestMethod::Get,
        },
    ]
}
