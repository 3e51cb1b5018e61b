// src/checker/security_scan.rs
// =============================================================================
// Reads a Sucuri SiteCheck results page.
//
// The page has two "scan findings" tables and a details panel:
//
//   table.scan-findings #1  -> malware / firewall / update findings (3 columns)
//   table.scan-findings #2  -> blacklist status per vendor (first column)
//   #sitecheck-details
//     #collapseOne          -> system details (IP, web server, ...)
//     #collapseTwo          -> links found on the site (optional)
//     #collapseThree        -> scripts the site includes (optional)
//
// Links that point back at the checked site itself are left out, and both
// link lists are capped.
// =============================================================================

use super::html::{find, is_external_link, require, selector, text_lines, text_of};
use super::render::{cap, emit, overflow_notice};
use crate::error::CheckError;
use scraper::{ElementRef, Html};
use std::fmt::Write;

pub fn render(body: &str, target: &str, checker: &'static str) -> Result<String, CheckError> {
    let document = Html::parse_document(body);
    let root = document.root_element();
    let mut out = String::new();

    let findings = selector("table.table.scan-findings", checker)?;
    let tables: Vec<ElementRef> = document.select(&findings).collect();
    if tables.len() < 2 {
        return Err(CheckError::extraction(
            checker,
            format!("expected 2 scan-findings tables, found {}", tables.len()),
        ));
    }

    emit!(out, "Scan Results:");
    for cells in table_rows(tables[0], 3, checker)? {
        emit!(out, "{}: {} ({})", cells[0], cells[1], cells[2]);
    }

    emit!(out);
    emit!(out, "Blacklist Results:");
    for cells in table_rows(tables[1], 1, checker)? {
        emit!(out, "{}", cells[0]);
    }

    emit!(out);
    emit!(out, "Website Details:");
    let details = require(root, "#sitecheck-details", checker)?;
    for line in text_lines(require(details, "#collapseOne", checker)?) {
        emit!(out, "{}", line);
    }

    emit!(out);
    emit!(out, "List of Links Found to Other Domains or Sub Domains:");
    if let Some(links) = find(details, "#collapseTwo", checker)? {
        let external = text_lines(links)
            .into_iter()
            .filter(|line| is_external_link(line, target));
        write_capped(&mut out, external);
    }

    emit!(out);
    emit!(out, "List of Scripts Included:");
    if let Some(scripts) = find(details, "#collapseThree", checker)? {
        write_capped(&mut out, text_lines(scripts));
    }

    Ok(out)
}

// Text of the cells of every body row, requiring at least `min_cells` per row.
fn table_rows(
    table: ElementRef<'_>,
    min_cells: usize,
    checker: &'static str,
) -> Result<Vec<Vec<String>>, CheckError> {
    let rows = selector("tbody tr", checker)?;
    let cells = selector("td", checker)?;

    table
        .select(&rows)
        .map(|row| {
            let texts: Vec<String> = row.select(&cells).map(text_of).collect();
            if texts.len() < min_cells {
                return Err(CheckError::extraction(
                    checker,
                    format!("scan-findings row has {} cells, expected {}", texts.len(), min_cells),
                ));
            }
            Ok(texts)
        })
        .collect()
}

fn write_capped(out: &mut String, lines: impl IntoIterator<Item = String>) {
    let capped = cap(lines);
    for line in &capped.shown {
        emit!(out, "{}", line);
    }
    if capped.overflowed {
        emit!(out, "{}", overflow_notice());
    }
}
