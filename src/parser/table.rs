//! Picks the MCC/MNC tables out of a page.
//!
//! The reference pages style many unrelated tables the same way, so a table only counts when
//! its header row carries the expected labels at the expected positions.

use itertools::Itertools;
use mccmnc_scraping_utils::selector;
use scraper::{ElementRef, Html};

pub const TABLE_SELECTOR: &str = "table.wikitable";

/// `(column index, label)` pairs that the first row's `th` cells must match after trimming.
pub const EXPECTED_HEADERS: [(usize, &str); 3] = [(0, "MCC"), (1, "MNC"), (3, "Operator")];

pub fn find_code_tables(html: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    html.select(selector!(TABLE_SELECTOR))
        .filter(|&table| has_expected_headers(table))
}

pub fn has_expected_headers(table: ElementRef) -> bool {
    let Some(header_row) = table.select(selector!("tr")).next() else {
        return false;
    };
    let headers = header_row
        .select(selector!("th"))
        .map(|th| th.text().collect::<String>())
        .collect_vec();
    EXPECTED_HEADERS
        .iter()
        .all(|&(i, label)| headers.get(i).map_or("", |header| header.trim()) == label)
}

/// Every row but the header row.
pub fn data_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    table.select(selector!("tr")).skip(1)
}
