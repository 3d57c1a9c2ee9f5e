//! Turns a data row of an MCC/MNC table into a [`RowRecord`].

use std::{num::ParseIntError, ops::RangeInclusive};

use getset::Getters;
use itertools::Itertools;
use mccmnc_scraping_utils::selector;
use scraper::ElementRef;
use thiserror::Error;

use crate::schema::{MccMnc, OperatorName};

pub const MCC_COLUMN: usize = 0;
pub const MNC_COLUMN: usize = 1;
pub const BRAND_COLUMN: usize = 2;
pub const OPERATOR_COLUMN: usize = 3;
pub const MIN_DATA_CELLS: usize = 4;

/// Some MCC cells carry a flag or footnote line above the code itself.
/// When the cell spans several lines, the code is read from this line.
pub const MCC_LINE_WITH_BREAK: usize = 1;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Too few data cells: {0}")]
    TooFewCells(usize),
    #[error("MCC is not an integer: {0:?}")]
    InvalidMcc(String),
    #[error("MNC is not an integer: {0:?}")]
    InvalidMnc(String),
    #[error("Failed to parse MNC: bound {bound:?} of range {mnc:?} ({source})")]
    InvalidRangeBound {
        mnc: String,
        bound: String,
        #[source]
        source: ParseIntError,
    },
}
impl RowError {
    /// Malformed ranges are reported, while other rejected rows are just noise from
    /// headings and notes sharing the table.
    pub fn is_worth_warning(&self) -> bool {
        matches!(self, Self::InvalidRangeBound { .. })
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Mnc {
    /// As written in the table, leading zeros included.
    Single(String),
    Range(RangeInclusive<i64>),
}

#[derive(Clone, PartialEq, Eq, Debug, Getters)]
#[getset(get = "pub")]
pub struct RowRecord {
    mcc: String,
    mnc: Mnc,
    operator: OperatorName,
}
impl RowRecord {
    /// Expanded range members are formatted without padding, so `01-03` gives `1`, `2`, `3`.
    pub fn keys(&self) -> Vec<MccMnc> {
        match &self.mnc {
            Mnc::Single(mnc) => vec![MccMnc::new(&self.mcc, mnc)],
            Mnc::Range(range) => range
                .clone()
                .map(|mnc| MccMnc::new(&self.mcc, mnc))
                .collect(),
        }
    }
}

pub fn parse_row(tr: ElementRef) -> Result<RowRecord, RowError> {
    let cells = tr
        .select(selector!("td"))
        .map(|td| td.text().collect::<String>().trim().to_owned())
        .collect_vec();
    parse_cells(&cells)
}

pub fn parse_cells<S: AsRef<str>>(cells: &[S]) -> Result<RowRecord, RowError> {
    if cells.len() < MIN_DATA_CELLS {
        return Err(RowError::TooFewCells(cells.len()));
    }
    let cell = |i: usize| cells[i].as_ref().trim();

    let mcc = parse_mcc(cell(MCC_COLUMN))?;
    let operator = match cell(OPERATOR_COLUMN) {
        "" => cell(BRAND_COLUMN),
        operator => operator,
    };
    let operator = normalize_operator(operator).into();
    let mnc = parse_mnc(cell(MNC_COLUMN))?;

    Ok(RowRecord { mcc, mnc, operator })
}

fn parse_mcc(cell: &str) -> Result<String, RowError> {
    let mcc = if cell.contains('\n') {
        cell.split('\n').nth(MCC_LINE_WITH_BREAK).unwrap_or(cell)
    } else {
        cell
    }
    .trim();
    match mcc.parse::<i64>() {
        Ok(_) => Ok(mcc.to_owned()),
        Err(_) => Err(RowError::InvalidMcc(mcc.to_owned())),
    }
}

fn parse_mnc(mnc: &str) -> Result<Mnc, RowError> {
    if !mnc.contains('-') {
        return match mnc.parse::<i64>() {
            Ok(_) => Ok(Mnc::Single(mnc.to_owned())),
            Err(_) => Err(RowError::InvalidMnc(mnc.to_owned())),
        };
    }
    let mut bounds = mnc.split('-');
    let mut next_bound = || {
        let bound = bounds.next().unwrap_or_default().trim();
        bound
            .parse::<i64>()
            .map_err(|source| RowError::InvalidRangeBound {
                mnc: mnc.to_owned(),
                bound: bound.to_owned(),
                source,
            })
    };
    let start = next_bound()?;
    let end = next_bound()?;
    Ok(Mnc::Range(start..=end))
}

pub fn normalize_operator(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '“' | '”' => '"',
            '‘' | '’' => '\'',
            '\u{a0}' => ' ',
            '–' => '-',
            c => c,
        })
        .collect()
}
