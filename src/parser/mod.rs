pub mod row;
pub mod table;

use getset::{CopyGetters, Getters};
use log::{debug, warn};
use scraper::Html;

use self::row::RowRecord;

#[derive(Debug, Default, Getters, CopyGetters)]
pub struct ParsedPage {
    #[getset(get = "pub")]
    records: Vec<RowRecord>,
    #[getset(get_copy = "pub")]
    tables: usize,
    #[getset(get_copy = "pub")]
    skipped_rows: usize,
}
impl ParsedPage {
    pub fn into_records(self) -> Vec<RowRecord> {
        self.records
    }
}

/// Extracts every acceptable row from every MCC/MNC table of the page.
/// Rows that do not make sense are dropped one by one; they never spoil the rest of the page.
pub fn parse(html: &Html) -> ParsedPage {
    let mut page = ParsedPage::default();
    for table in table::find_code_tables(html) {
        page.tables += 1;
        for tr in table::data_rows(table) {
            match row::parse_row(tr) {
                Ok(record) => page.records.push(record),
                Err(e) => {
                    page.skipped_rows += 1;
                    if e.is_worth_warning() {
                        warn!("{e}");
                    } else {
                        debug!("Skipping row: {e}");
                    }
                }
            }
        }
    }
    page
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use scraper::Html;

    use super::parse;

    #[test]
    fn test_parse() {
        let html = Html::parse_document(
            r#"<html><body>
            <table class="wikitable"><tr><th>Country</th><th>Code</th></tr>
              <tr><td>234</td><td>30</td><td>x</td><td>Not an operator table</td></tr></table>
            <table class="wikitable">
              <tr><th>MCC</th><th>MNC</th><th>Brand</th><th>Operator</th><th>Status</th></tr>
              <tr><td>234</td><td>10-12</td><td>ExampleCo</td><td>ExampleCo Ltd</td><td>Operational</td></tr>
              <tr><td colspan="5">United Kingdom</td></tr>
              <tr><td>234</td><td>1x-3</td><td>Broken</td><td>Broken</td></tr>
              <tr><td>MCC</td><td>30</td><td>Heading</td><td>Heading</td></tr>
              <tr><td>234</td><td>30</td><td>EE</td><td></td></tr>
            </table>
            </body></html>"#,
        );
        let page = parse(&html);
        assert_eq!(page.tables(), 1);
        assert_eq!(page.skipped_rows(), 3);
        let keys = page
            .records()
            .iter()
            .flat_map(|record| record.keys())
            .map(|key| key.to_string())
            .collect_vec();
        assert_eq!(keys, ["23410", "23411", "23412", "23430"]);
        assert_eq!(page.records()[1].operator().to_string(), "EE");
    }

    #[test]
    fn test_misplaced_header_contributes_nothing() {
        let html = Html::parse_document(
            r#"<table class="wikitable">
              <tr><th>MCC</th><th>MNC</th><th>Brand</th><th>Something</th><th>Operator</th></tr>
              <tr><td>234</td><td>30</td><td>EE</td><td>x</td><td>EE Limited</td></tr>
              <tr><td>234</td><td>10-12</td><td>ExampleCo</td><td>x</td><td>ExampleCo Ltd</td></tr>
            </table>"#,
        );
        let page = parse(&html);
        assert_eq!(page.tables(), 0);
        assert!(page.records().is_empty());
    }

    #[test]
    fn test_third_header_is_not_checked() {
        let html = Html::parse_document(
            r#"<table class="wikitable">
              <tr><th>MCC</th><th>MNC</th><th>Something</th><th>Operator</th></tr>
              <tr><td>234</td><td>30</td><td>EE</td><td>EE Limited</td></tr>
            </table>"#,
        );
        let page = parse(&html);
        assert_eq!(page.tables(), 1);
        assert_eq!(page.records().len(), 1);
    }
}
