use log::{error, info};
use scraper::Html;
use url::Url;

use crate::{fetch::WikiClient, operator_map::OperatorMap, parser};

/// Adds every entry found in `html` to `operators`, returning how many keys were written.
pub fn collect_page(operators: &mut OperatorMap, html: &Html) -> usize {
    let page = parser::parse(html);
    let tables = page.tables();
    let skipped_rows = page.skipped_rows();
    let entries = page
        .into_records()
        .iter()
        .map(|record| operators.extend_from_record(record))
        .sum();
    info!("Found {tables} tables, {entries} entries ({skipped_rows} rows skipped)");
    entries
}

/// Visits `sources` in order.  A page that cannot be fetched is logged and left out,
/// so the result may be partial.
pub async fn collect_operators(client: &WikiClient, sources: &[Url]) -> OperatorMap {
    let mut operators = OperatorMap::default();
    for url in sources {
        info!("Fetching {url}");
        let text = match client.fetch_page(url).await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to fetch page: {e:#}");
                continue;
            }
        };
        collect_page(&mut operators, &Html::parse_document(&text));
    }
    operators
}

#[cfg(test)]
mod tests {
    use scraper::Html;
    use url::Url;

    use crate::{fetch::WikiClient, operator_map::OperatorMap, serializer::to_json};

    use super::{collect_operators, collect_page};

    fn page(rows: &str) -> Html {
        Html::parse_document(&format!(
            r#"<table class="wikitable">
              <tr><th>MCC</th><th>MNC</th><th>Brand</th><th>Operator</th></tr>
              {rows}
            </table>"#
        ))
    }

    #[test]
    fn test_collect_page() {
        let mut operators = OperatorMap::default();
        let written = collect_page(
            &mut operators,
            &page("<tr><td>234</td><td>10-12</td><td>ExampleCo</td><td>ExampleCo Ltd</td></tr>"),
        );
        assert_eq!(written, 3);
        assert_eq!(
            to_json(&operators).unwrap(),
            r#"{
  "23410": "ExampleCo Ltd",
  "23411": "ExampleCo Ltd",
  "23412": "ExampleCo Ltd"
}"#
        );
    }

    #[test]
    fn test_later_pages_overwrite() {
        let mut operators = OperatorMap::default();
        collect_page(
            &mut operators,
            &page("<tr><td>310</td><td>410</td><td>AT&amp;T</td><td>Cingular</td></tr>"),
        );
        collect_page(
            &mut operators,
            &page("<tr><td>310</td><td>410</td><td>AT&amp;T</td><td>AT&amp;T Mobility</td></tr>"),
        );
        assert_eq!(operators.len(), 1);
        assert_eq!(operators.get("310410").unwrap().to_string(), "AT&T Mobility");
    }

    #[tokio::test]
    async fn test_unreachable_page_is_skipped() {
        let client = WikiClient::new().unwrap();
        let sources = [Url::parse("http://127.0.0.1:1/").unwrap()];
        let mut operators = collect_operators(&client, &sources).await;
        assert!(operators.is_empty());

        collect_page(
            &mut operators,
            &page("<tr><td>234</td><td>30</td><td>EE</td><td>EE Limited</td></tr>"),
        );
        assert_eq!(
            to_json(&operators).unwrap(),
            "{\n  \"23430\": \"EE Limited\"\n}"
        );
    }
}
