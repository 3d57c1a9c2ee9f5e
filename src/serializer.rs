use std::path::Path;

use anyhow::Context;
use mccmnc_scraping_utils::fs_json_util::write_json;

use crate::operator_map::OperatorMap;

/// Pretty-printed JSON with two-space indentation and sorted keys.
/// `&`, `<` and `>` appear literally since some operator names contain them.
pub fn to_json(operators: &OperatorMap) -> anyhow::Result<String> {
    let json =
        serde_json::to_string_pretty(operators).context("Failed to encode operators as JSON")?;
    Ok(unescape_html_sensitive(&json))
}

/// Replaces the `\u0026`, `\u003c` and `\u003e` escapes of encoded JSON with the characters
/// themselves.  Other escapes, including an escaped backslash followed by `u0026`, are kept.
/// `serde_json` never escapes these three characters, so on its output this is a no-op; it only
/// matters for JSON produced by encoders that do.
pub fn unescape_html_sensitive(json: &str) -> String {
    let mut res = String::with_capacity(json.len());
    let mut rest = json;
    while let Some(i) = rest.find('\\') {
        res.push_str(&rest[..i]);
        let escape = &rest[i..];
        let literal = match escape.get(..6) {
            Some("\\u0026") => Some('&'),
            Some("\\u003c" | "\\u003C") => Some('<'),
            Some("\\u003e" | "\\u003E") => Some('>'),
            _ => None,
        };
        let len = match literal {
            Some(c) => {
                res.push(c);
                6
            }
            None => {
                let len = escape[1..].chars().next().map_or(1, |c| 1 + c.len_utf8());
                res.push_str(&escape[..len]);
                len
            }
        };
        rest = &escape[len..];
    }
    res.push_str(rest);
    res
}

/// Truncates whatever was at `path` before.
pub fn write_operators(path: &Path, operators: &OperatorMap) -> anyhow::Result<()> {
    let json = to_json(operators)?;
    write_json(path, &json).context("Failed to save JSON file")?;
    Ok(())
}
