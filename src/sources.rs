use anyhow::Context;
use url::Url;

/// Pages listing mobile network codes, one per ITU region, plus the country code overview.
pub const DEFAULT_SOURCES: [&str; 7] = [
    "https://en.wikipedia.org/wiki/Mobile_Network_Codes_in_ITU_region_2xx_(Europe)",
    "https://en.wikipedia.org/wiki/Mobile_Network_Codes_in_ITU_region_3xx_(North_America)",
    "https://en.wikipedia.org/wiki/Mobile_Network_Codes_in_ITU_region_4xx_(Asia)",
    "https://en.wikipedia.org/wiki/Mobile_Network_Codes_in_ITU_region_5xx_(Oceania)",
    "https://en.wikipedia.org/wiki/Mobile_Network_Codes_in_ITU_region_6xx_(Africa)",
    "https://en.wikipedia.org/wiki/Mobile_Network_Codes_in_ITU_region_7xx_(South_America)",
    "https://en.wikipedia.org/wiki/Mobile_country_code",
];

pub fn default_sources() -> anyhow::Result<Vec<Url>> {
    DEFAULT_SOURCES
        .iter()
        .map(|source| Url::parse(source).with_context(|| format!("Invalid source: {source:?}")))
        .collect()
}
