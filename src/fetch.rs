use anyhow::Context;
use log::debug;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Plain GET requests, one at a time.  Nothing is retried and no timeout is set.
pub struct WikiClient {
    reqwest: reqwest::Client,
}

impl WikiClient {
    pub fn new() -> anyhow::Result<Self> {
        let reqwest = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build the HTTP client")?;
        Ok(Self { reqwest })
    }

    pub async fn fetch_page(&self, url: &Url) -> anyhow::Result<String> {
        let response = self
            .reqwest
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch page {url}"))?
            .error_for_status()?;
        debug!("{url} responded with {}", response.status());
        response
            .text()
            .await
            .with_context(|| format!("Failed to read the body of {url}"))
    }
}
