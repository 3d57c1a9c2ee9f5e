use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;
use mccmnc_scraping::{
    collector::collect_operators, fetch::WikiClient, serializer::write_operators,
    sources::default_sources,
};
use url::Url;

#[derive(Parser)]
struct Opts {
    /// Where the operator table is written.  Existing contents are replaced.
    #[arg(long, default_value = "operators.json")]
    output: PathBuf,
    /// Page to scrape instead of the built-in list.  Can be given several times.
    #[arg(long = "url")]
    urls: Vec<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let sources = if opts.urls.is_empty() {
        default_sources()?
    } else {
        opts.urls
    };
    let client = WikiClient::new()?;
    let operators = collect_operators(&client, &sources).await;
    write_operators(&opts.output, &operators)?;
    info!(
        "Data has been successfully saved to {:?} ({} entries).",
        opts.output,
        operators.len()
    );
    Ok(())
}
