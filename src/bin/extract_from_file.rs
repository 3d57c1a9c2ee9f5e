use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use mccmnc_scraping::{
    collector::collect_page, operator_map::OperatorMap, serializer::write_operators,
};
use scraper::Html;

/// Builds the operator table from saved copies of the reference pages.
#[derive(Parser)]
struct Opts {
    #[arg(required = true)]
    input_files: Vec<PathBuf>,
    #[arg(long, default_value = "operators.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let mut operators = OperatorMap::default();
    for path in &opts.input_files {
        info!("Reading {path:?}");
        let html = match fs_err::read_to_string(path) {
            Ok(html) => Html::parse_document(&html),
            Err(e) => {
                error!("{e}");
                continue;
            }
        };
        collect_page(&mut operators, &html);
    }
    write_operators(&opts.output, &operators)?;
    info!(
        "Data has been successfully saved to {:?} ({} entries).",
        opts.output,
        operators.len()
    );
    Ok(())
}
