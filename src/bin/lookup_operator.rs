use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use mccmnc_scraping::operator_map::OperatorMap;
use mccmnc_scraping_utils::fs_json_util::read_json;

#[derive(Parser)]
struct Opts {
    /// MCC-MNC codes such as `23430`.  Separators like `234-30` are ignored.
    #[arg(required = true)]
    codes: Vec<String>,
    #[arg(long, default_value = "operators.json")]
    operators_json: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let operators: OperatorMap = read_json(&opts.operators_json)?;
    for code in &opts.codes {
        let key = code
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();
        match operators.get(&key) {
            Some(operator) => println!("{key}\t{operator}"),
            None => println!("{key}\t(unknown)"),
        }
    }
    Ok(())
}
