use std::path::PathBuf;

use anyhow::Result;
use geodash::{endpoint_url, fetch_rows, write_json_file};

use crate::cli::{Cli, FetchArgs};

pub fn run(cli: &Cli, args: &FetchArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let url = endpoint_url(&config.base_url, &args.endpoint);
    let out_path = args.output.clone()
        .unwrap_or_else(|| PathBuf::from(format!("./{}.json", args.endpoint.trim_matches('/'))));

    let rows = fetch_rows(&url)?;
    write_json_file(&out_path, &rows, args.force)?;

    eprintln!("[fetch] saved {} rows from {} to {}", rows.len(), url, out_path.display());
    Ok(())
}
