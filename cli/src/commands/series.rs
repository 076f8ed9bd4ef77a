use anyhow::{Context, Result, anyhow};
use geodash::{Scope, compute_series, normalize_to_percent, normalize_with_min_year, read_rows_from_file, to_series};

use crate::cli::{Cli, SeriesArgs};

pub fn run(cli: &Cli, args: &SeriesArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let scope = Scope::parse(&args.scope)
        .ok_or_else(|| anyhow!("[series] Invalid scope {:?}; expected \"world\" or a country code", args.scope))?;

    let rows = read_rows_from_file(&args.data)?;
    let dataset = normalize_with_min_year(&rows, config.min_wide_year);
    let years = dataset.years();
    if years.is_empty() {
        return Err(anyhow!("[series] Dataset {} has no yearly values", args.data.display()));
    }

    let mut aggregate = compute_series(&dataset.records, &years, &scope);
    if args.normalize {
        aggregate.values = normalize_to_percent(&aggregate.values);
    }

    let json = serde_json::to_string_pretty(&to_series(&aggregate))
        .context("[series] Failed to serialize chart series")?;
    super::write_output(args.output.as_deref(), &json, args.force)
}
