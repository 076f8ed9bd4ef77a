use anyhow::{Context, Result};
use geodash::{read_rows_from_file, share_series};

use crate::cli::{Cli, ShareArgs};

pub fn run(_cli: &Cli, args: &ShareArgs) -> Result<()> {
    let rows = read_rows_from_file(&args.data)?;
    let series = share_series(&rows, &args.label, &args.value);

    let json = serde_json::to_string_pretty(&series)
        .context("[share] Failed to serialize share series")?;
    super::write_output(args.output.as_deref(), &json, args.force)
}
