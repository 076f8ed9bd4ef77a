use anyhow::{Context, Result};

use crate::cli::{Cli, LegendArgs};

pub fn run(_cli: &Cli, args: &LegendArgs) -> Result<()> {
    let json = serde_json::to_string_pretty(&geodash::legend())
        .context("[legend] Failed to serialize legend")?;
    super::write_output(args.output.as_deref(), &json, args.force)
}
