use std::path::PathBuf;

use anyhow::{Result, anyhow};
use geodash::{CODE_KEY, RawRow, Scope, export_csv, export_file_name, read_rows_from_file};

use crate::cli::{Cli, ExportArgs};

/// Whether `row` belongs to `scope`; every row belongs to the world.
fn in_scope(row: &RawRow, scope: &Scope) -> bool {
    match scope {
        Scope::World => true,
        Scope::Country(code) => row.get(CODE_KEY)
            .and_then(|v| v.as_str())
            .is_some_and(|raw| raw.trim().eq_ignore_ascii_case(code.as_str())),
    }
}

pub fn run(_cli: &Cli, args: &ExportArgs) -> Result<()> {
    let scope = Scope::parse(&args.scope)
        .ok_or_else(|| anyhow!("[export] Invalid scope {:?}; expected \"world\" or a country code", args.scope))?;
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));

    let rows = read_rows_from_file(&args.data)?
        .into_iter()
        .filter(|row| in_scope(row, &scope))
        .collect::<Vec<_>>();

    let out_path = out_dir.join(export_file_name(&args.dataset, &scope.to_string()));
    export_csv(&rows, &out_path, args.force)?;

    eprintln!("[export] wrote {} rows to {}", rows.len(), out_path.display());
    Ok(())
}
