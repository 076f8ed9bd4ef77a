use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::{common::{PendingWrite, write_rows_csv}, record::RawRow};

/// Download name for a dataset export, e.g. `climate_data_KEN.csv`.
pub fn export_file_name(dataset: &str, selection: &str) -> String {
    format!("{dataset}_data_{selection}.csv")
}

/// Write `rows` to `path` as CSV, atomically.
pub fn export_csv(rows: &[RawRow], path: &Path, force: bool) -> Result<()> {
    let mut sink = PendingWrite::open(path, force)?;
    write_rows_csv(rows, &mut sink)
        .with_context(|| format!("[table::export_csv] Failed to export {}", path.display()))?;
    sink.finalize()?;
    info!(path = %path.display(), rows = rows.len(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::read_rows_from_str;

    #[test]
    fn file_name_follows_dataset_and_selection() {
        assert_eq!(export_file_name("climate", "world"), "climate_data_world.csv");
        assert_eq!(export_file_name("agriculture", "KEN"), "agriculture_data_KEN.csv");
    }

    #[test]
    fn exports_rows_and_respects_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name("land", "world"));
        let rows = read_rows_from_str(r#"[{"Country_Code": "KEN", "Year_2020": 1.5}]"#).unwrap();

        export_csv(&rows, &path, false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Country_Code,Year_2020"));

        assert!(export_csv(&rows, &path, false).is_err());
        export_csv(&rows, &path, true).unwrap();
    }
}
