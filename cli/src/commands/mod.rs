pub mod export;
#[cfg(feature = "download")]
pub mod fetch;
pub mod legend;
pub mod render;
pub mod series;
pub mod share;

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use geodash::{Config, write_file_atomic};

/// Config from `--config`, or the defaults.
pub(crate) fn load_config(cli: &crate::cli::Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::from_json_file(path),
        None => Ok(Config::default()),
    }
}

/// Write `text` to `output` atomically, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, text: &str, force: bool) -> Result<()> {
    match output {
        Some(path) => write_file_atomic(path, text.as_bytes(), force),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("[cli] Failed to write to stdout")
        }
    }
}
