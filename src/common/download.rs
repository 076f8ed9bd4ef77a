use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{blocking::Client, redirect::Policy};
use tracing::info;

use crate::record::RawRow;

/// Blocking HTTP client shared by all backend requests.
fn client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("geodash/", env!("CARGO_PKG_VERSION")))
        .redirect(Policy::limited(10))
        .timeout(Duration::from_secs(30))
        .build()
        .context("[common::download] Failed to build HTTP client")
}

/// Join the backend base URL and an endpoint path, e.g. `climate/climate_kenya`.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Fetch a JSON array of row objects from `url`.
pub fn fetch_rows(url: &str) -> Result<Vec<RawRow>> {
    let body = client()?
        .get(url)
        .send()
        .with_context(|| format!("[common::download] GET {url}"))?
        .error_for_status()
        .with_context(|| format!("[common::download] GET {url} returned error status"))?
        .text()
        .with_context(|| format!("[common::download] Failed to read response body from {url}"))?;

    let rows = super::read_rows_from_str(&body)
        .with_context(|| format!("[common::download] Response from {url} is not a row array"))?;
    info!(url, rows = rows.len(), "fetched dataset");
    Ok(rows)
}
