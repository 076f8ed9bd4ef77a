use anyhow::Result;
use geodash_core::{DashboardState, FetchTicket, GeoFeatureStore, RawRow};
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use crate::common::*;

/// Opaque handle for one in-flight fetch.
#[wasm_bindgen]
pub struct WasmFetchTicket {
    inner: FetchTicket,
}

#[wasm_bindgen]
pub struct WasmDashboard {
    store: GeoFeatureStore,
    state: DashboardState,
}

#[wasm_bindgen]
impl WasmDashboard {
    /// Construct a dashboard from country boundaries (GeoJSON text).
    #[wasm_bindgen(constructor)]
    pub fn new(geojson: &str, rows_per_page: Option<usize>) -> Result<WasmDashboard, JsValue> {
        let store = GeoFeatureStore::from_geojson_bytes(geojson.as_bytes()).map_err(js_err)?;
        let state = DashboardState::new(rows_per_page.unwrap_or(geodash_core::DEFAULT_ROWS_PER_PAGE));
        Ok(WasmDashboard { store, state })
    }

    /// Number of country features loaded.
    pub fn feature_count(&self) -> usize { self.store.len() }

    /// Call before requesting a dataset; pass the ticket back to `complete_fetch`.
    pub fn begin_fetch(&mut self) -> WasmFetchTicket {
        WasmFetchTicket { inner: self.state.begin_fetch() }
    }

    /// Install fetched rows (JSON array text). Returns false if a newer fetch has started.
    pub fn complete_fetch(&mut self, ticket: &WasmFetchTicket, rows_json: &str) -> Result<bool, JsValue> {
        let rows: Vec<RawRow> = geodash_core::read_rows_from_str(rows_json).map_err(js_err)?;
        Ok(self.state.complete_fetch(ticket.inner, rows))
    }

    /// Select "world" or a country code.
    pub fn select(&mut self, selection: &str) -> Result<(), JsValue> {
        let scope = parse_scope(selection).map_err(js_err)?;
        self.state.select(scope);
        Ok(())
    }

    /// Current selection as "world" or a country code.
    pub fn selection(&self) -> String { self.state.selection.to_string() }

    /// Styled map layer as a GeoJSON FeatureCollection, or null before data arrives.
    #[wasm_bindgen(js_name = "map_geojson")]
    pub fn map_geojson(&self) -> Result<JsValue, JsValue> {
        match self.state.view(&self.store) {
            Some(view) => to_js_object(&view.layer.to_geojson()).map_err(js_err),
            None => Ok(JsValue::NULL),
        }
    }

    /// Chart series for the current selection, or null before data arrives.
    pub fn chart(&self) -> Result<JsValue, JsValue> {
        match self.state.view(&self.store) {
            Some(view) => to_js_object(&view.chart).map_err(js_err),
            None => Ok(JsValue::NULL),
        }
    }

    /// Chart series rescaled so the maximum is 100.
    pub fn chart_normalized(&self) -> Result<JsValue, JsValue> {
        let Some(view) = self.state.view(&self.store) else { return Ok(JsValue::NULL) };
        let mut aggregate = view.aggregate;
        aggregate.values = geodash_core::normalize_to_percent(&aggregate.values);
        to_js_object(&geodash_core::to_series(&aggregate)).map_err(js_err)
    }

    /// Category shares of the current rows, for pie charts.
    pub fn share_chart(&self, label_key: &str, value_key: &str) -> Result<JsValue, JsValue> {
        to_js_object(&geodash_core::share_series(self.state.rows(), label_key, value_key)).map_err(js_err)
    }

    /// Legend rows: [{ color, label }, ...].
    pub fn legend(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&geodash_core::legend()).map_err(|e| e.into())
    }

    /// Map as SVG text, or an error before data arrives.
    #[wasm_bindgen(js_name = "to_svg")]
    pub fn to_svg(&self) -> Result<String, JsValue> {
        let view = self.state.view(&self.store)
            .ok_or_else(|| js_err("No dataset loaded"))?;
        view.layer.to_svg_string().map_err(js_err)
    }

    /// Raw rows on the current table page.
    pub fn page_rows(&self) -> Result<JsValue, JsValue> {
        to_js_object(self.state.page_rows()).map_err(js_err)
    }

    pub fn page(&self) -> usize { self.state.pagination.page }

    pub fn total_pages(&self) -> usize { self.state.pagination.total_pages(self.state.rows().len()) }

    pub fn next_page(&mut self) { self.state.next_page() }

    pub fn previous_page(&mut self) { self.state.previous_page() }

    /// CSV text of all rows, plus the suggested file name for `dataset`.
    pub fn export_csv(&self, dataset: &str) -> Result<JsValue, JsValue> {
        let mut buffer = Vec::new();
        geodash_core::write_rows_csv(self.state.rows(), &mut buffer).map_err(js_err)?;
        let csv = String::from_utf8(buffer).map_err(js_err)?;
        let name = geodash_core::export_file_name(dataset, &self.state.selection.to_string());
        to_js_object(&serde_json::json!({ "fileName": name, "csv": csv })).map_err(js_err)
    }
}
