use tracing::{debug, info};

use crate::{
    config::Config,
    aggregate::{AggregateSeries, Scope, compute_series},
    chart::{ChartSeries, to_series},
    feature::GeoFeatureStore,
    map::{MapLayer, render},
    record::{Dataset, MIN_WIDE_YEAR, RawRow, normalize_with_min_year, scalar_year},
    table::Pagination,
};

/// Identifies one in-flight fetch; only the most recent ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[inline] pub fn generation(self) -> u64 { self.0 }
}

/// Everything derived from the current snapshot and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub layer: MapLayer<'a>,
    pub aggregate: AggregateSeries,
    pub chart: ChartSeries,
}

/// Mutable dashboard state: selection, table cursor and the latest dataset snapshot.
///
/// Rendering goes through [`DashboardState::view`], which recomputes from the
/// snapshot without touching it.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub selection: Scope,
    pub pagination: Pagination,
    min_wide_year: i32,
    generation: u64,
    rows: Vec<RawRow>,
    dataset: Option<Dataset>,
}

impl Default for DashboardState {
    fn default() -> Self { Self::with_min_year(Pagination::default().rows_per_page, MIN_WIDE_YEAR) }
}

impl DashboardState {
    pub fn new(rows_per_page: usize) -> Self { Self::with_min_year(rows_per_page, MIN_WIDE_YEAR) }

    /// State using the page size and wide-year cutoff from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_min_year(config.rows_per_page, config.min_wide_year)
    }

    fn with_min_year(rows_per_page: usize, min_wide_year: i32) -> Self {
        Self {
            selection: Scope::default(),
            pagination: Pagination::new(rows_per_page),
            min_wide_year,
            generation: 0,
            rows: Vec::new(),
            dataset: None,
        }
    }

    /// Start a fetch. Any earlier ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Install fetched rows if `ticket` is still current; stale results are dropped.
    ///
    /// Scalar-layout rows are kept in ascending `Year` order (stable) when every row has one.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, mut rows: Vec<RawRow>) -> bool {
        if ticket.0 != self.generation {
            debug!(ticket = ticket.0, current = self.generation, "discarding stale fetch");
            return false;
        }

        if rows.iter().all(|row| scalar_year(row).is_some()) {
            rows.sort_by_key(scalar_year);
        }

        let dataset = normalize_with_min_year(&rows, self.min_wide_year);
        info!(rows = rows.len(), records = dataset.len(), "dataset snapshot replaced");
        self.dataset = Some(dataset);
        self.rows = rows;
        self.pagination.reset();
        true
    }

    #[inline] pub fn select(&mut self, scope: Scope) { self.selection = scope }

    #[inline] pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }

    /// Raw rows of the current snapshot, in fetch order.
    #[inline] pub fn rows(&self) -> &[RawRow] { &self.rows }

    /// Raw rows on the current table page.
    pub fn page_rows(&self) -> &[RawRow] { self.pagination.slice(&self.rows) }

    #[inline] pub fn next_page(&mut self) { self.pagination.next(self.rows.len()) }

    #[inline] pub fn previous_page(&mut self) { self.pagination.previous() }

    /// Recompute map layer and chart for the current selection.
    ///
    /// `None` until a dataset has arrived, or when it contains no years.
    pub fn view<'a>(&self, store: &'a GeoFeatureStore) -> Option<DashboardView<'a>> {
        let dataset = self.dataset.as_ref()?;
        let years = dataset.years();
        if years.is_empty() { return None }

        let aggregate = compute_series(&dataset.records, &years, &self.selection);
        Some(DashboardView {
            layer: render(store.features(), &dataset.records),
            chart: to_series(&aggregate),
            aggregate,
        })
    }
}
