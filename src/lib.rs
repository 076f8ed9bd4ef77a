#![doc = "GeoDash public API"]
mod aggregate;
mod chart;
mod common;
mod config;
mod feature;
mod legend;
mod map;
mod record;
mod session;
mod table;

#[doc(inline)]
pub use aggregate::{AggregateSeries, Scope, compute_series};

#[doc(inline)]
pub use chart::{AxisBounds, ChartDataset, ChartSeries, SHARE_PALETTE, ShareSeries, normalize_to_percent, share_series, to_series};

#[doc(inline)]
pub use common::{PendingWrite, read_rows_from_file, read_rows_from_str, write_file_atomic, write_json_file, write_rows_csv};

#[cfg(feature = "download")]
#[doc(inline)]
pub use common::{endpoint_url, fetch_rows};

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use feature::{FeatureKeys, GeoFeature, GeoFeatureStore};

#[doc(inline)]
pub use legend::{LEGEND, LegendBucket, LegendColor, LegendEntry, NO_DATA_COLOR, Rgb, color_for, legend};

#[doc(inline)]
pub use map::{FOUND_FILL_OPACITY, FeatureStyle, MapLayer, NO_DATA_FILL_OPACITY, StyledFeature, Tooltip, render};

#[doc(inline)]
pub use record::{CODE_KEY, CountryCode, Dataset, INDICATOR_KEY, MIN_WIDE_YEAR, NAME_KEY, RawRow, Record, normalize, normalize_with_min_year};

#[doc(inline)]
pub use session::{DashboardState, DashboardView, FetchTicket};

#[doc(inline)]
pub use table::{DEFAULT_ROWS_PER_PAGE, Pagination, export_csv, export_file_name};
