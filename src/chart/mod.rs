mod normalize;
mod series;
mod share;

pub use normalize::normalize_to_percent;
pub use series::{AxisBounds, ChartDataset, ChartSeries, to_series};
pub use share::{SHARE_PALETTE, ShareSeries, share_series};
