mod scope;
mod series;

pub use scope::Scope;
pub use series::{AggregateSeries, compute_series};
