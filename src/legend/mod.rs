mod bucket;
mod color;

pub use bucket::{LEGEND, LegendBucket, LegendColor, LegendEntry, NO_DATA_COLOR, color_for, legend};
pub use color::Rgb;
