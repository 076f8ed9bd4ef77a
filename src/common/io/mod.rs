mod csv;
mod geojson;
mod json;
mod svg;

pub use csv::*;
pub(crate) use geojson::*;
pub use json::*;
pub(crate) use svg::*;
