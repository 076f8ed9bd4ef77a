mod io;
mod layer;
mod render;

pub use layer::{FOUND_FILL_OPACITY, FeatureStyle, MapLayer, NO_DATA_FILL_OPACITY, StyledFeature, Tooltip};
pub use render::render;
