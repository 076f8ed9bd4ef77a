mod store;

pub use store::{FeatureKeys, GeoFeature, GeoFeatureStore};
pub(crate) use store::bounds_of;
