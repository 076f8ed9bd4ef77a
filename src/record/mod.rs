mod code;
mod normalize;
mod raw;
mod record;

pub use code::CountryCode;
pub use normalize::{CODE_KEY, INDICATOR_KEY, MIN_WIDE_YEAR, NAME_KEY, normalize, normalize_with_min_year};
pub use raw::RawRow;
pub(crate) use raw::{coerce_value, scalar_year};
pub use record::{Dataset, Record};
