use std::{borrow::Borrow, fmt, sync::Arc};

use serde::Serialize;

/// ISO3-like country key, stored trimmed and uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CountryCode(Arc<str>);

impl CountryCode {
    /// Code of the precomputed aggregate row shipped with some datasets.
    pub const WORLD: &'static str = "WORLD";

    /// Normalize raw text into a code; blank input has no code.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(Arc::from(trimmed.to_uppercase())))
    }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }

    /// Whether this is the aggregate `WORLD` row rather than a country.
    #[inline] pub fn is_world(&self) -> bool { &*self.0 == Self::WORLD }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str { &self.0 }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}
