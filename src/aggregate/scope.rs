use std::fmt;

use serde::{Serialize, Serializer};

use crate::record::CountryCode;

/// What an aggregate series describes: one country, or the synthetic world average.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    World,
    Country(CountryCode),
}

impl Scope {
    /// Parse a selector value: `world` (any case) or a country code.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("world") {
            return Some(Self::World);
        }
        CountryCode::parse(raw).map(Self::Country)
    }

    #[inline] pub fn is_world(&self) -> bool { matches!(self, Self::World) }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => f.write_str("world"),
            Self::Country(code) => write!(f, "{code}"),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
