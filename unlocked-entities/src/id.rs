use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a stored city.
///
/// The value is assigned by the store when a city is inserted
/// and never changes nor gets reused afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(i64);

impl CityId {
    pub const fn from_inner(inner: i64) -> Self {
        Self(inner)
    }

    pub const fn to_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for CityId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<CityId> for i64 {
    fn from(from: CityId) -> Self {
        from.0
    }
}

impl FromStr for CityId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
