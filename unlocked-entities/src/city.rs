use crate::{geo::*, id::*, time::*};

/// Optional facts about a city that are looked up
/// asynchronously after the city has been unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CityFacts {
    /// Area in km²
    pub area_km2: Option<f64>,
    pub population: Option<u64>,
    /// Elevation above sea level in meters
    pub elevation_m: Option<f64>,
}

impl CityFacts {
    pub const fn is_empty(&self) -> bool {
        self.area_km2.is_none() && self.population.is_none() && self.elevation_m.is_none()
    }

    /// Fill in all values that are missing in `self`.
    pub fn or(self, other: Self) -> Self {
        Self {
            area_km2: self.area_km2.or(other.area_km2),
            population: self.population.or(other.population),
            elevation_m: self.elevation_m.or(other.elevation_m),
        }
    }
}

// All attributes of a city except the id
// that will be assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub place_id: Option<String>,
    pub address: String,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub pos: Option<MapPoint>,
    pub viewport: Option<MapBbox>,
    pub formatted_address: Option<String>,
    pub facts: CityFacts,
    pub unlocked_at: TimestampMs,
    pub notes: Option<String>,
}

impl NewCity {
    pub fn into_city(self, id: CityId) -> City {
        let Self {
            place_id,
            address,
            locality,
            administrative_area,
            country,
            pos,
            viewport,
            formatted_address,
            facts,
            unlocked_at,
            notes,
        } = self;
        City {
            id,
            place_id,
            address,
            locality,
            administrative_area,
            country,
            pos,
            viewport,
            formatted_address,
            facts,
            unlocked_at,
            notes,
        }
    }
}

/// An unlocked city.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: CityId,
    /// Opaque id of the geocoding provider
    pub place_id: Option<String>,
    pub address: String,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub pos: Option<MapPoint>,
    pub viewport: Option<MapBbox>,
    pub formatted_address: Option<String>,
    pub facts: CityFacts,
    pub unlocked_at: TimestampMs,
    pub notes: Option<String>,
}

impl City {
    /// The name of the city or the address as a fallback.
    pub fn display_name(&self) -> &str {
        self.locality.as_deref().unwrap_or(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_city(address: &str, locality: Option<&str>) -> NewCity {
        NewCity {
            place_id: None,
            address: address.into(),
            locality: locality.map(Into::into),
            administrative_area: None,
            country: None,
            pos: None,
            viewport: None,
            formatted_address: None,
            facts: Default::default(),
            unlocked_at: TimestampMs::from_millis(0),
            notes: None,
        }
    }

    #[test]
    fn display_name_falls_back_to_address() {
        let city = new_city("Somewhere 1, 12345", None).into_city(CityId::from(1));
        assert_eq!("Somewhere 1, 12345", city.display_name());
        let city = new_city("Paris, France", Some("Paris")).into_city(CityId::from(2));
        assert_eq!("Paris", city.display_name());
    }

    #[test]
    fn merge_facts() {
        let looked_up = CityFacts {
            area_km2: None,
            population: Some(2_100_000),
            elevation_m: Some(35.0),
        };
        let estimated = CityFacts {
            area_km2: Some(105.4),
            ..Default::default()
        };
        let merged = looked_up.or(estimated);
        assert_eq!(Some(105.4), merged.area_km2);
        assert_eq!(Some(2_100_000), merged.population);
        assert!(!merged.is_empty());
        assert!(CityFacts::default().is_empty());
    }
}
