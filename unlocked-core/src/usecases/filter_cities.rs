use super::prelude::*;
use itertools::Itertools as _;
use std::collections::HashSet;

/// Search text and country selection of the city list.
///
/// An empty text and an empty country selection both
/// mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityFilter {
    pub text: String,
    pub countries: HashSet<String>,
}

impl CityFilter {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.countries.is_empty()
    }

    pub fn matches(&self, city: &City) -> bool {
        self.matches_text(city) && self.matches_country(city)
    }

    /// Case-insensitive substring search in the locality, country,
    /// administrative area and address of a city.
    pub fn matches_text(&self, city: &City) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let text = self.text.to_lowercase();
        [
            city.locality.as_deref(),
            city.country.as_deref(),
            city.administrative_area.as_deref(),
            Some(city.address.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&text))
    }

    pub fn matches_country(&self, city: &City) -> bool {
        if self.countries.is_empty() {
            return true;
        }
        city.country
            .as_ref()
            .is_some_and(|country| self.countries.contains(country))
    }
}

/// Selects all matching cities in the given order.
pub fn filter_cities<'a, I>(cities: I, filter: &CityFilter) -> Vec<City>
where
    I: IntoIterator<Item = &'a City>,
{
    cities
        .into_iter()
        .filter(|city| filter.matches(city))
        .cloned()
        .collect()
}

/// All distinct countries in order of their first occurrence.
pub fn available_countries<'a, I>(cities: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a City>,
{
    cities
        .into_iter()
        .filter_map(|city| city.country.as_deref())
        .unique()
        .map(ToOwned::to_owned)
        .collect()
}
