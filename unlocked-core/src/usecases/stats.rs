use super::prelude::*;
use itertools::Itertools as _;
use std::cmp::Ordering;
use time::Month;

const TOP_COUNTRIES_LIMIT: usize = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Statistics about all unlocked cities.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelStats<'a> {
    pub overview: Overview,
    pub top_countries: Vec<CountryShare>,
    pub extremes: Extremes<'a>,
    pub population: Option<PopulationStats<'a>>,
    pub timeline: Option<Timeline<'a>>,
    pub fun_facts: FunFacts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_cities: usize,
    pub total_countries: usize,
    pub total_population: u64,
    pub total_area_km2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryShare {
    /// `None` collects all cities without a country
    pub country: Option<String>,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extremes<'a> {
    pub northernmost: Option<&'a City>,
    pub southernmost: Option<&'a City>,
    pub easternmost: Option<&'a City>,
    pub westernmost: Option<&'a City>,
    pub highest: Option<&'a City>,
}

/// Only cities with a known population greater than zero are considered.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationStats<'a> {
    pub most_populated: &'a City,
    pub least_populated: &'a City,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<'a> {
    pub first_unlocked: &'a City,
    pub last_unlocked: &'a City,
    pub most_active_month: MonthActivity,
}

/// Number of unlocks within a calendar month (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthActivity {
    pub year: i32,
    pub month: Month,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunFacts {
    pub longest_name: Option<String>,
    /// The country with the largest summed area of all its cities
    pub largest_country_area: Option<(String, f64)>,
    pub average_days_between_unlocks: Option<i64>,
}

// Returns the first of multiple maximum elements.
fn first_max_by<T, F>(items: impl IntoIterator<Item = T>, mut compare: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items.into_iter().reduce(|max, next| {
        if compare(&next, &max) == Ordering::Greater {
            next
        } else {
            max
        }
    })
}

fn first_min_by<T, F>(items: impl IntoIterator<Item = T>, mut compare: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    first_max_by(items, |a, b| compare(b, a))
}

// Counts occurrences in order of their first appearance.
fn ordered_counts<K: PartialEq>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

impl<'a> TravelStats<'a> {
    /// Calculates the statistics from a snapshot of cities,
    /// ordered from the most recently unlocked to the oldest.
    pub fn from_cities(cities: &'a [City]) -> Self {
        Self {
            overview: Overview::from_cities(cities),
            top_countries: top_countries(cities),
            extremes: Extremes::from_cities(cities),
            population: PopulationStats::from_cities(cities),
            timeline: Timeline::from_cities(cities),
            fun_facts: FunFacts::from_cities(cities),
        }
    }
}

impl Overview {
    pub fn from_cities(cities: &[City]) -> Self {
        let total_countries = cities
            .iter()
            .filter_map(|c| c.country.as_deref())
            .unique()
            .count();
        let total_population = cities
            .iter()
            .filter_map(|c| c.facts.population)
            .fold(0u64, u64::saturating_add);
        let total_area_km2 = cities.iter().filter_map(|c| c.facts.area_km2).sum();
        Self {
            total_cities: cities.len(),
            total_countries,
            total_population,
            total_area_km2,
        }
    }
}

/// The countries with the most unlocked cities.
///
/// Countries with the same number of cities keep the order
/// of their first appearance.
pub fn top_countries(cities: &[City]) -> Vec<CountryShare> {
    let total = cities.len();
    let mut counts = ordered_counts(cities.iter().map(|c| c.country.as_deref()));
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    counts
        .into_iter()
        .take(TOP_COUNTRIES_LIMIT)
        .map(|(country, count)| CountryShare {
            country: country.map(ToOwned::to_owned),
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

impl<'a> Extremes<'a> {
    pub fn from_cities(cities: &'a [City]) -> Self {
        let with_pos = || cities.iter().filter_map(|c| c.pos.map(|pos| (c, pos)));
        let lat = |(_, a): &(&City, MapPoint), (_, b): &(&City, MapPoint)| {
            a.lat_deg().total_cmp(&b.lat_deg())
        };
        let lng = |(_, a): &(&City, MapPoint), (_, b): &(&City, MapPoint)| {
            a.lng_deg().total_cmp(&b.lng_deg())
        };
        Self {
            northernmost: first_max_by(with_pos(), lat).map(|(c, _)| c),
            southernmost: first_min_by(with_pos(), lat).map(|(c, _)| c),
            easternmost: first_max_by(with_pos(), lng).map(|(c, _)| c),
            westernmost: first_min_by(with_pos(), lng).map(|(c, _)| c),
            highest: first_max_by(
                cities
                    .iter()
                    .filter_map(|c| c.facts.elevation_m.map(|elevation| (c, elevation))),
                |(_, a), (_, b)| a.total_cmp(b),
            )
            .map(|(c, _)| c),
        }
    }
}

impl<'a> PopulationStats<'a> {
    pub fn from_cities(cities: &'a [City]) -> Option<Self> {
        let populated: Vec<_> = cities
            .iter()
            .filter_map(|c| c.facts.population.filter(|p| *p > 0).map(|p| (c, p)))
            .collect();
        let (most_populated, _) =
            first_max_by(populated.iter().copied(), |(_, a), (_, b)| a.cmp(b))?;
        let (least_populated, _) =
            first_min_by(populated.iter().copied(), |(_, a), (_, b)| a.cmp(b))?;
        let average =
            populated.iter().map(|(_, p)| *p as f64).sum::<f64>() / populated.len() as f64;
        Some(Self {
            most_populated,
            least_populated,
            average,
        })
    }
}

impl<'a> Timeline<'a> {
    pub fn from_cities(cities: &'a [City]) -> Option<Self> {
        let mut chronologically: Vec<_> = cities.iter().collect();
        chronologically.sort_by_key(|c| c.unlocked_at);
        let first_unlocked = *chronologically.first()?;
        let last_unlocked = *chronologically.last()?;
        let months = ordered_counts(
            cities
                .iter()
                .filter_map(|c| c.unlocked_at.to_utc())
                .map(|dt| (dt.year(), dt.month())),
        );
        let ((year, month), count) = first_max_by(months, |(_, a), (_, b)| a.cmp(b))?;
        Some(Self {
            first_unlocked,
            last_unlocked,
            most_active_month: MonthActivity { year, month, count },
        })
    }
}

impl FunFacts {
    pub fn from_cities(cities: &[City]) -> Self {
        let longest_name = first_max_by(
            cities.iter().filter_map(|c| c.locality.as_deref()),
            |a, b| a.chars().count().cmp(&b.chars().count()),
        )
        .map(ToOwned::to_owned);

        let mut country_areas: Vec<(&str, f64)> = Vec::new();
        for city in cities {
            let (Some(country), Some(area)) = (city.country.as_deref(), city.facts.area_km2) else {
                continue;
            };
            match country_areas.iter_mut().find(|(c, _)| *c == country) {
                Some((_, sum)) => *sum += area,
                None => country_areas.push((country, area)),
            }
        }
        let largest_country_area = first_max_by(country_areas, |(_, a), (_, b)| a.total_cmp(b))
            .map(|(country, area)| (country.to_owned(), area));

        let average_days_between_unlocks = (cities.len() > 1).then(|| {
            let mut timestamps: Vec<_> = cities.iter().map(|c| c.unlocked_at).collect();
            timestamps.sort();
            let diffs: Vec<_> = timestamps
                .windows(2)
                .map(|w| (w[1] - w[0]).whole_milliseconds() as f64)
                .collect();
            let avg = diffs.iter().sum::<f64>() / diffs.len() as f64;
            (avg / MILLIS_PER_DAY).round() as i64
        });

        Self {
            longest_name,
            largest_country_area,
            average_days_between_unlocks,
        }
    }
}
