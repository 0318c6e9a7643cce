// Low-level database access traits.
// The repository is responsible for a single entity
// and never enforces business rules like the uniqueness
// of unlocked cities.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CityRepo {
    fn create_city(&self, city: NewCity) -> Result<CityId>;
    fn update_city_facts(&self, id: CityId, facts: &CityFacts) -> Result<()>;

    // Deleting cities that don't exist is not an error.
    // The functions return the number of actually deleted cities.
    fn delete_city(&self, id: CityId) -> Result<usize>;
    fn delete_cities(&self, ids: &[CityId]) -> Result<usize>;
    fn delete_all_cities(&self) -> Result<usize>;

    fn get_city(&self, id: CityId) -> Result<City>;
    fn try_get_city(&self, id: CityId) -> Result<Option<City>>;

    // Newest first
    fn all_cities_chronologically(&self) -> Result<Vec<City>>;
    fn count_cities(&self) -> Result<usize>;

    fn city_exists_with_place_id(&self, place_id: &str) -> Result<bool>;
    // Exact, case-sensitive match of both values
    fn city_exists_in_locality(&self, locality: &str, country: &str) -> Result<bool>;
}
