use super::prelude::*;
use crate::repositories::Error as RepoError;
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repository for testing use cases.
#[derive(Default)]
pub struct MockDb {
    pub cities: RefCell<Vec<City>>,
    last_id: Cell<i64>,
}

impl MockDb {
    pub fn with_cities(cities: Vec<NewCity>) -> Self {
        let db = Self::default();
        for city in cities {
            db.create_city(city).unwrap();
        }
        db
    }
}

impl CityRepo for MockDb {
    fn create_city(&self, city: NewCity) -> RepoResult<CityId> {
        let id = CityId::from(self.last_id.get() + 1);
        self.last_id.set(id.to_inner());
        self.cities.borrow_mut().push(city.into_city(id));
        Ok(id)
    }

    fn update_city_facts(&self, id: CityId, facts: &CityFacts) -> RepoResult<()> {
        let mut cities = self.cities.borrow_mut();
        let city = cities
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepoError::NotFound)?;
        city.facts = *facts;
        Ok(())
    }

    fn delete_city(&self, id: CityId) -> RepoResult<usize> {
        self.delete_cities(&[id])
    }

    fn delete_cities(&self, ids: &[CityId]) -> RepoResult<usize> {
        let mut cities = self.cities.borrow_mut();
        let count_before = cities.len();
        cities.retain(|c| !ids.contains(&c.id));
        Ok(count_before - cities.len())
    }

    fn delete_all_cities(&self) -> RepoResult<usize> {
        Ok(self.cities.borrow_mut().drain(..).count())
    }

    fn get_city(&self, id: CityId) -> RepoResult<City> {
        self.try_get_city(id)?.ok_or(RepoError::NotFound)
    }

    fn try_get_city(&self, id: CityId) -> RepoResult<Option<City>> {
        Ok(self.cities.borrow().iter().find(|c| c.id == id).cloned())
    }

    fn all_cities_chronologically(&self) -> RepoResult<Vec<City>> {
        let mut cities = self.cities.borrow().clone();
        cities.sort_by(|a, b| {
            b.unlocked_at
                .cmp(&a.unlocked_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(cities)
    }

    fn count_cities(&self) -> RepoResult<usize> {
        Ok(self.cities.borrow().len())
    }

    fn city_exists_with_place_id(&self, place_id: &str) -> RepoResult<bool> {
        Ok(self
            .cities
            .borrow()
            .iter()
            .any(|c| c.place_id.as_deref() == Some(place_id)))
    }

    fn city_exists_in_locality(&self, locality: &str, country: &str) -> RepoResult<bool> {
        Ok(self.cities.borrow().iter().any(|c| {
            c.locality.as_deref() == Some(locality) && c.country.as_deref() == Some(country)
        }))
    }
}
