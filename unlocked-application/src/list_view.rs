use super::*;
use crate::prelude::{CityFeed, CitySnapshot, CityStore};
use std::{collections::HashSet, sync::Arc};
use tokio::sync::watch;
use unlocked_core::usecases::CityFilter;

/// The filterable list of unlocked cities.
///
/// Both the filtered cities and the available countries are
/// recomputed from scratch whenever the store publishes a new
/// snapshot or the filter changes.
pub struct CityListView {
    store: CityStore,
    feed: CityFeed,
    cities: CitySnapshot,
    filter: CityFilter,
    filtered_cities: watch::Sender<CitySnapshot>,
    available_countries: watch::Sender<Arc<[String]>>,
}

impl CityListView {
    pub fn new(store: CityStore) -> Self {
        let mut feed = store.observe_all();
        let cities = feed.latest();
        let (filtered_cities, _) = watch::channel(CitySnapshot::from(Vec::new()));
        let (available_countries, _) = watch::channel(Arc::<[String]>::from(Vec::new()));
        let mut view = Self {
            store,
            feed,
            cities,
            filter: CityFilter::default(),
            filtered_cities,
            available_countries,
        };
        view.recompute();
        view
    }

    pub fn search_query(&self) -> &str {
        &self.filter.text
    }

    pub fn selected_countries(&self) -> &HashSet<String> {
        &self.filter.countries
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.text = query.into();
        self.recompute();
    }

    /// Select or deselect a country.
    pub fn toggle_country_filter(&mut self, country: &str) {
        if !self.filter.countries.remove(country) {
            self.filter.countries.insert(country.to_owned());
        }
        self.recompute();
    }

    pub fn clear_country_filters(&mut self) {
        self.filter.countries.clear();
        self.recompute();
    }

    pub fn all_cities(&self) -> CitySnapshot {
        Arc::clone(&self.cities)
    }

    pub fn filtered_cities(&self) -> CitySnapshot {
        self.filtered_cities.borrow().clone()
    }

    pub fn available_countries(&self) -> Arc<[String]> {
        self.available_countries.borrow().clone()
    }

    pub fn observe_filtered_cities(&self) -> watch::Receiver<CitySnapshot> {
        self.filtered_cities.subscribe()
    }

    pub fn observe_available_countries(&self) -> watch::Receiver<Arc<[String]>> {
        self.available_countries.subscribe()
    }

    /// Pick up the latest snapshot of the store.
    ///
    /// Returns `true` if a new snapshot has been published.
    pub fn refresh(&mut self) -> bool {
        if !self.feed.has_changed() {
            return false;
        }
        self.cities = self.feed.latest();
        self.recompute();
        true
    }

    /// Wait for the next snapshot of the store and recompute the views.
    pub async fn follow(&mut self) {
        // The feed stays open as long as the view holds its store
        if let Some(cities) = self.feed.changed().await {
            self.cities = cities;
            self.recompute();
        }
    }

    pub fn delete_city(&mut self, id: CityId) -> Result<()> {
        self.store.delete_city(id)?;
        self.refresh();
        Ok(())
    }

    pub fn delete_cities(&mut self, ids: &[CityId]) -> Result<usize> {
        let count = self.store.delete_cities(ids)?;
        self.refresh();
        Ok(count)
    }

    fn recompute(&mut self) {
        let filtered = usecases::filter_cities(self.cities.iter(), &self.filter);
        self.filtered_cities.send_replace(filtered.into());
        let countries = usecases::available_countries(self.cities.iter());
        self.available_countries.send_replace(countries.into());
    }
}
