use super::*;
use std::sync::Arc;
use tokio::sync::watch;
use unlocked_db_sqlite::DbConnection;

/// Immutable list of all cities, most recently unlocked first.
pub type CitySnapshot = Arc<[City]>;

/// Durable collection of unlocked cities.
///
/// Every committed mutation publishes a new snapshot
/// to all subscribers. Clones share the same database
/// and the same feed.
#[derive(Clone)]
pub struct CityStore {
    connections: sqlite::Connections,
    feed: Arc<watch::Sender<CitySnapshot>>,
}

impl CityStore {
    pub fn open(connections: sqlite::Connections) -> Result<Self> {
        let cities = connections.shared()?.all_cities_chronologically()?;
        debug!("Loaded {} unlocked cities", cities.len());
        let (feed, _) = watch::channel(CitySnapshot::from(cities));
        Ok(Self {
            connections,
            feed: Arc::new(feed),
        })
    }

    pub fn connections(&self) -> &sqlite::Connections {
        &self.connections
    }

    /// Subscribe to all future snapshots.
    pub fn observe_all(&self) -> CityFeed {
        CityFeed {
            rx: self.feed.subscribe(),
        }
    }

    pub fn observe_count(&self) -> LiveCount {
        LiveCount {
            feed: self.observe_all(),
        }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> CitySnapshot {
        self.feed.borrow().clone()
    }

    /// Reload all cities and publish them if anything has changed.
    pub fn refresh(&self) -> Result<CitySnapshot> {
        let cities = self.connections.shared()?.all_cities_chronologically()?;
        self.publish(cities);
        Ok(self.snapshot())
    }

    pub fn city_by_id(&self, id: CityId) -> Result<Option<City>> {
        Ok(self.connections.shared()?.try_get_city(id)?)
    }

    pub fn count_cities(&self) -> Result<usize> {
        Ok(self.connections.shared()?.count_cities()?)
    }

    pub fn exists_by_place_id(&self, place_id: &str) -> Result<bool> {
        Ok(self.connections.shared()?.city_exists_with_place_id(place_id)?)
    }

    pub fn exists_by_locality_and_country(&self, locality: &str, country: &str) -> Result<bool> {
        Ok(self
            .connections
            .shared()?
            .city_exists_in_locality(locality, country)?)
    }

    pub fn is_duplicate(
        &self,
        locality: Option<&str>,
        country: Option<&str>,
        place_id: Option<&str>,
    ) -> Result<bool> {
        let db = self.connections.shared()?;
        Ok(usecases::is_duplicate(&db, locality, country, place_id)?)
    }

    /// Insert a city without checking for duplicates.
    pub fn insert_city(&self, new_city: NewCity) -> Result<CityId> {
        self.write(|conn| conn.create_city(new_city))
    }

    /// Insert a city unless it has already been unlocked.
    pub fn create_city(&self, new_city: NewCity) -> Result<City> {
        self.write(|conn| usecases::create_new_city(conn, new_city))
    }

    /// Deleting a city that doesn't exist is not an error.
    pub fn delete_city(&self, id: CityId) -> Result<()> {
        let count = self.write(|conn| conn.delete_city(id))?;
        if count == 0 {
            debug!("City {id} doesn't exist");
        }
        Ok(())
    }

    pub fn delete_cities(&self, ids: &[CityId]) -> Result<usize> {
        self.write(|conn| conn.delete_cities(ids))
    }

    pub fn delete_all_cities(&self) -> Result<()> {
        let count = self.write(|conn| conn.delete_all_cities())?;
        info!("Deleted all {count} cities");
        Ok(())
    }

    /// Returns `None` if the city has been deleted in the meantime.
    pub fn store_city_facts(&self, id: CityId, facts: CityFacts) -> Result<Option<CityFacts>> {
        self.write(|conn| usecases::store_city_facts(conn, id, facts))
    }

    // Runs the mutation within a transaction and publishes
    // the new snapshot while still holding the write lock.
    // Otherwise concurrent writers might publish their
    // snapshots out of order. If reloading fails the committed
    // change is published by the next successful write or refresh.
    fn write<T, F, E>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DbConnection) -> std::result::Result<T, E>,
        E: Into<usecases::Error>,
    {
        let mut db = self.connections.exclusive()?;
        let result = db.transaction(f)?;
        match db.all_cities_chronologically() {
            Ok(cities) => {
                self.publish(cities);
            }
            Err(err) => {
                error!("Failed to reload cities after a committed change: {err}");
            }
        }
        Ok(result)
    }

    fn publish(&self, cities: Vec<City>) -> bool {
        self.feed.send_if_modified(|snapshot| {
            if **snapshot == *cities {
                return false;
            }
            *snapshot = cities.into();
            true
        })
    }
}

/// Live sequence of full snapshots.
///
/// Each subscriber receives every change independently.
pub struct CityFeed {
    rx: watch::Receiver<CitySnapshot>,
}

impl CityFeed {
    /// The latest snapshot without marking it as seen.
    pub fn current(&self) -> CitySnapshot {
        self.rx.borrow().clone()
    }

    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// The latest snapshot, marking it as seen.
    pub fn latest(&mut self) -> CitySnapshot {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next snapshot.
    ///
    /// Returns `None` after the store has been dropped.
    pub async fn changed(&mut self) -> Option<CitySnapshot> {
        self.rx.changed().await.ok()?;
        Some(self.latest())
    }
}

impl Clone for CityFeed {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

/// Number of cities, derived from the snapshot feed.
#[derive(Clone)]
pub struct LiveCount {
    feed: CityFeed,
}

impl LiveCount {
    pub fn get(&self) -> usize {
        self.feed.current().len()
    }

    pub async fn changed(&mut self) -> Option<usize> {
        self.feed.changed().await.map(|snapshot| snapshot.len())
    }
}
