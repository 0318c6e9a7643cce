pub mod prelude {
    use std::sync::Mutex;

    pub use unlocked_core::{
        entities::*,
        gateways::enrichment::CityFactsGateway,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use unlocked_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows, prelude::CityStore};

    pub const PARIS_PLACE_ID: &str = "ChIJD7fiBh9u5kcRYJSMaMOCCwQ";

    pub fn paris(unlocked_at: i64) -> NewCity {
        NewCity::build()
            .place_id(PARIS_PLACE_ID)
            .address("Paris, France")
            .locality("Paris")
            .administrative_area("Île-de-France")
            .country("France")
            .pos(MapPoint::from_lat_lng_deg(48.8566, 2.3522))
            .unlocked_at(unlocked_at)
            .finish()
    }

    pub fn lyon(unlocked_at: i64) -> NewCity {
        NewCity::build()
            .place_id("ChIJl4foalHq9EcR8CG75CqrCAQ")
            .address("Lyon, France")
            .locality("Lyon")
            .administrative_area("Auvergne-Rhône-Alpes")
            .country("France")
            .pos(MapPoint::from_lat_lng_deg(45.764, 4.8357))
            .unlocked_at(unlocked_at)
            .finish()
    }

    pub fn paris_facts() -> CityFacts {
        CityFacts {
            area_km2: Some(105.4),
            population: Some(2_102_650),
            elevation_m: Some(35.0),
        }
    }

    /// Answers every request with the same facts.
    pub struct MockFactsGateway {
        facts: Option<CityFacts>,
        pub requests: Mutex<Vec<(String, Option<String>)>>,
    }

    impl MockFactsGateway {
        pub fn new(facts: Option<CityFacts>) -> Self {
            Self {
                facts,
                requests: Default::default(),
            }
        }
    }

    impl CityFactsGateway for MockFactsGateway {
        fn lookup_city_facts(&self, city_name: &str, country: Option<&str>) -> Option<CityFacts> {
            self.requests
                .lock()
                .unwrap()
                .push((city_name.to_owned(), country.map(ToOwned::to_owned)));
            self.facts
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub store: CityStore,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            unlocked_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            let store = CityStore::open(db_connections.clone()).unwrap();
            Self {
                db_connections,
                store,
            }
        }
    }
}
