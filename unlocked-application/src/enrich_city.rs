use super::*;
use crate::prelude::CityStore;
use std::{sync::Arc, thread};
use unlocked_core::gateways::enrichment::CityFactsGateway;

/// Look up additional facts about a city and store them.
///
/// Cities without a locality are skipped. Returns the stored
/// facts or `None` if nothing could be found.
pub fn enrich_city<G>(store: &CityStore, gateway: &G, city: &City) -> Result<Option<CityFacts>>
where
    G: CityFactsGateway + ?Sized,
{
    let Some(name) = city.locality.as_deref() else {
        debug!("No locality of city {} to look up", city.id);
        return Ok(None);
    };
    let Some(facts) = gateway.lookup_city_facts(name, city.country.as_deref()) else {
        debug!("No facts found about {name}");
        return Ok(None);
    };
    store.store_city_facts(city.id, facts)
}

/// Enrich a city in the background.
///
/// Failures are only logged and the city remains as it is.
pub fn spawn_city_enrichment<G>(
    store: CityStore,
    gateway: Arc<G>,
    city: City,
) -> thread::JoinHandle<()>
where
    G: CityFactsGateway + Send + Sync + ?Sized + 'static,
{
    thread::spawn(move || match enrich_city(&store, &*gateway, &city) {
        Ok(Some(facts)) => {
            debug!("Stored facts about {}: {facts:?}", city.display_name());
        }
        Ok(None) => {}
        Err(err) => {
            warn!(
                "Failed to store facts about {}: {err}",
                city.display_name()
            );
        }
    })
}
