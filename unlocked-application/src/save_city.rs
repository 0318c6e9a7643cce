use super::*;
use crate::prelude::{spawn_city_enrichment, CityStore, OperationStatus};
use std::{sync::Arc, thread::JoinHandle};
use unlocked_core::gateways::enrichment::CityFactsGateway;

#[derive(Debug)]
pub struct SavedCity {
    pub city: City,
    /// Pending lookup of additional facts
    pub enrichment: Option<JoinHandle<()>>,
}

/// Unlock the selected place.
///
/// The city is stored immediately. Additional facts
/// are looked up afterwards in the background and
/// never affect the outcome.
pub fn save_city<G>(
    store: &CityStore,
    gateway: &Arc<G>,
    status: &OperationStatus,
    selection: usecases::PlaceSelection,
    unlocked_at: TimestampMs,
) -> Result<SavedCity>
where
    G: CityFactsGateway + Send + Sync + ?Sized + 'static,
{
    let city = status
        .track(|| -> Result<City> {
            let new_city = usecases::prepare_new_city(selection, unlocked_at)?;
            store.create_city(new_city)
        })
        .inspect_err(|err| {
            warn!("Failed to save city: {err}");
        })?;
    info!("Unlocked {} ({})", city.display_name(), city.id);
    let enrichment = city
        .locality
        .is_some()
        .then(|| spawn_city_enrichment(store.clone(), Arc::clone(gateway), city.clone()));
    Ok(SavedCity { city, enrichment })
}
