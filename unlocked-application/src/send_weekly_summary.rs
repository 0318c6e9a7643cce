use super::*;
use crate::prelude::CityStore;
use unlocked_core::{gateways::notify::NotificationGateway, usecases::WeeklySummaryFormatter};

/// Deliver a summary of the current snapshot.
///
/// Only reloading the cities may fail, delivery
/// failures are ignored.
pub fn send_weekly_summary<G, F>(
    store: &CityStore,
    gateway: &G,
    formatter: &F,
) -> Result<usecases::WeeklySummary>
where
    G: NotificationGateway + ?Sized,
    F: WeeklySummaryFormatter + ?Sized,
{
    let snapshot = store.refresh().inspect_err(|err| {
        warn!("Failed to load cities for the weekly summary: {err}");
    })?;
    Ok(usecases::send_weekly_summary(&snapshot, gateway, formatter))
}
