use super::*;
use crate::prelude::{CityStore, OperationStatus};

pub fn delete_cities(
    store: &CityStore,
    status: &OperationStatus,
    ids: &[CityId],
) -> Result<usize> {
    status
        .track(|| store.delete_cities(ids))
        .inspect_err(|err| {
            warn!("Failed to delete {} cities: {err}", ids.len());
        })
}

/// Forget all unlocked cities.
pub fn delete_all_cities(store: &CityStore, status: &OperationStatus) -> Result<()> {
    status
        .track(|| store.delete_all_cities())
        .inspect_err(|err| {
            warn!("Failed to delete all cities: {err}");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prelude::OperationState, tests::prelude::*};

    #[test]
    fn delete_selected_cities() {
        let fixture = BackendFixture::new();
        let status = OperationStatus::new();
        let paris_id = fixture.store.insert_city(paris(1_000)).unwrap();
        let lyon_id = fixture.store.insert_city(lyon(2_000)).unwrap();
        let deleted =
            delete_cities(&fixture.store, &status, &[paris_id, CityId::from(999)]).unwrap();
        assert_eq!(1, deleted);
        assert_eq!(OperationState::Succeeded, status.current());
        let remaining: Vec<_> = fixture.store.snapshot().iter().map(|c| c.id).collect();
        assert_eq!(vec![lyon_id], remaining);
    }

    #[test]
    fn delete_everything() {
        let fixture = BackendFixture::new();
        let status = OperationStatus::new();
        fixture.store.insert_city(paris(1_000)).unwrap();
        fixture.store.insert_city(lyon(2_000)).unwrap();
        let count = fixture.store.observe_count();
        delete_all_cities(&fixture.store, &status).unwrap();
        assert_eq!(OperationState::Succeeded, status.current());
        assert_eq!(0, count.get());
        assert!(fixture.store.observe_all().current().is_empty());
    }
}
