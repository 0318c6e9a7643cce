use super::prelude::*;

/// Writes looked up facts back into an existing city.
///
/// Values that could not be looked up keep their current value,
/// e.g. the area that has been estimated from the viewport.
/// Returns `None` if the city has been deleted in the meantime.
pub fn store_city_facts<R>(repo: &R, id: CityId, facts: CityFacts) -> Result<Option<CityFacts>>
where
    R: CityRepo,
{
    let Some(city) = repo.try_get_city(id)? else {
        log::debug!("City {id} has been deleted before its facts could be stored");
        return Ok(None);
    };
    let merged = facts.or(city.facts);
    if merged != city.facts {
        repo.update_city_facts(id, &merged)?;
    }
    Ok(Some(merged))
}
