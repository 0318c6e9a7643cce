use super::prelude::*;

/// Checks if a city has already been unlocked.
///
/// A city is a duplicate if either the place id of the geocoding
/// provider or the pair of locality and country matches an existing
/// city. The second check is only performed if both values are present.
pub fn is_duplicate<R>(
    repo: &R,
    locality: Option<&str>,
    country: Option<&str>,
    place_id: Option<&str>,
) -> Result<bool>
where
    R: CityRepo,
{
    if let Some(place_id) = place_id {
        if repo.city_exists_with_place_id(place_id)? {
            log::debug!("A city with place id {place_id} has already been unlocked");
            return Ok(true);
        }
    }
    if let (Some(locality), Some(country)) = (locality, country) {
        return Ok(repo.city_exists_in_locality(locality, country)?);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use unlocked_entities::builders::*;

    fn paris() -> NewCity {
        NewCity::build()
            .place_id("ChIJD7fiBh9u5kcRYJSMaMOCCwQ")
            .address("Paris, France")
            .locality("Paris")
            .country("France")
            .finish()
    }

    #[test]
    fn duplicate_by_place_id_regardless_of_locality() {
        let db = MockDb::default();
        db.create_city(paris()).unwrap();
        assert!(is_duplicate(
            &db,
            Some("Lyon"),
            Some("Germany"),
            Some("ChIJD7fiBh9u5kcRYJSMaMOCCwQ")
        )
        .unwrap());
    }

    #[test]
    fn duplicate_by_locality_and_country_with_different_place_id() {
        let db = MockDb::default();
        db.create_city(paris()).unwrap();
        assert!(is_duplicate(&db, Some("Paris"), Some("France"), Some("other")).unwrap());
        assert!(is_duplicate(&db, Some("Paris"), Some("France"), None).unwrap());
    }

    #[test]
    fn no_duplicate() {
        let db = MockDb::default();
        db.create_city(paris()).unwrap();
        assert!(!is_duplicate(&db, Some("Paris"), Some("Germany"), None).unwrap());
        assert!(!is_duplicate(&db, Some("paris"), Some("France"), None).unwrap());
        assert!(!is_duplicate(&db, Some("Paris"), None, None).unwrap());
        assert!(!is_duplicate(&db, None, Some("France"), Some("other")).unwrap());
    }

    #[test]
    fn empty_store_has_no_duplicates() {
        let db = MockDb::default();
        assert!(!is_duplicate(&db, Some("Paris"), Some("France"), Some("x")).unwrap());
    }
}
