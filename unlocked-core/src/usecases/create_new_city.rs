use super::{is_duplicate, prelude::*};
use crate::bbox::estimate_area_km2;

/// Corners of the viewport of a selected place in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub south_west_lat: f64,
    pub south_west_lng: f64,
    pub north_east_lat: f64,
    pub north_east_lng: f64,
}

/// Structured result of selecting a place with the geocoding provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceSelection {
    pub place_id: Option<String>,
    pub address: String,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub viewport: Option<Viewport>,
    pub formatted_address: Option<String>,
    pub notes: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// Validates a selected place and turns it into a new city.
///
/// The area is estimated from the viewport until
/// more accurate facts are available.
pub fn prepare_new_city(selection: PlaceSelection, unlocked_at: TimestampMs) -> Result<NewCity> {
    let PlaceSelection {
        place_id,
        address,
        locality,
        administrative_area,
        country,
        lat,
        lng,
        viewport,
        formatted_address,
        notes,
    } = selection;
    let address = address.trim().to_owned();
    if address.is_empty() {
        return Err(Error::EmptyAddress);
    }
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => {
            Some(MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?)
        }
        (None, None) => None,
        _ => return Err(Error::InvalidPosition),
    };
    let viewport = viewport
        .map(|vp| {
            let bbox = MapBbox::new(
                MapPoint::from_lat_lng_deg(vp.south_west_lat, vp.south_west_lng),
                MapPoint::from_lat_lng_deg(vp.north_east_lat, vp.north_east_lng),
            );
            if bbox.is_valid() {
                Ok(bbox)
            } else {
                Err(Error::Bbox)
            }
        })
        .transpose()?;
    let facts = CityFacts {
        area_km2: viewport.as_ref().map(estimate_area_km2),
        ..Default::default()
    };
    Ok(NewCity {
        place_id: non_empty(place_id),
        address,
        locality: non_empty(locality),
        administrative_area: non_empty(administrative_area),
        country: non_empty(country),
        pos,
        viewport,
        formatted_address: non_empty(formatted_address),
        facts,
        unlocked_at,
        notes: non_empty(notes),
    })
}

/// Stores a new city unless it has already been unlocked.
pub fn create_new_city<R>(repo: &R, new_city: NewCity) -> Result<City>
where
    R: CityRepo,
{
    if is_duplicate(
        repo,
        new_city.locality.as_deref(),
        new_city.country.as_deref(),
        new_city.place_id.as_deref(),
    )? {
        return Err(Error::AlreadyUnlocked);
    }
    let id = repo.create_city(new_city.clone())?;
    log::debug!("Unlocked city {id}: {}", new_city.address);
    Ok(new_city.into_city(id))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn paris_selection() -> PlaceSelection {
        PlaceSelection {
            place_id: Some("ChIJD7fiBh9u5kcRYJSMaMOCCwQ".into()),
            address: " Paris ".into(),
            locality: Some("Paris".into()),
            administrative_area: Some("Île-de-France".into()),
            country: Some("France".into()),
            lat: Some(48.8566),
            lng: Some(2.3522),
            viewport: Some(Viewport {
                south_west_lat: 48.8156,
                south_west_lng: 2.2241,
                north_east_lat: 48.9022,
                north_east_lng: 2.4699,
            }),
            formatted_address: Some("Paris, France".into()),
            notes: Some("  ".into()),
        }
    }

    #[test]
    fn prepare_valid_selection() {
        let new_city =
            prepare_new_city(paris_selection(), TimestampMs::from_millis(1_000)).unwrap();
        assert_eq!("Paris", new_city.address);
        assert_eq!(Some("Paris"), new_city.locality.as_deref());
        assert_eq!(
            Some(MapPoint::from_lat_lng_deg(48.8566, 2.3522)),
            new_city.pos
        );
        assert!(new_city.viewport.is_some());
        assert!(new_city.facts.area_km2.unwrap() > 150.0);
        assert_eq!(None, new_city.facts.population);
        assert_eq!(None, new_city.notes);
        assert_eq!(TimestampMs::from_millis(1_000), new_city.unlocked_at);
    }

    #[test]
    fn reject_empty_address() {
        let selection = PlaceSelection {
            address: " \t".into(),
            ..paris_selection()
        };
        assert!(matches!(
            prepare_new_city(selection, TimestampMs::now()),
            Err(Error::EmptyAddress)
        ));
    }

    #[test]
    fn reject_invalid_position() {
        let selection = PlaceSelection {
            lat: Some(95.0),
            ..paris_selection()
        };
        assert!(matches!(
            prepare_new_city(selection, TimestampMs::now()),
            Err(Error::InvalidPosition)
        ));
        let selection = PlaceSelection {
            lng: None,
            ..paris_selection()
        };
        assert!(matches!(
            prepare_new_city(selection, TimestampMs::now()),
            Err(Error::InvalidPosition)
        ));
    }

    #[test]
    fn reject_invalid_viewport() {
        let selection = PlaceSelection {
            viewport: Some(Viewport {
                south_west_lat: 49.0,
                south_west_lng: 2.2,
                north_east_lat: 48.0,
                north_east_lng: 2.4,
            }),
            ..paris_selection()
        };
        assert!(matches!(
            prepare_new_city(selection, TimestampMs::now()),
            Err(Error::Bbox)
        ));
    }

    #[test]
    fn selection_without_optional_values() {
        let selection = PlaceSelection {
            address: "Nowhere".into(),
            ..Default::default()
        };
        let new_city = prepare_new_city(selection, TimestampMs::now()).unwrap();
        assert_eq!(None, new_city.pos);
        assert!(new_city.facts.is_empty());
    }

    #[test]
    fn create_city_only_once() {
        let db = MockDb::default();
        let new_city =
            prepare_new_city(paris_selection(), TimestampMs::from_millis(1_000)).unwrap();
        let city = create_new_city(&db, new_city.clone()).unwrap();
        assert_eq!(city, db.get_city(city.id).unwrap());
        assert!(matches!(
            create_new_city(&db, new_city),
            Err(Error::AlreadyUnlocked)
        ));
        assert_eq!(1, db.count_cities().unwrap());
    }
}
