// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};

use unlocked_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod city;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn load_city(city: models::City) -> City {
    let models::City {
        id,
        place_id,
        address,
        locality,
        administrative_area,
        country,
        latitude,
        longitude,
        viewport_sw_lat,
        viewport_sw_lng,
        viewport_ne_lat,
        viewport_ne_lng,
        formatted_address,
        area_km2,
        population,
        elevation_m,
        unlocked_at,
        notes,
    } = city;
    let pos = match (latitude, longitude) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng).or_else(|| {
            // This should never happen if positions have been validated properly on insert
            log::warn!("City {id} has an invalid position: lat = {lat}, lng = {lng}");
            None
        }),
        _ => None,
    };
    let viewport = match (
        viewport_sw_lat,
        viewport_sw_lng,
        viewport_ne_lat,
        viewport_ne_lng,
    ) {
        (Some(sw_lat), Some(sw_lng), Some(ne_lat), Some(ne_lng)) => Some(MapBbox::new(
            MapPoint::from_lat_lng_deg(sw_lat, sw_lng),
            MapPoint::from_lat_lng_deg(ne_lat, ne_lng),
        )),
        _ => None,
    };
    City {
        id: id.into(),
        place_id,
        address,
        locality,
        administrative_area,
        country,
        pos,
        viewport,
        formatted_address,
        facts: CityFacts {
            area_km2,
            population: population.and_then(|p| u64::try_from(p).ok()),
            elevation_m,
        },
        unlocked_at: TimestampMs::from_millis(unlocked_at),
        notes,
    }
}

fn population_value(population: Option<u64>) -> Result<Option<i64>> {
    population
        .map(|p| {
            i64::try_from(p)
                .map_err(|_| repo::Error::Other(anyhow!("Population out of range: {p}")))
        })
        .transpose()
}

fn into_new_city(city: &NewCity) -> Result<models::NewCity<'_>> {
    let NewCity {
        place_id,
        address,
        locality,
        administrative_area,
        country,
        pos,
        viewport,
        formatted_address,
        facts,
        unlocked_at,
        notes,
    } = city;
    Ok(models::NewCity {
        place_id: place_id.as_deref(),
        address,
        locality: locality.as_deref(),
        administrative_area: administrative_area.as_deref(),
        country: country.as_deref(),
        latitude: pos.map(MapPoint::lat_deg),
        longitude: pos.map(MapPoint::lng_deg),
        viewport_sw_lat: viewport.map(|vp| vp.southwest().lat_deg()),
        viewport_sw_lng: viewport.map(|vp| vp.southwest().lng_deg()),
        viewport_ne_lat: viewport.map(|vp| vp.northeast().lat_deg()),
        viewport_ne_lng: viewport.map(|vp| vp.northeast().lng_deg()),
        formatted_address: formatted_address.as_deref(),
        area_km2: facts.area_km2,
        population: population_value(facts.population)?,
        elevation_m: facts.elevation_m,
        unlocked_at: unlocked_at.as_millis(),
        notes: notes.as_deref(),
    })
}
