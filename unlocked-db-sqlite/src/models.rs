#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = cities)]
pub struct NewCity<'a> {
    pub place_id: Option<&'a str>,
    pub address: &'a str,
    pub locality: Option<&'a str>,
    pub administrative_area: Option<&'a str>,
    pub country: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub viewport_sw_lat: Option<f64>,
    pub viewport_sw_lng: Option<f64>,
    pub viewport_ne_lat: Option<f64>,
    pub viewport_ne_lng: Option<f64>,
    pub formatted_address: Option<&'a str>,
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub elevation_m: Option<f64>,
    pub unlocked_at: i64,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = cities, treat_none_as_null = true)]
pub struct CityFacts {
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub elevation_m: Option<f64>,
}

#[derive(Queryable)]
pub struct City {
    pub id: i64,
    pub place_id: Option<String>,
    pub address: String,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub viewport_sw_lat: Option<f64>,
    pub viewport_sw_lng: Option<f64>,
    pub viewport_ne_lat: Option<f64>,
    pub viewport_ne_lng: Option<f64>,
    pub formatted_address: Option<String>,
    pub area_km2: Option<f64>,
    pub population: Option<i64>,
    pub elevation_m: Option<f64>,
    pub unlocked_at: i64,
    pub notes: Option<String>,
}
