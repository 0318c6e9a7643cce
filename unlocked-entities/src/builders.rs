pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::city_builder::*;

pub mod city_builder {

    use super::*;
    use crate::{city::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct NewCityBuild {
        city: NewCity,
    }

    impl NewCityBuild {
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.city.place_id = Some(place_id.into());
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.city.address = address.into();
            self
        }
        pub fn locality(mut self, locality: &str) -> Self {
            self.city.locality = Some(locality.into());
            self
        }
        pub fn administrative_area(mut self, area: &str) -> Self {
            self.city.administrative_area = Some(area.into());
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.city.country = Some(country.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.city.pos = Some(pos);
            self
        }
        pub fn viewport(mut self, viewport: MapBbox) -> Self {
            self.city.viewport = Some(viewport);
            self
        }
        pub fn facts(mut self, facts: CityFacts) -> Self {
            self.city.facts = facts;
            self
        }
        pub fn unlocked_at(mut self, millis: i64) -> Self {
            self.city.unlocked_at = TimestampMs::from_millis(millis);
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.city.notes = Some(notes.into());
            self
        }
        pub fn finish(self) -> NewCity {
            self.city
        }
        pub fn finish_with_id(self, id: i64) -> City {
            self.city.into_city(CityId::from(id))
        }
    }

    impl Builder for NewCity {
        type Build = NewCityBuild;
        fn build() -> Self::Build {
            NewCityBuild {
                city: NewCity {
                    place_id: None,
                    address: "Unknown address".into(),
                    locality: None,
                    administrative_area: None,
                    country: None,
                    pos: None,
                    viewport: None,
                    formatted_address: None,
                    facts: Default::default(),
                    unlocked_at: TimestampMs::from_millis(0),
                    notes: None,
                },
            }
        }
    }
}
