use unlocked_entities::city::CityFacts;

/// Looks up additional facts about a city from an external knowledge base.
///
/// Implementations must never fail: any kind of error is
/// reported as `None`, i.e. no facts available.
pub trait CityFactsGateway {
    fn lookup_city_facts(&self, city_name: &str, country: Option<&str>) -> Option<CityFacts>;
}
