use anyhow::Result;
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};
use unlocked_core::{entities::CityFacts, gateways::enrichment::CityFactsGateway};

pub const DEFAULT_API_URL: &str = "https://www.wikidata.org/w/api.php";
pub const DEFAULT_SPARQL_URL: &str = "https://query.wikidata.org/sparql";
pub const DEFAULT_USER_AGENT: &str =
    concat!("unlocked/", env!("CARGO_PKG_VERSION"), " (city facts lookup)");
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const SEARCH_LIMIT: u8 = 5;

// Descriptions of entities that denote a settlement
const SETTLEMENT_KEYWORDS: [&str; 5] = ["city", "municipality", "town", "village", "capital"];

/// Looks up area, population and elevation
/// of cities in the Wikidata knowledge base.
#[derive(Debug, Clone)]
pub struct Wikidata {
    pub api_url: String,
    pub sparql_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Wikidata {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            sparql_url: DEFAULT_SPARQL_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Wikidata {
    fn lookup(&self, city_name: &str, country: Option<&str>) -> Result<Option<CityFacts>> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout)
            .build()?;
        let search = search_term(city_name, country);
        let response: SearchResponse = fetch_json(
            client
                .get(&self.api_url)
                .query(&search_params(&search)),
        )?;
        let Some(entity_id) = find_settlement(&response) else {
            log::debug!("No Wikidata entity found for {search}");
            return Ok(None);
        };
        log::debug!("Found Wikidata entity {entity_id} for {search}");
        let response: SparqlResponse = fetch_json(
            client
                .get(&self.sparql_url)
                .query(&[("query", sparql_query(entity_id).as_str()), ("format", "json")])
                .header(reqwest::header::ACCEPT, "application/sparql-results+json"),
        )?;
        Ok(parse_city_facts(&response))
    }
}

impl CityFactsGateway for Wikidata {
    fn lookup_city_facts(&self, city_name: &str, country: Option<&str>) -> Option<CityFacts> {
        match self.lookup(city_name, country) {
            Ok(facts) => facts,
            Err(err) => {
                log::warn!("Failed to look up facts about {city_name}: {err}");
                None
            }
        }
    }
}

#[cfg(not(test))]
fn fetch_json<T>(request: reqwest::blocking::RequestBuilder) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    Ok(request.send()?.error_for_status()?.json()?)
}

/// Don't send any requests while running the tests.
#[cfg(test)]
fn fetch_json<T>(request: reqwest::blocking::RequestBuilder) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    log::debug!("Would send request: {request:?}");
    anyhow::bail!("Offline")
}

fn search_term(city_name: &str, country: Option<&str>) -> String {
    match country {
        Some(country) => format!("{city_name}, {country}"),
        None => city_name.to_owned(),
    }
}

fn search_params(search: &str) -> [(&'static str, String); 5] {
    [
        ("action", "wbsearchentities".to_owned()),
        ("search", search.to_owned()),
        ("language", "en".to_owned()),
        ("limit", SEARCH_LIMIT.to_string()),
        ("format", "json".to_owned()),
    ]
}

fn sparql_query(entity_id: &str) -> String {
    format!(
        r#"SELECT ?area ?population ?elevation WHERE {{
  OPTIONAL {{
    wd:{entity_id} p:P2046 ?areaStatement.
    ?areaStatement ps:P2046 ?area.
  }}
  OPTIONAL {{ wd:{entity_id} wdt:P1082 ?population. }}
  OPTIONAL {{ wd:{entity_id} wdt:P2044 ?elevation. }}
}}
LIMIT 1"#
    )
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<HashMap<String, SparqlValue>>,
}

#[derive(Debug, Deserialize)]
struct SparqlValue {
    value: String,
}

// The first search hit that is described as some kind of settlement.
fn find_settlement(response: &SearchResponse) -> Option<&str> {
    response
        .search
        .iter()
        .find(|hit| {
            hit.description.as_deref().is_some_and(|desc| {
                let desc = desc.to_lowercase();
                SETTLEMENT_KEYWORDS.iter().any(|kw| desc.contains(kw))
            })
        })
        .map(|hit| hit.id.as_str())
}

fn parse_population(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .map(|p| p.round() as u64)
    })
}

fn parse_city_facts(response: &SparqlResponse) -> Option<CityFacts> {
    let binding = response.results.bindings.first()?;
    let value = |name: &str| binding.get(name).map(|v| v.value.as_str());
    let facts = CityFacts {
        area_km2: value("area").and_then(|v| v.parse().ok()),
        population: value("population").and_then(parse_population),
        elevation_m: value("elevation").and_then(|v| v.parse().ok()),
    };
    (!facts.is_empty()).then_some(facts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_with_and_without_country() {
        assert_eq!("Paris, France", search_term("Paris", Some("France")));
        assert_eq!("Paris", search_term("Paris", None));
    }

    #[test]
    fn pick_first_settlement() {
        let response: SearchResponse = serde_json::from_str(
            r#"{
              "searchinfo": { "search": "Paris, France" },
              "search": [
                { "id": "Q1", "label": "Paris", "description": "Greek mythological figure" },
                { "id": "Q2", "label": "Paris" },
                { "id": "Q90", "label": "Paris", "description": "Capital and largest city of France" },
                { "id": "Q3", "label": "Paris", "description": "city in Texas" }
              ],
              "success": 1
            }"#,
        )
        .unwrap();
        assert_eq!(Some("Q90"), find_settlement(&response));
    }

    #[test]
    fn no_settlement_found() {
        let response: SearchResponse =
            serde_json::from_str(r#"{ "search": [ { "id": "Q1", "description": "river" } ] }"#)
                .unwrap();
        assert_eq!(None, find_settlement(&response));
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(None, find_settlement(&response));
    }

    #[test]
    fn parse_sparql_results() {
        let response: SparqlResponse = serde_json::from_str(
            r#"{
              "head": { "vars": [ "area", "population", "elevation" ] },
              "results": { "bindings": [ {
                "area": { "datatype": "http://www.w3.org/2001/XMLSchema#decimal", "type": "literal", "value": "105.4" },
                "population": { "datatype": "http://www.w3.org/2001/XMLSchema#decimal", "type": "literal", "value": "2102650" },
                "elevation": { "datatype": "http://www.w3.org/2001/XMLSchema#decimal", "type": "literal", "value": "35" }
              } ] }
            }"#,
        )
        .unwrap();
        assert_eq!(
            Some(CityFacts {
                area_km2: Some(105.4),
                population: Some(2_102_650),
                elevation_m: Some(35.0),
            }),
            parse_city_facts(&response)
        );
    }

    #[test]
    fn parse_partial_and_empty_results() {
        let response: SparqlResponse = serde_json::from_str(
            r#"{ "results": { "bindings": [ { "population": { "type": "literal", "value": "1.5E3" } } ] } }"#,
        )
        .unwrap();
        let facts = parse_city_facts(&response).unwrap();
        assert_eq!(Some(1_500), facts.population);
        assert_eq!(None, facts.area_km2);

        let response: SparqlResponse =
            serde_json::from_str(r#"{ "results": { "bindings": [ {} ] } }"#).unwrap();
        assert_eq!(None, parse_city_facts(&response));
        let response: SparqlResponse =
            serde_json::from_str(r#"{ "results": { "bindings": [] } }"#).unwrap();
        assert_eq!(None, parse_city_facts(&response));
    }

    #[test]
    fn query_contains_entity() {
        let query = sparql_query("Q90");
        assert!(query.contains("wd:Q90 p:P2046 ?areaStatement."));
        assert!(query.contains("wd:Q90 wdt:P1082 ?population."));
        assert!(query.contains("wd:Q90 wdt:P2044 ?elevation."));
        assert!(query.ends_with("LIMIT 1"));
    }

    #[test]
    fn failures_are_no_data() {
        let wikidata = Wikidata::default();
        assert_eq!(None, wikidata.lookup_city_facts("Paris", Some("France")));
    }
}
