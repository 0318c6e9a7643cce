use crate::config;
use anyhow::Result;
use std::sync::Arc;
use unlocked_core::{
    entities::CityFacts,
    gateways::{
        enrichment::CityFactsGateway,
        notify::{Notification, NotificationGateway},
    },
};
use unlocked_gateways::{
    notify::{LogNotifier, SendToJsonFile},
    wikidata::{self, Wikidata},
};

pub type FactsGw = Arc<dyn CityFactsGateway + Send + Sync + 'static>;

pub fn city_facts_gateway(cfg: Option<config::EnrichmentGateway>) -> FactsGw {
    match cfg {
        Some(config::EnrichmentGateway::Wikidata {
            api_url,
            sparql_url,
            user_agent,
            timeout,
        }) => Arc::new(Wikidata {
            api_url: api_url.unwrap_or_else(|| wikidata::DEFAULT_API_URL.to_owned()),
            sparql_url: sparql_url.unwrap_or_else(|| wikidata::DEFAULT_SPARQL_URL.to_owned()),
            user_agent: user_agent.unwrap_or_else(|| wikidata::DEFAULT_USER_AGENT.to_owned()),
            timeout: timeout.unwrap_or(wikidata::DEFAULT_TIMEOUT),
        }),
        None => {
            log::warn!("No enrichment gateway was configured");
            Arc::new(NoCityFacts)
        }
    }
}

pub fn notification_gateway(cfg: &config::NotificationSink) -> Result<NotifyGw> {
    let gw = match cfg {
        config::NotificationSink::Log => NotifyGw::new(LogNotifier),
        config::NotificationSink::JsonFile { dir } => {
            let gw = SendToJsonFile::try_new(dir)?;
            log::info!("Use JSON file notification sink ({})", gw.path().display());
            NotifyGw::new(gw)
        }
    };
    Ok(gw)
}

struct NoCityFacts;

impl CityFactsGateway for NoCityFacts {
    fn lookup_city_facts(&self, city_name: &str, _: Option<&str>) -> Option<CityFacts> {
        log::debug!("Cannot look up facts about {city_name} because no gateway was configured");
        None
    }
}

pub struct NotifyGw(Box<dyn NotificationGateway + Send + Sync + 'static>);

impl NotifyGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: NotificationGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl NotificationGateway for NotifyGw {
    fn notify(&self, notification: &Notification) -> Result<()> {
        self.0.notify(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn no_facts_without_gateway() {
        let gw = city_facts_gateway(None);
        assert_eq!(None, gw.lookup_city_facts("Paris", Some("France")));
    }

    #[test]
    fn log_notifications() {
        let gw = notification_gateway(&config::NotificationSink::Log).unwrap();
        let notification = Notification {
            title: "Hello".into(),
            body: "World".into(),
        };
        assert!(gw.notify(&notification).is_ok());
    }

    #[test]
    fn configure_wikidata() {
        // Only checks that the configuration is accepted, no lookup is performed
        let _ = city_facts_gateway(Some(config::EnrichmentGateway::Wikidata {
            api_url: None,
            sparql_url: None,
            user_agent: Some("test".into()),
            timeout: Some(Duration::from_secs(1)),
        }));
    }
}
