use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("unlocked.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub enrichment: Option<Enrichment>,
    pub gateway: Option<Gateway>,
    pub notifications: Option<Notifications>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Enrichment {
    pub gateway: Option<EnrichmentGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrichmentGateway {
    Wikidata,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub wikidata: Option<Wikidata>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Wikidata {
    pub api_url: Option<String>,
    pub sparql_url: Option<String>,
    pub user_agent: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notifications {
    pub weekly: bool,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub interval: Option<Duration>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub initial_delay: Option<Duration>,
    pub sink: Option<NotificationSink>,
    pub dir: Option<PathBuf>,
}

impl Default for Notifications {
    fn default() -> Self {
        Config::default()
            .notifications
            .expect("Notifications configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationSink {
    Log,
    JsonFile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.enrichment.is_some());
        assert!(cfg.notifications.is_some());
    }

    #[test]
    fn default_notifications_config() {
        let cfg = Notifications::default();
        assert!(cfg.weekly);
        assert_eq!(Some(Duration::from_secs(7 * 24 * 60 * 60)), cfg.interval);
        assert_eq!(cfg.interval, cfg.initial_delay);
        assert!(matches!(cfg.sink, Some(NotificationSink::Log)));
        assert!(cfg.dir.is_none());
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/unlocked.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        let wikidata = cfg.gateway.unwrap().wikidata.unwrap();
        assert_eq!(Some(Duration::from_secs(15)), wikidata.timeout);
        assert!(wikidata.user_agent.is_some());
        let notifications = cfg.notifications.unwrap();
        assert!(matches!(notifications.sink, Some(NotificationSink::JsonFile)));
        assert_eq!(Some(Duration::from_secs(60 * 60)), notifications.initial_delay);
    }

    #[test]
    fn missing_durations_are_none() {
        let cfg: Config = toml::from_str(
            r#"
[notifications]
weekly = false
"#,
        )
        .unwrap();
        let notifications = cfg.notifications.unwrap();
        assert!(!notifications.weekly);
        assert!(notifications.interval.is_none());
        assert!(notifications.initial_delay.is_none());
        assert!(cfg.db.is_none());
    }
}
