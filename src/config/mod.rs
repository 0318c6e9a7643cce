use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "unlocked.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub enrichment: Enrichment,
    pub notifications: Notifications,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Enrichment {
    pub gateway: Option<EnrichmentGateway>,
}

#[derive(Debug, Clone)]
pub enum EnrichmentGateway {
    Wikidata {
        api_url: Option<String>,
        sparql_url: Option<String>,
        user_agent: Option<String>,
        timeout: Option<Duration>,
    },
}

#[derive(Debug, Clone)]
pub struct Notifications {
    pub weekly: bool,
    pub interval: Duration,
    pub initial_delay: Duration,
    pub sink: NotificationSink,
}

#[derive(Debug, Clone)]
pub enum NotificationSink {
    Log,
    /// For local testing purposes
    JsonFile {
        /// File system directory for writing notifications into JSON files.
        dir: PathBuf,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            enrichment,
            gateway,
            notifications,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let enrichment_gateway = match enrichment.and_then(|e| e.gateway) {
            Some(raw::EnrichmentGateway::Wikidata) => {
                let raw::Wikidata {
                    api_url,
                    sparql_url,
                    user_agent,
                    timeout,
                } = gateway.unwrap_or_default().wikidata.unwrap_or_default();
                log::info!("Use Wikidata enrichment gateway");
                Some(EnrichmentGateway::Wikidata {
                    api_url,
                    sparql_url,
                    user_agent,
                    timeout,
                })
            }
            None => None,
        };
        let enrichment = Enrichment {
            gateway: enrichment_gateway,
        };

        let raw::Notifications {
            weekly,
            interval,
            initial_delay,
            sink,
            dir,
        } = notifications.unwrap_or_default();

        let default_notifications = raw::Notifications::default();
        let interval = interval
            .or(default_notifications.interval)
            .expect("Notification interval");
        if interval.is_zero() {
            return Err(anyhow!("The notification interval must not be zero"));
        }
        let initial_delay = initial_delay
            .or(default_notifications.initial_delay)
            .expect("Initial notification delay");

        let sink = match sink.unwrap_or(raw::NotificationSink::Log) {
            raw::NotificationSink::Log => NotificationSink::Log,
            raw::NotificationSink::JsonFile => {
                let dir = dir
                    .ok_or_else(|| anyhow!("Missing 'dir' for the JSON file notification sink"))?;
                NotificationSink::JsonFile { dir }
            }
        };

        let notifications = Notifications {
            weekly,
            interval,
            initial_delay,
            sink,
        };

        Ok(Self {
            db,
            enrichment,
            notifications,
        })
    }
}
