use anyhow::Result;
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};
use unlocked_core::{
    entities::TimestampMs,
    gateways::notify::{Notification, NotificationGateway},
};

/// Writes notifications into the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationGateway for LogNotifier {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let Notification { title, body } = notification;
        log::info!("{title}: {body}");
        Ok(())
    }
}

/// Stores each notification in a separate JSON file.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
struct JsonNotification {
    created_at: i64,
    title: String,
    body: String,
}

impl NotificationGateway for SendToJsonFile {
    fn notify(&self, notification: &Notification) -> Result<()> {
        let now = TimestampMs::now().as_millis();
        let json = JsonNotification {
            created_at: now,
            title: notification.title.clone(),
            body: notification.body.clone(),
        };
        let id = self.json_store.save_with_id(&json, &format!("{now}-notification"))?;
        log::debug!("Saved notification {id} in {}", self.path().display());
        Ok(())
    }
}
