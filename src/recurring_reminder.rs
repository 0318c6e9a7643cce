use crate::{config, gateways};

use anyhow::Result;
use tokio::time::{interval_at, Instant};
use unlocked_application::prelude::{send_weekly_summary, CityStore};
use unlocked_gateways::user_communication::WeeklyReminderFormatter;

pub async fn run(store: &CityStore, cfg: config::Notifications) -> Result<()> {
    if !cfg.weekly {
        log::info!("Weekly notifications are disabled");
        return Ok(());
    }

    let notify_gw = gateways::notification_gateway(&cfg.sink)?;
    let formatter = WeeklyReminderFormatter;
    let mut interval = interval_at(Instant::now() + cfg.initial_delay, cfg.interval);

    log::info!(
        "Sending weekly notifications every {:?} (first one in {:?})",
        cfg.interval,
        cfg.initial_delay
    );
    loop {
        interval.tick().await;
        if let Err(err) = send_weekly_summary(store, &notify_gw, &formatter) {
            log::warn!("Weekly summary could not be sent: {err}");
        }
    }
}
