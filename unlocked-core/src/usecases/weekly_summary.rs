use super::prelude::*;
use crate::gateways::notify::{Notification, NotificationGateway};
use itertools::Itertools as _;

/// What the weekly reminder tells about the unlocked cities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklySummary {
    pub total_cities: usize,
    pub total_countries: usize,
    /// Display name of the most recently unlocked city
    pub last_unlocked: Option<String>,
}

impl WeeklySummary {
    pub fn from_cities(cities: &[City]) -> Self {
        let total_countries = cities
            .iter()
            .filter_map(|c| c.country.as_deref())
            .unique()
            .count();
        let last_unlocked = cities
            .iter()
            .max_by(|a, b| {
                a.unlocked_at
                    .cmp(&b.unlocked_at)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .map(|c| c.display_name().to_owned());
        Self {
            total_cities: cities.len(),
            total_countries,
            last_unlocked,
        }
    }
}

pub trait WeeklySummaryFormatter {
    fn format_title(&self, summary: &WeeklySummary) -> String;
    fn format_body(&self, summary: &WeeklySummary) -> String;
}

pub fn compose_weekly_notification<F>(formatter: &F, summary: &WeeklySummary) -> Notification
where
    F: WeeklySummaryFormatter + ?Sized,
{
    Notification {
        title: formatter.format_title(summary),
        body: formatter.format_body(summary),
    }
}

/// Summarizes all cities and delivers the reminder.
///
/// Delivery errors are logged and otherwise ignored.
pub fn send_weekly_summary<G, F>(cities: &[City], gateway: &G, formatter: &F) -> WeeklySummary
where
    G: NotificationGateway + ?Sized,
    F: WeeklySummaryFormatter + ?Sized,
{
    let summary = WeeklySummary::from_cities(cities);
    let notification = compose_weekly_notification(formatter, &summary);
    if let Err(err) = gateway.notify(&notification) {
        log::warn!("Unable to deliver weekly summary: {err}");
    } else {
        log::info!(
            "Delivered weekly summary of {} cities in {} countries",
            summary.total_cities,
            summary.total_countries
        );
    }
    summary
}
