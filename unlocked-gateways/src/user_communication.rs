use rand::seq::SliceRandom as _;
use unlocked_core::usecases::{WeeklySummary, WeeklySummaryFormatter};

pub const TITLES: [&str; 5] = [
    "🌍 Your Travel Journey",
    "🗺️ Adventure Update",
    "📍 Places Unlocked",
    "✈️ Travel Stats",
    "🌟 Your Progress",
];

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// All messages that fit the number of unlocked cities.
pub fn weekly_messages(summary: &WeeklySummary) -> Vec<String> {
    let WeeklySummary {
        total_cities: cities,
        total_countries: countries,
        last_unlocked,
    } = summary;
    let (cities, countries) = (*cities, *countries);
    let city_s = plural(cities, "city", "cities");
    let country_s = plural(countries, "country", "countries");
    match cities {
        0 => vec![
            "Ready to start your journey? Add your first city and begin exploring the world!".into(),
            "Your adventure awaits! Start tracking the amazing places you visit.".into(),
            "Time to unlock your first destination. Where will your journey begin?".into(),
        ],
        1..=4 => vec![
            format!("You've unlocked {cities} {city_s} across {countries} {country_s}! Keep exploring to grow your collection."),
            format!("Great start! {cities} {} unlocked so far. What's your next destination?", plural(cities, "place", "places")),
            format!("Your travel map is taking shape with {cities} {city_s}! Check out your stats for more insights."),
        ],
        5..=19 => {
            let last = last_unlocked
                .as_deref()
                .map(|name| format!(" Last unlocked: {name}."))
                .unwrap_or_default();
            vec![
                format!("Impressive! You've explored {cities} cities in {countries} {country_s}.{last}"),
                format!("You're building quite the travel portfolio! {cities} cities and counting across {countries} {country_s}."),
                format!("Look at you go! {cities} destinations unlocked. Your travel stats have some interesting surprises!"),
            ]
        }
        _ => {
            let latest = last_unlocked
                .as_deref()
                .map(|name| format!(" Latest addition: {name}."))
                .unwrap_or_default();
            vec![
                format!("Wow! {cities} cities across {countries} {country_s}! You're becoming a true world explorer.{latest}"),
                format!("World traveler alert! 🌎 {cities} cities unlocked across {countries} {country_s}. Your stats are incredible!"),
                format!("Amazing journey! You've unlocked {cities} cities in {countries} different {country_s}. Check your detailed stats!"),
            ]
        }
    }
}

/// Picks a random title and message for the weekly reminder.
#[derive(Default)]
pub struct WeeklyReminderFormatter; // TODO: support different languages

impl WeeklySummaryFormatter for WeeklyReminderFormatter {
    fn format_title(&self, _: &WeeklySummary) -> String {
        TITLES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(TITLES[0])
            .to_owned()
    }

    fn format_body(&self, summary: &WeeklySummary) -> String {
        weekly_messages(summary)
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}
