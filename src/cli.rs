use crate::{config::Config, gateways, recurring_reminder};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use unlocked_application::prelude::*;
use unlocked_core::{
    entities::{City, CityId, MapBbox, MapPoint, TimestampMs},
    usecases::{PlaceSelection, TravelStats, Viewport},
    util::flag::country_flag,
};
use unlocked_db_sqlite::{run_embedded_database_migrations, Connections};

#[derive(Parser, Debug)]
#[command(name = "unlocked", version, about = "Keep track of the cities you have unlocked")]
pub struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Unlock a city
    Add(AddArgs),
    /// List unlocked cities, newest first
    List {
        /// Only show cities that contain this text
        #[arg(long)]
        search: Option<String>,
        /// Only show cities in these countries
        #[arg(long = "country", value_name = "COUNTRY")]
        countries: Vec<String>,
    },
    /// List all countries of unlocked cities
    Countries,
    /// Show a single city
    Show { id: CityId },
    /// Delete cities
    Delete {
        #[arg(required = true)]
        ids: Vec<CityId>,
    },
    /// Delete all cities
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Show travel statistics
    Stats,
    /// Send the weekly summary once
    Notify,
    /// Send weekly summaries periodically
    Run,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub place_id: Option<String>,
    #[arg(long)]
    pub locality: Option<String>,
    #[arg(long)]
    pub administrative_area: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lng: Option<f64>,
    /// South-west and north-east corner
    #[arg(
        long,
        num_args = 4,
        allow_negative_numbers = true,
        value_names = ["SW_LAT", "SW_LNG", "NE_LAT", "NE_LNG"]
    )]
    pub viewport: Option<Vec<f64>>,
    #[arg(long)]
    pub formatted_address: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl AddArgs {
    fn into_selection(self) -> PlaceSelection {
        let Self {
            address,
            place_id,
            locality,
            administrative_area,
            country,
            lat,
            lng,
            viewport,
            formatted_address,
            notes,
        } = self;
        let viewport = viewport.and_then(|corners| match corners[..] {
            [south_west_lat, south_west_lng, north_east_lat, north_east_lng] => Some(Viewport {
                south_west_lat,
                south_west_lng,
                north_east_lat,
                north_east_lng,
            }),
            _ => None,
        });
        PlaceSelection {
            place_id,
            address,
            locality,
            administrative_area,
            country,
            lat,
            lng,
            viewport,
            formatted_address,
            notes,
        }
    }
}

pub fn run(args: Cli) -> Result<()> {
    let Cli {
        config,
        db_url,
        command,
    } = args;
    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    run_embedded_database_migrations(connections.exclusive()?)?;
    let store = CityStore::open(connections)?;

    match command {
        Command::Add(add) => {
            let gateway = gateways::city_facts_gateway(cfg.enrichment.gateway);
            let status = OperationStatus::new();
            let saved = match save_city(
                &store,
                &gateway,
                &status,
                add.into_selection(),
                TimestampMs::now(),
            ) {
                Ok(saved) => saved,
                Err(err) if err.is_duplicate() => {
                    println!("This city has already been unlocked");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };
            let SavedCity { city, enrichment } = saved;
            if let Some(enrichment) = enrichment {
                if enrichment.join().is_err() {
                    log::warn!("Looking up facts about {} failed", city.display_name());
                }
            }
            let city = store.city_by_id(city.id)?.unwrap_or(city);
            print_city_details(&city);
        }
        Command::List { search, countries } => {
            let mut view = CityListView::new(store);
            if let Some(search) = search {
                view.set_search_query(search);
            }
            for country in &countries {
                view.toggle_country_filter(country);
            }
            for city in view.filtered_cities().iter() {
                print_city_line(city);
            }
        }
        Command::Countries => {
            let view = CityListView::new(store);
            for country in view.available_countries().iter() {
                println!("{} {country}", country_flag(Some(country.as_str())));
            }
        }
        Command::Show { id } => {
            let city = store
                .city_by_id(id)?
                .ok_or_else(|| anyhow!("City {id} not found"))?;
            print_city_details(&city);
        }
        Command::Delete { ids } => {
            let status = OperationStatus::new();
            let deleted = delete_cities(&store, &status, &ids)?;
            println!("Deleted {deleted} of {} cities", ids.len());
        }
        Command::Clear { yes } => {
            if !yes {
                println!("Pass --yes to delete all {} cities", store.count_cities()?);
                return Ok(());
            }
            let status = OperationStatus::new();
            delete_all_cities(&store, &status)?;
            println!("Deleted all cities");
        }
        Command::Stats => {
            let cities = store.snapshot();
            print_stats(&TravelStats::from_cities(&cities));
        }
        Command::Notify => {
            let notify_gw = gateways::notification_gateway(&cfg.notifications.sink)?;
            let formatter = unlocked_gateways::user_communication::WeeklyReminderFormatter;
            let summary = send_weekly_summary(&store, &notify_gw, &formatter)?;
            log::debug!("Sent weekly summary: {summary:?}");
        }
        Command::Run => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(recurring_reminder::run(&store, cfg.notifications))?;
        }
    }
    Ok(())
}

fn print_city_line(city: &City) {
    println!(
        "{:>5} {} {:<24} {}",
        city.id.to_inner(),
        country_flag(city.country.as_deref()),
        city.display_name(),
        city.unlocked_at
    );
}

// The center of the viewport if the exact position is unknown
fn city_position(city: &City) -> Option<MapPoint> {
    city.pos
        .or_else(|| city.viewport.as_ref().map(MapBbox::center))
}

fn print_city_details(city: &City) {
    println!(
        "{} {} (#{})",
        country_flag(city.country.as_deref()),
        city.display_name(),
        city.id
    );
    println!("  Address:     {}", city.address);
    if let Some(area) = &city.administrative_area {
        println!("  Region:      {area}");
    }
    if let Some(country) = &city.country {
        println!("  Country:     {country}");
    }
    if let Some(pos) = city_position(city) {
        println!("  Position:    {:.5}, {:.5}", pos.lat_deg(), pos.lng_deg());
    }
    if let Some(area) = city.facts.area_km2 {
        println!("  Area:        {area:.1} km²");
    }
    if let Some(population) = city.facts.population {
        println!("  Population:  {population}");
    }
    if let Some(elevation) = city.facts.elevation_m {
        println!("  Elevation:   {elevation:.0} m");
    }
    println!("  Unlocked at: {}", city.unlocked_at);
    if let Some(notes) = &city.notes {
        println!("  Notes:       {notes}");
    }
}

fn print_stats(stats: &TravelStats) {
    let TravelStats {
        overview,
        top_countries,
        extremes,
        population,
        timeline,
        fun_facts,
    } = stats;
    println!("Cities:     {}", overview.total_cities);
    println!("Countries:  {}", overview.total_countries);
    println!("Population: {}", overview.total_population);
    println!("Area:       {:.1} km²", overview.total_area_km2);

    if !top_countries.is_empty() {
        println!("\nTop countries");
        for share in top_countries {
            let name = share.country.as_deref().unwrap_or("Unknown");
            println!(
                "  {} {name:<20} {:>4} ({:.1}%)",
                country_flag(share.country.as_deref()),
                share.count,
                share.percent
            );
        }
    }

    let extremes = [
        ("Northernmost", extremes.northernmost),
        ("Southernmost", extremes.southernmost),
        ("Easternmost", extremes.easternmost),
        ("Westernmost", extremes.westernmost),
        ("Highest", extremes.highest),
    ];
    if extremes.iter().any(|(_, city)| city.is_some()) {
        println!("\nExtremes");
        for (label, city) in extremes {
            if let Some(city) = city {
                println!("  {label:<13} {}", city.display_name());
            }
        }
    }

    if let Some(population) = population {
        println!("\nPopulation");
        println!(
            "  Most populated  {}",
            population.most_populated.display_name()
        );
        println!(
            "  Least populated {}",
            population.least_populated.display_name()
        );
        println!("  Average         {:.0}", population.average);
    }

    if let Some(timeline) = timeline {
        println!("\nTimeline");
        println!(
            "  First unlocked    {} ({})",
            timeline.first_unlocked.display_name(),
            timeline.first_unlocked.unlocked_at
        );
        println!(
            "  Last unlocked     {} ({})",
            timeline.last_unlocked.display_name(),
            timeline.last_unlocked.unlocked_at
        );
        let month = timeline.most_active_month;
        println!(
            "  Most active month {} {} ({} cities)",
            month.month, month.year, month.count
        );
    }

    let facts = [
        fun_facts
            .longest_name
            .as_ref()
            .map(|name| format!("Longest name: {name}")),
        fun_facts
            .largest_country_area
            .as_ref()
            .map(|(country, area)| format!("Largest area: {country} ({area:.1} km²)")),
        fun_facts
            .average_days_between_unlocks
            .map(|days| format!("Average days between unlocks: {days}")),
    ];
    if facts.iter().any(Option::is_some) {
        println!("\nFun facts");
        for fact in facts.into_iter().flatten() {
            println!("  {fact}");
        }
    }
}
