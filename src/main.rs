use clap::Parser as _;

mod cli;
mod config;
mod gateways;
mod recurring_reminder;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Cli::parse();
    cli::run(args)
}
