// Interactive food lookup
//
// Reads one English food name per line and prints the matching foods with
// their nutrition values and effects. End of input (Ctrl-D) or an interrupt
// (Ctrl-C) ends the session with a goodbye line.
//
// Usage: FOOD_DATA_DIR=food_data cargo run --release --bin food_lookup

use anyhow::Context;
use food_lookup::session::{self, GOODBYE_LINE};
use food_lookup::{FoodData, LookupConfig, MatchEngine, ReportFormatter};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_lookup=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = LookupConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  FOOD_DATA_DIR: {:?}", config.data_dir);
    tracing::info!("  FOOD_MATCH_THRESHOLD: {}", config.threshold);
    tracing::info!("  FOOD_NAMESPACE: {}", config.namespace);
    tracing::info!("  FOOD_LANG: {}", config.language);

    let catalogue = FoodData::load(&config.data_dir)?.into_catalogue(&config.namespace)?;
    let engine = MatchEngine::new(&catalogue).with_threshold(config.threshold);
    let formatter = ReportFormatter::new(config.language);

    // Ctrl-C ends the session the same way end of input does
    ctrlc::set_handler(|| {
        println!();
        println!("{}", GOODBYE_LINE);
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    session::run(io::stdin().lock(), io::stdout(), &engine, &formatter)
}
