// Validate a food data directory
//
// Loads the tables, builds the catalogue (which checks every category
// reference and locale key) and prints per-variant counts.
// Exits non-zero with the failing row or key if the data does not validate.
//
// Usage: FOOD_DATA_DIR=food_data cargo run --bin check_food_data [-- --json]

use food_lookup::{FoodData, LookupConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_lookup=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let config = LookupConfig::from_env()?;

    let catalogue = FoodData::load(&config.data_dir)?.into_catalogue(&config.namespace)?;
    let stats = catalogue.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("FOOD DATA CHECK: {:?}", config.data_dir);
    println!("{}", "=".repeat(60));
    println!("{}", stats);
    println!("\nAll {} foods resolve to a category and both locale names.", stats.foods);

    Ok(())
}
