//! Food Lookup
//!
//! Resolves a typed, possibly imprecise English food name to catalogued foods
//! and reports their localized names, nutrition values and status effects.
//!
//! - `category/`: nutrition state across the 1.18.2 schema change
//! - `effect/`: timed status effects and their duration text
//! - `catalogue/`: validated join of categories, foods and locale names
//! - `matcher/`: token-set fuzzy ranking of foods against a query
//! - `report/`: text output for ranked matches
//! - `data/`: loading the source tables with Polars
//! - `session/`: the line-by-line query loop
//! - `utils/`: string similarity

pub mod utils;
pub mod error;
pub mod language;
pub mod effect;
pub mod category;
pub mod catalogue;
pub mod matcher;
pub mod report;
pub mod data;
pub mod config;
pub mod session;

// Re-export commonly used types
pub use error::{CatalogueError, CatalogueResult};
pub use language::Language;
pub use effect::EffectDescriptor;
pub use category::{CategoryRecord, CategoryRow, Nutrition, NutritionState};
pub use catalogue::{
    build_catalogue, Catalogue, CatalogueStats, FoodEntry, FoodRow, Locale, LocaleDictionary, Locales,
};
pub use matcher::{search, FoodMatch, MatchEngine, DEFAULT_MATCH_THRESHOLD};
pub use report::ReportFormatter;
pub use data::FoodData;
pub use config::LookupConfig;
