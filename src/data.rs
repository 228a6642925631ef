//! Data Loading
//!
//! Reads the four source files of a food data directory:
//!
//! - `food_categories.csv`: one row per category (nutrition values, effect),
//!   either with named headers or in the mod's 15-column positional layout
//! - `food_list.csv`: one row per food (`name_key`, `category`)
//! - `zh_cn.json`, `en_us.json`: locale key -> display name
//!
//! CSV files are read with Polars with schema inference disabled, so every
//! column stays a string and decimal text keeps its written scale ("0.60").

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs;
use std::path::Path;

use crate::catalogue::{Catalogue, FoodRow, LocaleDictionary, Locales};
use crate::category::CategoryRow;

pub const CATEGORIES_FILE: &str = "food_categories.csv";
pub const FOODS_FILE: &str = "food_list.csv";
pub const ZH_CN_FILE: &str = "zh_cn.json";
pub const EN_US_FILE: &str = "en_us.json";

/// Raw tables and dictionaries of one data directory
pub struct FoodData {
    pub categories: Vec<CategoryRow>,
    pub foods: Vec<FoodRow>,
    pub locales: Locales,
}

impl FoodData {
    /// Load all source files from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self> {
        tracing::info!("Loading food data from {:?}", data_dir);

        let categories = Self::load_categories(&data_dir.join(CATEGORIES_FILE))?;
        let foods = Self::load_foods(&data_dir.join(FOODS_FILE))?;
        let locales = Locales {
            zh_cn: Self::load_locale(&data_dir.join(ZH_CN_FILE))?,
            en_us: Self::load_locale(&data_dir.join(EN_US_FILE))?,
        };

        tracing::info!("  Categories: {}", categories.len());
        tracing::info!("  Foods: {}", foods.len());
        tracing::info!("  zh_cn entries: {}", locales.zh_cn.len());
        tracing::info!("  en_us entries: {}", locales.en_us.len());

        Ok(FoodData {
            categories,
            foods,
            locales,
        })
    }

    /// Validate and join the loaded tables
    pub fn into_catalogue(self, namespace: &str) -> Result<Catalogue> {
        Catalogue::build(&self.categories, &self.foods, &self.locales, namespace)
            .context("Food data failed integrity check")
    }

    /// Read a CSV as all-string columns; the header row is returned as row 0
    fn read_csv(path: &Path) -> Result<DataFrame> {
        CsvReadOptions::default()
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load CSV: {:?}", path))
    }

    fn string_columns<'a>(df: &'a DataFrame, path: &Path) -> Result<Vec<&'a StringChunked>> {
        df.get_columns()
            .iter()
            .map(|c| {
                c.str()
                    .with_context(|| format!("Column '{}' is not string type in {:?}", c.name(), path))
            })
            .collect()
    }

    /// Header cells with any UTF-8 BOM and surrounding whitespace removed
    fn header(columns: &[&StringChunked]) -> Vec<String> {
        columns
            .iter()
            .map(|c| c.get(0).unwrap_or("").trim_start_matches('\u{feff}').trim().to_string())
            .collect()
    }

    fn required_column(header: &[String], name: &str, path: &Path) -> Result<usize> {
        Self::optional_column(header, name)
            .with_context(|| format!("Column '{}' not found in {:?}", name, path))
    }

    fn optional_column(header: &[String], name: &str) -> Option<usize> {
        header.iter().position(|h| h == name)
    }

    fn cell(columns: &[&StringChunked], column: Option<usize>, idx: usize) -> Option<String> {
        column
            .and_then(|c| columns.get(c))
            .and_then(|c| c.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Load the category table
    ///
    /// Two layouts are accepted. With an `id` header the columns are
    /// addressed by name: id, hunger_old, saturation_old, hunger_new,
    /// saturation_new (required) and effect_id, effect_name, effect_duration,
    /// effect_probability (optional); other columns are ignored.
    ///
    /// Otherwise the table must have the 15 positional columns of the mod's
    /// own sheet (see [`CategoryColumns::POSITIONAL`]).
    fn load_categories(path: &Path) -> Result<Vec<CategoryRow>> {
        let df = Self::read_csv(path)?;
        let columns = Self::string_columns(&df, path)?;
        let header = Self::header(&columns);

        let layout = if Self::optional_column(&header, "id").is_some() {
            CategoryColumns::named(&header, path)?
        } else if columns.len() >= POSITIONAL_WIDTH {
            tracing::debug!("{:?}: no 'id' header, reading positional layout", path);
            CategoryColumns::POSITIONAL
        } else {
            anyhow::bail!(
                "{:?}: expected an 'id' header or {} positional columns, found {} columns",
                path,
                POSITIONAL_WIDTH,
                columns.len()
            );
        };

        let mut rows = Vec::with_capacity(df.height().saturating_sub(1));
        for idx in 1..df.height() {
            let row_id = Self::cell(&columns, Some(layout.id), idx)
                .with_context(|| format!("{:?} row {}: empty category id", path, idx + 1))?;
            rows.push(layout.row(row_id, |c| Self::cell(&columns, c, idx)));
        }

        Ok(rows)
    }

    /// Load the food table
    ///
    /// Columns `name_key` and `category` by name, or positionally as
    /// (name_key, display name, category) when those headers are absent.
    fn load_foods(path: &Path) -> Result<Vec<FoodRow>> {
        let df = Self::read_csv(path)?;
        let columns = Self::string_columns(&df, path)?;
        let header = Self::header(&columns);

        let (name_key, category) = if Self::optional_column(&header, "name_key").is_some() {
            (
                Self::required_column(&header, "name_key", path)?,
                Self::required_column(&header, "category", path)?,
            )
        } else if columns.len() >= 3 {
            (0, 2)
        } else {
            anyhow::bail!("Column 'name_key' not found in {:?}", path);
        };

        let mut rows = Vec::with_capacity(df.height().saturating_sub(1));
        for idx in 1..df.height() {
            let key = Self::cell(&columns, Some(name_key), idx)
                .with_context(|| format!("{:?} row {}: empty name_key", path, idx + 1))?;
            let category_id = Self::cell(&columns, Some(category), idx)
                .with_context(|| format!("{:?} row {}: food '{}' has no category", path, idx + 1, key))?;
            rows.push(FoodRow::new(key, category_id));
        }

        Ok(rows)
    }

    /// Load a locale dictionary (flat JSON object of strings)
    fn load_locale(path: &Path) -> Result<LocaleDictionary> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse locale JSON: {:?}", path))
    }
}

/// Column count of the positional category layout
const POSITIONAL_WIDTH: usize = 15;

/// Where each category field sits in a table
struct CategoryColumns {
    id: usize,
    hunger_old: Option<usize>,
    saturation_old: Option<usize>,
    hunger_new: Option<usize>,
    saturation_new: Option<usize>,
    effect_id: Option<usize>,
    effect_name: Option<usize>,
    effect_duration: Option<usize>,
    effect_probability: Option<usize>,
    /// Positional layout only: raw source cells that gate the old and new
    /// value pairs (hunger, saturation)
    old_markers: Option<(usize, usize)>,
    new_markers: Option<(usize, usize)>,
}

impl CategoryColumns {
    /// The mod's sheet: id, raw old hunger, raw old saturation, old hunger,
    /// old saturation, raw new hunger, raw new saturation, new hunger, new
    /// saturation, special fields, effect id, effect name, effect duration,
    /// effect probability, id again.
    ///
    /// A pair's values count only when its raw cells are filled: the old pair
    /// needs both, the new pair needs either. Rows without an old pair read
    /// the new values directly.
    const POSITIONAL: CategoryColumns = CategoryColumns {
        id: 0,
        hunger_old: Some(3),
        saturation_old: Some(4),
        hunger_new: Some(7),
        saturation_new: Some(8),
        effect_id: Some(10),
        effect_name: Some(11),
        effect_duration: Some(12),
        effect_probability: Some(13),
        old_markers: Some((1, 2)),
        new_markers: Some((5, 6)),
    };

    fn named(header: &[String], path: &Path) -> Result<Self> {
        let required = |name: &str| FoodData::required_column(header, name, path).map(Some);
        let optional = |name: &str| FoodData::optional_column(header, name);

        Ok(CategoryColumns {
            id: FoodData::required_column(header, "id", path)?,
            hunger_old: required("hunger_old")?,
            saturation_old: required("saturation_old")?,
            hunger_new: required("hunger_new")?,
            saturation_new: required("saturation_new")?,
            effect_id: optional("effect_id"),
            effect_name: optional("effect_name"),
            effect_duration: optional("effect_duration"),
            effect_probability: optional("effect_probability"),
            old_markers: None,
            new_markers: None,
        })
    }

    /// Build one row; `cell` returns the trimmed, non-empty text of a column
    fn row(&self, id: String, cell: impl Fn(Option<usize>) -> Option<String>) -> CategoryRow {
        let mut hunger_old = cell(self.hunger_old);
        let mut saturation_old = cell(self.saturation_old);
        let mut hunger_new = cell(self.hunger_new);
        let mut saturation_new = cell(self.saturation_new);

        if let Some((raw_hunger, raw_saturation)) = self.old_markers {
            let has_old = cell(Some(raw_hunger)).is_some() && cell(Some(raw_saturation)).is_some();
            if !has_old {
                hunger_old = None;
                saturation_old = None;
            }
        }
        if let Some((raw_hunger, raw_saturation)) = self.new_markers.filter(|_| hunger_old.is_some()) {
            let has_new = cell(Some(raw_hunger)).is_some() || cell(Some(raw_saturation)).is_some();
            if has_new {
                // A filled raw cell with no value still marks the row modified
                if hunger_new.is_none() && saturation_new.is_none() {
                    hunger_new = hunger_old.clone();
                }
            } else {
                hunger_new = None;
                saturation_new = None;
            }
        }

        let effect_id = cell(self.effect_id);
        let has_effect = effect_id.is_some();
        CategoryRow {
            id,
            hunger_old,
            saturation_old,
            hunger_new,
            saturation_new,
            effect_id,
            effect_name: cell(self.effect_name).filter(|_| has_effect),
            effect_duration: cell(self.effect_duration).filter(|_| has_effect),
            effect_probability: cell(self.effect_probability).filter(|_| has_effect),
        }
    }
}
