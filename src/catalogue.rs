//! Food catalogue
//!
//! Joins the category table, the food table and the two locale dictionaries
//! into one read-only value. All cross-references are checked here, once:
//! every food must point at a known category and have a name in both locales.
//! After `Catalogue::build` succeeds no lookup on it can fail.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::{CategoryRecord, CategoryRow, NutritionState};
use crate::error::{CatalogueError, CatalogueResult};

/// Mod namespace used in locale keys (`item.farmersdelight.<key>`)
pub const DEFAULT_NAMESPACE: &str = "farmersdelight";

/// Locale dictionaries a catalogue is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Native display names
    ZhCn,
    /// Reference names, used for matching queries
    EnUs,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh_cn",
            Locale::EnUs => "en_us",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Locale key -> display text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LocaleDictionary(FxHashMap<String, String>);

impl LocaleDictionary {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Locales {
    pub zh_cn: LocaleDictionary,
    pub en_us: LocaleDictionary,
}

impl Locales {
    pub fn dictionary(&self, locale: Locale) -> &LocaleDictionary {
        match locale {
            Locale::ZhCn => &self.zh_cn,
            Locale::EnUs => &self.en_us,
        }
    }
}

/// Raw cells of one food table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodRow {
    pub lookup_key: String,
    pub category_id: String,
}

impl FoodRow {
    pub fn new(lookup_key: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            lookup_key: lookup_key.into(),
            category_id: category_id.into(),
        }
    }
}

pub fn locale_key(namespace: &str, lookup_key: &str) -> String {
    format!("item.{}.{}", namespace, lookup_key)
}

/// A food item with its names resolved in both locales
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodEntry {
    lookup_key: String,
    category_id: String,
    locale_key: String,
    name_zh: String,
    name_en: String,
}

impl FoodEntry {
    pub fn lookup_key(&self) -> &str {
        &self.lookup_key
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn locale_key(&self) -> &str {
        &self.locale_key
    }

    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::ZhCn => &self.name_zh,
            Locale::EnUs => &self.name_en,
        }
    }
}

/// Counts reported after loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogueStats {
    pub categories: usize,
    pub stable: usize,
    pub modified: usize,
    pub new: usize,
    pub with_effect: usize,
    pub foods: usize,
}

impl fmt::Display for CatalogueStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Categories: {}", self.categories)?;
        writeln!(f, "    stable: {}", self.stable)?;
        writeln!(f, "    modified: {}", self.modified)?;
        writeln!(f, "    new: {}", self.new)?;
        writeln!(f, "    with effect: {}", self.with_effect)?;
        write!(f, "  Foods: {}", self.foods)
    }
}

#[derive(Debug, Clone)]
pub struct Catalogue {
    /// Categories in source order
    categories: Vec<CategoryRecord>,
    /// Category id -> position in `categories`
    category_index: FxHashMap<String, usize>,
    /// Foods in source order
    foods: Vec<FoodEntry>,
    namespace: String,
}

impl Catalogue {
    pub fn build(
        category_rows: &[CategoryRow],
        food_rows: &[FoodRow],
        locales: &Locales,
        namespace: &str,
    ) -> CatalogueResult<Self> {
        let mut categories = Vec::with_capacity(category_rows.len());
        let mut category_index = FxHashMap::default();
        for row in category_rows {
            let record = CategoryRecord::from_row(row)?;
            if category_index.contains_key(record.id()) {
                return Err(CatalogueError::DuplicateCategory {
                    category: record.id().to_string(),
                });
            }
            category_index.insert(record.id().to_string(), categories.len());
            categories.push(record);
        }

        let mut foods = Vec::with_capacity(food_rows.len());
        for row in food_rows {
            let lookup_key = row.lookup_key.trim();
            let category_id = row.category_id.trim();
            if !category_index.contains_key(category_id) {
                return Err(CatalogueError::UnknownCategory {
                    food: lookup_key.to_string(),
                    category: category_id.to_string(),
                });
            }

            let key = locale_key(namespace, lookup_key);
            let resolve = |locale: Locale| {
                locales
                    .dictionary(locale)
                    .get(&key)
                    .map(str::to_string)
                    .ok_or_else(|| CatalogueError::MissingLocaleKey {
                        locale: locale.code(),
                        key: key.clone(),
                    })
            };
            let name_zh = resolve(Locale::ZhCn)?;
            let name_en = resolve(Locale::EnUs)?;

            foods.push(FoodEntry {
                lookup_key: lookup_key.to_string(),
                category_id: category_id.to_string(),
                locale_key: key,
                name_zh,
                name_en,
            });
        }

        let catalogue = Self {
            categories,
            category_index,
            foods,
            namespace: namespace.to_string(),
        };
        tracing::info!(
            categories = catalogue.categories.len(),
            foods = catalogue.foods.len(),
            namespace = %catalogue.namespace,
            "Catalogue built"
        );
        Ok(catalogue)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&CategoryRecord> {
        self.category_index.get(id).map(|&idx| &self.categories[idx])
    }

    /// Category of a food. Only fails for entries taken from another catalogue.
    pub fn category_of(&self, entry: &FoodEntry) -> CatalogueResult<&CategoryRecord> {
        self.category(entry.category_id())
            .ok_or_else(|| CatalogueError::UnknownCategory {
                food: entry.lookup_key().to_string(),
                category: entry.category_id().to_string(),
            })
    }

    pub fn foods(&self) -> &[FoodEntry] {
        &self.foods
    }

    pub fn food(&self, lookup_key: &str) -> Option<&FoodEntry> {
        self.foods.iter().find(|f| f.lookup_key() == lookup_key)
    }

    pub fn localized_name<'a>(&self, entry: &'a FoodEntry, locale: Locale) -> &'a str {
        entry.name(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn stats(&self) -> CatalogueStats {
        let mut stats = CatalogueStats {
            categories: self.categories.len(),
            foods: self.foods.len(),
            ..Default::default()
        };
        for record in &self.categories {
            match record.nutrition() {
                NutritionState::Stable(_) => stats.stable += 1,
                NutritionState::Modified { .. } => stats.modified += 1,
                NutritionState::New(_) => stats.new += 1,
            }
            if record.effect().is_some() {
                stats.with_effect += 1;
            }
        }
        stats
    }
}

/// See [`Catalogue::build`]
pub fn build_catalogue(
    category_rows: &[CategoryRow],
    food_rows: &[FoodRow],
    locales: &Locales,
    namespace: &str,
) -> CatalogueResult<Catalogue> {
    Catalogue::build(category_rows, food_rows, locales, namespace)
}
