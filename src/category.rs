//! Food categories: nutrition values across the 1.18.2 schema change
//!
//! A category's nutrition values either stayed the same across the version
//! boundary, changed at it, or only exist after it. Rendering the changed case
//! emits both pairs inside version-conditional markup that a downstream
//! renderer resolves:
//!
//! ```text
//! Hunger: $(t:<1.18.2)x8$(), $(t:>=1.18.2)x10$(), Saturation: ...
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::effect::EffectDescriptor;
use crate::error::{CatalogueError, CatalogueResult};
use crate::language::Language;

/// Version at which the nutrition schema changed
pub const SCHEMA_BOUNDARY: &str = "1.18.2";

/// One hunger/saturation pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nutrition {
    pub hunger: Decimal,
    pub saturation: Decimal,
}

impl Nutrition {
    pub fn new(hunger: Decimal, saturation: Decimal) -> Self {
        Self { hunger, saturation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionState {
    /// Same values before and after the boundary
    Stable(Nutrition),
    /// Values changed at the boundary
    Modified { old: Nutrition, new: Nutrition },
    /// Category only exists after the boundary
    New(Nutrition),
}

impl NutritionState {
    pub fn kind(&self) -> &'static str {
        match self {
            NutritionState::Stable(_) => "stable",
            NutritionState::Modified { .. } => "modified",
            NutritionState::New(_) => "new",
        }
    }
}

/// Raw cells of one category table row. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: String,
    pub hunger_old: Option<String>,
    pub saturation_old: Option<String>,
    pub hunger_new: Option<String>,
    pub saturation_new: Option<String>,
    pub effect_id: Option<String>,
    pub effect_name: Option<String>,
    pub effect_duration: Option<String>,
    pub effect_probability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    id: String,
    nutrition: NutritionState,
    effect: Option<EffectDescriptor>,
}

/// Treat whitespace-only cells as absent
fn present(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_decimal(category: &str, field: &'static str, raw: &str) -> CatalogueResult<Decimal> {
    Decimal::from_str(raw).map_err(|_| CatalogueError::InvalidDecimal {
        category: category.to_string(),
        field,
        value: raw.to_string(),
    })
}

impl CategoryRecord {
    pub fn new(id: impl Into<String>, nutrition: NutritionState, effect: Option<EffectDescriptor>) -> Self {
        Self {
            id: id.into(),
            nutrition,
            effect,
        }
    }

    /// Classify a source row as stable, modified or new and parse its values.
    ///
    /// A modified row may leave either new value empty; the old value is
    /// carried forward in its place.
    pub fn from_row(row: &CategoryRow) -> CatalogueResult<Self> {
        let id = row.id.trim();
        let hunger_old = present(&row.hunger_old);
        let saturation_old = present(&row.saturation_old);
        let hunger_new = present(&row.hunger_new);
        let saturation_new = present(&row.saturation_new);

        let nutrition = match (hunger_old, saturation_old) {
            (Some(h_old), Some(s_old)) => {
                let old = Nutrition::new(
                    parse_decimal(id, "hunger_old", h_old)?,
                    parse_decimal(id, "saturation_old", s_old)?,
                );
                if hunger_new.is_none() && saturation_new.is_none() {
                    NutritionState::Stable(old)
                } else {
                    let new = Nutrition::new(
                        match hunger_new {
                            Some(h) => parse_decimal(id, "hunger_new", h)?,
                            None => old.hunger,
                        },
                        match saturation_new {
                            Some(s) => parse_decimal(id, "saturation_new", s)?,
                            None => old.saturation,
                        },
                    );
                    NutritionState::Modified { old, new }
                }
            }
            _ => {
                let missing = |field| CatalogueError::MissingNewValue {
                    category: id.to_string(),
                    field,
                };
                let h = hunger_new.ok_or_else(|| missing("hunger_new"))?;
                let s = saturation_new.ok_or_else(|| missing("saturation_new"))?;
                NutritionState::New(Nutrition::new(
                    parse_decimal(id, "hunger_new", h)?,
                    parse_decimal(id, "saturation_new", s)?,
                ))
            }
        };

        let effect = match present(&row.effect_id) {
            Some(_) => Some(EffectDescriptor::from_fields(
                id,
                present(&row.effect_name),
                present(&row.effect_duration),
                present(&row.effect_probability),
            )?),
            None => None,
        };

        Ok(Self::new(id, nutrition, effect))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nutrition(&self) -> &NutritionState {
        &self.nutrition
    }

    pub fn effect(&self) -> Option<&EffectDescriptor> {
        self.effect.as_ref()
    }

    pub fn describe_nutrition(&self) -> String {
        self.describe_nutrition_in(Language::English)
    }

    pub fn describe_nutrition_in(&self, lang: Language) -> String {
        let (hunger, saturation) = match &self.nutrition {
            NutritionState::Stable(n) | NutritionState::New(n) => {
                (format!("x{}", n.hunger), format!("x{}", n.saturation))
            }
            NutritionState::Modified { old, new } => (
                versioned(old.hunger, new.hunger),
                versioned(old.saturation, new.saturation),
            ),
        };
        format!(
            "{}{}{}{}{}",
            lang.hunger_label(),
            hunger,
            lang.clause_separator(),
            lang.saturation_label(),
            saturation
        )
    }

    pub fn describe_effect(&self) -> Option<String> {
        self.describe_effect_in(Language::English)
    }

    pub fn describe_effect_in(&self, lang: Language) -> Option<String> {
        self.effect.as_ref().map(|e| e.describe_in(lang))
    }
}

/// Old value shown before the boundary, new value from it onwards
fn versioned(old: Decimal, new: Decimal) -> String {
    format!(
        "$(t:<{b})x{old}$(), $(t:>={b})x{new}$()",
        b = SCHEMA_BOUNDARY,
        old = old,
        new = new
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, old: (&str, &str), new: (&str, &str)) -> CategoryRow {
        let cell = |s: &str| if s.is_empty() { None } else { Some(s.to_string()) };
        CategoryRow {
            id: id.to_string(),
            hunger_old: cell(old.0),
            saturation_old: cell(old.1),
            hunger_new: cell(new.0),
            saturation_new: cell(new.1),
            ..Default::default()
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_stable_row() {
        let record = CategoryRecord::from_row(&row("roast_chicken_block", ("6", "4"), ("", ""))).unwrap();
        assert_eq!(
            record.nutrition(),
            &NutritionState::Stable(Nutrition::new(dec("6"), dec("4")))
        );
        assert_eq!(record.describe_nutrition(), "Hunger: x6, Saturation: x4");
        assert_eq!(
            record.describe_nutrition_in(Language::Chinese),
            "饥饿值： x6， 饱和度： x4"
        );
        assert!(record.effect().is_none());
        assert_eq!(record.describe_effect(), None);
    }

    #[test]
    fn test_stable_keeps_source_scale() {
        let record = CategoryRecord::from_row(&row("cabbage_leaf", ("1", "0.40"), ("", ""))).unwrap();
        assert_eq!(record.describe_nutrition(), "Hunger: x1, Saturation: x0.40");
    }

    #[test]
    fn test_modified_carries_old_saturation_forward() {
        let record = CategoryRecord::from_row(&row("stew", ("8", "6"), ("10", ""))).unwrap();
        match record.nutrition() {
            NutritionState::Modified { old, new } => {
                assert_eq!(*old, Nutrition::new(dec("8"), dec("6")));
                assert_eq!(*new, Nutrition::new(dec("10"), dec("6")));
            }
            other => panic!("expected modified, got {:?}", other),
        }
    }

    #[test]
    fn test_modified_carries_old_hunger_forward() {
        let record = CategoryRecord::from_row(&row("stew", ("8", "6"), ("", "0.8"))).unwrap();
        assert_eq!(
            record.nutrition(),
            &NutritionState::Modified {
                old: Nutrition::new(dec("8"), dec("6")),
                new: Nutrition::new(dec("8"), dec("0.8")),
            }
        );
    }

    #[test]
    fn test_modified_rendering_wraps_both_pairs() {
        let record = CategoryRecord::from_row(&row("stew", ("8", "0.6"), ("10", "0.8"))).unwrap();
        assert_eq!(
            record.describe_nutrition(),
            "Hunger: $(t:<1.18.2)x8$(), $(t:>=1.18.2)x10$(), \
             Saturation: $(t:<1.18.2)x0.6$(), $(t:>=1.18.2)x0.8$()"
        );
    }

    #[test]
    fn test_new_row() {
        let record = CategoryRecord::from_row(&row("dumplings", ("", ""), ("8", "0.8"))).unwrap();
        assert_eq!(record.nutrition().kind(), "new");
        assert_eq!(record.describe_nutrition(), "Hunger: x8, Saturation: x0.8");
    }

    #[test]
    fn test_partial_old_pair_is_new() {
        let record = CategoryRecord::from_row(&row("pie", ("3", ""), ("4", "0.3"))).unwrap();
        assert_eq!(
            record.nutrition(),
            &NutritionState::New(Nutrition::new(dec("4"), dec("0.3")))
        );
    }

    #[test]
    fn test_new_row_missing_value_is_error() {
        let err = CategoryRecord::from_row(&row("dumplings", ("", ""), ("8", ""))).unwrap_err();
        assert_eq!(
            err,
            CatalogueError::MissingNewValue {
                category: "dumplings".to_string(),
                field: "saturation_new",
            }
        );
    }

    #[test]
    fn test_invalid_decimal_is_error() {
        let err = CategoryRecord::from_row(&row("pie", ("three", "0.3"), ("", ""))).unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidDecimal { field: "hunger_old", .. }));
    }

    #[test]
    fn test_whitespace_cells_are_absent() {
        let record = CategoryRecord::from_row(&row("pie", ("3", "0.3"), ("  ", " "))).unwrap();
        assert_eq!(record.nutrition().kind(), "stable");
    }

    #[test]
    fn test_effect_is_parsed_when_effect_id_present() {
        let mut r = row("hot_cocoa", ("8", "0.6"), ("", ""));
        r.effect_id = Some("comfort".to_string());
        r.effect_name = Some("Comfort".to_string());
        r.effect_duration = Some("SHORT_DURATION".to_string());
        r.effect_probability = Some("1.0".to_string());
        let record = CategoryRecord::from_row(&r).unwrap();
        assert_eq!(
            record.describe_effect_in(Language::Chinese).as_deref(),
            Some("必定带来1分钟的Comfort效果")
        );
    }

    #[test]
    fn test_effect_fields_ignored_without_effect_id() {
        let mut r = row("bread", ("5", "0.6"), ("", ""));
        r.effect_name = Some("Comfort".to_string());
        let record = CategoryRecord::from_row(&r).unwrap();
        assert!(record.effect().is_none());
    }
}
