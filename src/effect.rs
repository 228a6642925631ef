//! Timed status effects granted by eating a food
//!
//! Durations are stored in game ticks (20 per second). Source rows may give a
//! duration either as one of the named constants below or as a literal tick
//! count.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{CatalogueError, CatalogueResult};
use crate::language::Language;

pub const TICKS_PER_SECOND: u32 = 20;

/// Named duration constants, in ticks
static NAMED_DURATIONS: &[(&str, u32)] = &[
    ("BRIEF", 600),
    ("SHORT", 1200),
    ("MEDIUM", 3600),
    ("LONG", 6000),
];

/// Resolve a duration cell: named constant first, then a non-negative integer.
///
/// Names are accepted with or without the `_DURATION` suffix
/// (`SHORT` and `SHORT_DURATION` both give 1200).
pub fn parse_duration_ticks(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let name = raw.strip_suffix("_DURATION").unwrap_or(raw);
    NAMED_DURATIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, ticks)| *ticks)
        .or_else(|| raw.parse::<u32>().ok())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    name: String,
    duration_ticks: u32,
    probability: Decimal,
}

impl EffectDescriptor {
    /// Returns `None` unless `0 < probability <= 1`.
    pub fn new(name: impl Into<String>, duration_ticks: u32, probability: Decimal) -> Option<Self> {
        if probability <= Decimal::ZERO || probability > Decimal::ONE {
            return None;
        }
        Some(Self {
            name: name.into(),
            duration_ticks,
            probability,
        })
    }

    /// Build from the raw effect cells of a category row
    pub fn from_fields(
        category: &str,
        name: Option<&str>,
        duration: Option<&str>,
        probability: Option<&str>,
    ) -> CatalogueResult<Self> {
        let missing = |field| CatalogueError::MissingEffectField {
            category: category.to_string(),
            field,
        };
        let name = name.ok_or_else(|| missing("effect_name"))?;
        let duration = duration.ok_or_else(|| missing("effect_duration"))?;
        let probability = probability.ok_or_else(|| missing("effect_probability"))?;

        let duration_ticks =
            parse_duration_ticks(duration).ok_or_else(|| CatalogueError::InvalidDuration {
                category: category.to_string(),
                value: duration.to_string(),
            })?;

        let invalid_probability = || CatalogueError::InvalidProbability {
            category: category.to_string(),
            value: probability.to_string(),
        };
        let probability = Decimal::from_str(probability.trim()).map_err(|_| invalid_probability())?;

        Self::new(name, duration_ticks, probability).ok_or_else(invalid_probability)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }

    pub fn probability(&self) -> Decimal {
        self.probability
    }

    /// English sentence, e.g. "30% chance to grant Comfort for 5 minutes"
    pub fn describe(&self) -> String {
        self.describe_in(Language::English)
    }

    pub fn describe_in(&self, lang: Language) -> String {
        let certain = self.probability == Decimal::ONE;
        let percent = (self.probability * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let duration = self.describe_duration_in(lang);

        match lang {
            Language::Chinese => {
                let chance = if certain {
                    "必定".to_string()
                } else {
                    format!("{}%的几率", percent)
                };
                format!("{}带来{}的{}效果", chance, duration, self.name)
            }
            Language::English => {
                let chance = if certain {
                    "Certain to grant".to_string()
                } else {
                    format!("{}% chance to grant", percent)
                };
                if duration.is_empty() {
                    format!("{} {}", chance, self.name)
                } else {
                    format!("{} {} for {}", chance, self.name, duration)
                }
            }
        }
    }

    pub fn describe_duration(&self) -> String {
        self.describe_duration_in(Language::English)
    }

    /// Minutes and seconds of the effect, each part omitted when zero.
    ///
    /// The minute unit gets a suffix when there is no seconds part, so that
    /// "1分钟" / "1 minute" differ from "1分30秒" / "1 min 30 sec".
    pub fn describe_duration_in(&self, lang: Language) -> String {
        let seconds = Decimal::from(self.duration_ticks) / Decimal::from(TICKS_PER_SECOND);
        let sixty = Decimal::from(60);
        let minutes = (seconds / sixty).floor().normalize();
        let rest = (seconds % sixty).normalize();

        let mut parts: Vec<String> = Vec::with_capacity(2);
        if !minutes.is_zero() {
            parts.push(match lang {
                Language::Chinese => format!("{}分", minutes),
                Language::English => format!("{} min", minutes),
            });
        }
        if !rest.is_zero() {
            parts.push(match lang {
                Language::Chinese => format!("{}秒", rest),
                Language::English => format!("{} sec", rest),
            });
        } else if let Some(minute_part) = parts.first_mut() {
            match lang {
                Language::Chinese => minute_part.push('钟'),
                Language::English if minutes == Decimal::ONE => minute_part.push_str("ute"),
                Language::English => minute_part.push_str("utes"),
            }
        }

        match lang {
            Language::Chinese => parts.concat(),
            Language::English => parts.join(" "),
        }
    }
}
