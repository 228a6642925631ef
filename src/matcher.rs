//! Match Engine
//!
//! Scores every food's English name against a free-text query and returns
//! the matches at or above a threshold, best first.
//!
//! Scoring runs across foods with Rayon. Results are collected in catalogue
//! order and then stable-sorted, so equal scores keep catalogue order.

use rayon::prelude::*;

use crate::catalogue::{Catalogue, FoodEntry, Locale};
use crate::utils::fuzz::token_set_ratio;

/// Minimum score kept by default. High, because many catalogue names are
/// short and share words ("Pie", "Slice", "Stew").
pub const DEFAULT_MATCH_THRESHOLD: u8 = 90;

/// Locale whose names queries are matched against
pub const MATCH_LOCALE: Locale = Locale::EnUs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodMatch<'a> {
    pub food: &'a FoodEntry,
    /// Similarity in 0..=100
    pub score: u8,
}

/// Rank catalogue foods against `query`
///
/// Returns foods scoring `>= threshold`, sorted by score descending. An empty
/// or blank query matches nothing.
pub fn search<'a>(query: &str, catalogue: &'a Catalogue, threshold: u8) -> Vec<FoodMatch<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || catalogue.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<FoodMatch<'a>> = catalogue
        .foods()
        .par_iter()
        .filter_map(|food| {
            let name = catalogue.localized_name(food, MATCH_LOCALE).to_lowercase();
            let score = token_set_ratio(&query, &name);
            (score >= threshold).then_some(FoodMatch { food, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query = %query,
        candidates = catalogue.foods().len(),
        retained = matches.len(),
        threshold,
        "Search finished"
    );
    matches
}

/// Engine bound to one catalogue and threshold
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    catalogue: &'a Catalogue,
    threshold: u8,
}

impl<'a> MatchEngine<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self {
            catalogue,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Threshold is clamped to 100
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    pub fn search(&self, query: &str) -> Vec<FoodMatch<'a>> {
        search(query, self.catalogue, self.threshold)
    }
}
