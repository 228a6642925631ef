//! Text report for query results
//!
//! Layout per match:
//!
//! ```text
//! 烤鸡块/Roast Chicken Block：
//! 	饥饿值： x6， 饱和度： x4
//! 	必定带来5分钟的滋养效果
//! ```
//!
//! followed by one closing line for the whole query.

use crate::catalogue::{Catalogue, Locale};
use crate::error::CatalogueResult;
use crate::language::Language;
use crate::matcher::FoodMatch;

pub struct ReportFormatter {
    lang: Language,
}

impl ReportFormatter {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Name pair, nutrition line and optional effect line for one match
    pub fn format_match(&self, catalogue: &Catalogue, m: &FoodMatch<'_>) -> CatalogueResult<String> {
        let category = catalogue.category_of(m.food)?;
        let mut out = String::with_capacity(128);

        out.push_str(&format!(
            "{}/{}{}\n",
            catalogue.localized_name(m.food, Locale::ZhCn),
            catalogue.localized_name(m.food, Locale::EnUs),
            self.lang.heading_colon()
        ));
        out.push_str(&format!("\t{}\n", category.describe_nutrition_in(self.lang)));
        if let Some(effect) = category.describe_effect_in(self.lang) {
            out.push_str(&format!("\t{}\n", effect));
        }
        Ok(out)
    }

    /// Every match in rank order, then the closing line
    pub fn format_results(&self, catalogue: &Catalogue, matches: &[FoodMatch<'_>]) -> CatalogueResult<String> {
        let mut out = String::new();
        if matches.is_empty() {
            out.push_str(self.lang.no_results_line());
            out.push('\n');
        }
        for m in matches {
            out.push_str(&self.format_match(catalogue, m)?);
        }
        out.push_str(self.lang.closing_line());
        out.push('\n');
        Ok(out)
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(Language::Chinese)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{build_catalogue, locale_key, FoodRow, Locales, DEFAULT_NAMESPACE};
    use crate::category::CategoryRow;
    use crate::matcher::search;

    fn catalogue() -> Catalogue {
        let categories = vec![
            CategoryRow {
                id: "roast_chicken_block".to_string(),
                hunger_old: Some("6".to_string()),
                saturation_old: Some("4".to_string()),
                ..Default::default()
            },
            CategoryRow {
                id: "stew".to_string(),
                hunger_old: Some("8".to_string()),
                saturation_old: Some("0.6".to_string()),
                hunger_new: Some("10".to_string()),
                effect_id: Some("nourishment".to_string()),
                effect_name: Some("滋养".to_string()),
                effect_duration: Some("MEDIUM_DURATION".to_string()),
                effect_probability: Some("1".to_string()),
                ..Default::default()
            },
        ];
        let foods = vec![
            FoodRow::new("roast_chicken_block", "roast_chicken_block"),
            FoodRow::new("beef_stew", "stew"),
        ];
        let key = |k: &str| locale_key(DEFAULT_NAMESPACE, k);
        let locales = Locales {
            zh_cn: [(key("roast_chicken_block"), "烤鸡块"), (key("beef_stew"), "牛肉炖菜")]
                .into_iter()
                .collect(),
            en_us: [(key("roast_chicken_block"), "Roast Chicken Block"), (key("beef_stew"), "Beef Stew")]
                .into_iter()
                .collect(),
        };
        build_catalogue(&categories, &foods, &locales, DEFAULT_NAMESPACE).unwrap()
    }

    #[test]
    fn test_format_stable_match() {
        let cat = catalogue();
        let matches = search("roast chicken", &cat, 80);
        let text = ReportFormatter::new(Language::Chinese)
            .format_match(&cat, &matches[0])
            .unwrap();
        assert_eq!(text, "烤鸡块/Roast Chicken Block：\n\t饥饿值： x6， 饱和度： x4\n");
    }

    #[test]
    fn test_format_match_with_effect() {
        let cat = catalogue();
        let matches = search("beef stew", &cat, 90);
        let text = ReportFormatter::new(Language::English)
            .format_match(&cat, &matches[0])
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "牛肉炖菜/Beef Stew:");
        assert_eq!(
            lines[1],
            "\tHunger: $(t:<1.18.2)x8$(), $(t:>=1.18.2)x10$(), \
             Saturation: $(t:<1.18.2)x0.6$(), $(t:>=1.18.2)x0.6$()"
        );
        assert_eq!(lines[2], "\tCertain to grant 滋养 for 3 minutes");
    }

    #[test]
    fn test_format_results_closing_and_empty() {
        let cat = catalogue();
        let formatter = ReportFormatter::default();

        let text = formatter.format_results(&cat, &[]).unwrap();
        assert_eq!(text, "没有找到匹配的食品\n就这些...\n");

        let matches = search("stew", &cat, 90);
        let text = formatter.format_results(&cat, &matches).unwrap();
        assert!(text.starts_with("牛肉炖菜/Beef Stew："));
        assert!(text.contains("必定带来3分钟的滋养效果"));
        assert!(text.ends_with("就这些...\n"));
    }
}
