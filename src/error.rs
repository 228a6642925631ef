//! Data integrity errors
//!
//! Every failure here is raised while the catalogue is being built and aborts
//! construction. Each variant names the row or key that caused it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("food '{food}' references unknown category '{category}'")]
    UnknownCategory { food: String, category: String },

    #[error("category '{category}' appears more than once")]
    DuplicateCategory { category: String },

    #[error("category '{category}' has no old values and is missing new value '{field}'")]
    MissingNewValue { category: String, field: &'static str },

    #[error("category '{category}' has invalid decimal in '{field}': {value:?}")]
    InvalidDecimal {
        category: String,
        field: &'static str,
        value: String,
    },

    #[error("category '{category}' declares an effect but '{field}' is empty")]
    MissingEffectField { category: String, field: &'static str },

    #[error("category '{category}' has invalid effect duration {value:?}")]
    InvalidDuration { category: String, value: String },

    #[error("category '{category}' has effect probability {value} outside (0, 1]")]
    InvalidProbability { category: String, value: String },

    #[error("locale '{locale}' has no entry for '{key}'")]
    MissingLocaleKey { locale: &'static str, key: String },
}

pub type CatalogueResult<T> = std::result::Result<T, CatalogueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_key() {
        let err = CatalogueError::UnknownCategory {
            food: "apple_pie".to_string(),
            category: "pie".to_string(),
        };
        assert_eq!(err.to_string(), "food 'apple_pie' references unknown category 'pie'");

        let err = CatalogueError::MissingLocaleKey {
            locale: "en_us",
            key: "item.farmersdelight.apple_pie".to_string(),
        };
        assert!(err.to_string().contains("item.farmersdelight.apple_pie"));
    }
}
