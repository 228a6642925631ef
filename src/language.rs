//! Render language for report text
//!
//! Nutrition and effect text can be produced in Chinese (the tool's native
//! output) or English. Only fixed labels and units differ between the two;
//! numbers and markup are identical.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Chinese,
    #[default]
    English,
}

impl Language {
    pub(crate) fn hunger_label(self) -> &'static str {
        match self {
            Language::Chinese => "饥饿值： ",
            Language::English => "Hunger: ",
        }
    }

    pub(crate) fn saturation_label(self) -> &'static str {
        match self {
            Language::Chinese => "饱和度： ",
            Language::English => "Saturation: ",
        }
    }

    /// Separator between the hunger and saturation clauses
    pub(crate) fn clause_separator(self) -> &'static str {
        match self {
            Language::Chinese => "， ",
            Language::English => ", ",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Language::Chinese => "输入食品英文名： ",
            Language::English => "Enter food name (English): ",
        }
    }

    pub fn closing_line(self) -> &'static str {
        match self {
            Language::Chinese => "就这些...",
            Language::English => "That's all...",
        }
    }

    pub fn no_results_line(self) -> &'static str {
        match self {
            Language::Chinese => "没有找到匹配的食品",
            Language::English => "No matching food found",
        }
    }

    /// Printed instead of a report when an input line is not UTF-8 text
    pub fn invalid_input_line(self) -> &'static str {
        match self {
            Language::Chinese => "输入不是有效的文本，请重新输入",
            Language::English => "Input is not valid text, please try again",
        }
    }

    /// Punctuation after the name pair heading a match
    pub(crate) fn heading_colon(self) -> &'static str {
        match self {
            Language::Chinese => "：",
            Language::English => ":",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Chinese => write!(f, "zh"),
            Language::English => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh_cn" | "zh-cn" | "chinese" => Ok(Language::Chinese),
            "en" | "en_us" | "en-us" | "english" => Ok(Language::English),
            other => anyhow::bail!("Unknown language '{}' (expected 'zh' or 'en')", other),
        }
    }
}
