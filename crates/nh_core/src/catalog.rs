use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Article categories understood by the aggregation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// Wire value, as sent in the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::General => "General",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidFilter(format!("unknown category: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Countries the API serves headlines for.
pub const COUNTRIES: [Country; 14] = [
    Country { code: "us", name: "United States", flag: "🇺🇸" },
    Country { code: "gb", name: "United Kingdom", flag: "🇬🇧" },
    Country { code: "ca", name: "Canada", flag: "🇨🇦" },
    Country { code: "au", name: "Australia", flag: "🇦🇺" },
    Country { code: "de", name: "Germany", flag: "🇩🇪" },
    Country { code: "jp", name: "Japan", flag: "🇯🇵" },
    Country { code: "in", name: "India", flag: "🇮🇳" },
    Country { code: "br", name: "Brazil", flag: "🇧🇷" },
    Country { code: "mx", name: "Mexico", flag: "🇲🇽" },
    Country { code: "it", name: "Italy", flag: "🇮🇹" },
    Country { code: "es", name: "Spain", flag: "🇪🇸" },
    Country { code: "nl", name: "Netherlands", flag: "🇳🇱" },
    Country { code: "se", name: "Sweden", flag: "🇸🇪" },
    Country { code: "no", name: "Norway", flag: "🇳🇴" },
];

pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

pub const LANGUAGES: [Language; 8] = [
    Language { code: "en", label: "English" },
    Language { code: "es", label: "Spanish" },
    Language { code: "fr", label: "French" },
    Language { code: "de", label: "German" },
    Language { code: "it", label: "Italian" },
    Language { code: "pt", label: "Portuguese" },
    Language { code: "ru", label: "Russian" },
    Language { code: "zh", label: "Chinese" },
];
