use serde::{Deserialize, Serialize};

/// The full set of search parameters sent to the articles endpoint. Every
/// field is a plain string; the empty string is the canonical "unset"
/// value and is never serialized into a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub country: String,
    pub category: String,
    pub language: String,
    pub sources: String,
    pub from: String,
    pub to: String,
    pub q: String,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            category: String::new(),
            language: "en".to_string(),
            sources: String::new(),
            from: String::new(),
            to: String::new(),
            q: String::new(),
        }
    }
}

impl FilterSet {
    /// Copy of this set with only the country replaced.
    pub fn with_country(&self, code: &str) -> Self {
        let mut filters = self.clone();
        filters.country = code.to_string();
        filters
    }

    /// Query pairs for URL encoding, in declaration order. A field is
    /// included iff its value is non-empty; values are not trimmed, so a
    /// whitespace-only query string is still sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("country", self.country.as_str()),
            ("category", self.category.as_str()),
            ("language", self.language.as_str()),
            ("sources", self.sources.as_str()),
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("q", self.q.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// Apply a partial edit, leaving unmentioned fields untouched.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(country) = update.country {
            self.country = country;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(sources) = update.sources {
            self.sources = sources;
        }
        if let Some(from) = update.from {
            self.from = from;
        }
        if let Some(to) = update.to {
            self.to = to;
        }
        if let Some(q) = update.q {
            self.q = q;
        }
    }
}

/// A partial filter edit. `None` fields are left alone by `merge`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub country: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub sources: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub q: Option<String>,
}

impl FilterUpdate {
    pub fn category(value: &str) -> Self {
        Self {
            category: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn query(value: &str) -> Self {
        Self {
            q: Some(value.to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serialize_to_country_and_language() {
        let filters = FilterSet::default();
        let pairs = filters.query_pairs();
        assert_eq!(pairs, vec![("country", "us"), ("language", "en")]);
    }

    #[test]
    fn empty_fields_are_dropped() {
        let filters = FilterSet {
            category: "sports".to_string(),
            q: "election".to_string(),
            ..FilterSet::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("country", "us"),
                ("category", "sports"),
                ("language", "en"),
                ("q", "election"),
            ]
        );
    }

    #[test]
    fn whitespace_only_values_are_kept() {
        let filters = FilterSet {
            q: " ".to_string(),
            ..FilterSet::default()
        };
        assert!(filters.query_pairs().contains(&("q", " ")));
    }

    #[test]
    fn pair_order_is_stable() {
        let filters = FilterSet {
            category: "health".to_string(),
            sources: "bbc-news".to_string(),
            from: "2024-01-01".to_string(),
            to: "2024-02-01".to_string(),
            q: "vaccine".to_string(),
            ..FilterSet::default()
        };
        assert_eq!(filters.query_pairs(), filters.query_pairs());
        let keys: Vec<_> = filters.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["country", "category", "language", "sources", "from", "to", "q"]
        );
    }

    #[test]
    fn serialization_round_trips_to_the_same_present_keys() {
        let filters = FilterSet {
            category: "science".to_string(),
            q: "mars".to_string(),
            ..FilterSet::default()
        };
        let pairs = filters.query_pairs();

        let mut reparsed = FilterSet {
            country: String::new(),
            language: String::new(),
            ..FilterSet::default()
        };
        for (key, value) in &pairs {
            let field = match *key {
                "country" => &mut reparsed.country,
                "category" => &mut reparsed.category,
                "language" => &mut reparsed.language,
                "sources" => &mut reparsed.sources,
                "from" => &mut reparsed.from,
                "to" => &mut reparsed.to,
                "q" => &mut reparsed.q,
                other => panic!("unexpected key: {}", other),
            };
            *field = value.to_string();
        }
        assert_eq!(reparsed.query_pairs(), pairs);
    }

    #[test]
    fn merge_applies_only_set_fields() {
        let mut filters = FilterSet::default();
        filters.merge(FilterUpdate::category("sports"));
        assert_eq!(filters.category, "sports");
        assert_eq!(filters.country, "us");

        filters.merge(FilterUpdate {
            category: Some(String::new()),
            q: Some("world cup".to_string()),
            ..FilterUpdate::default()
        });
        assert_eq!(filters.category, "");
        assert_eq!(filters.q, "world cup");
        assert_eq!(filters.language, "en");
    }

    #[test]
    fn with_country_touches_nothing_else() {
        let filters = FilterSet {
            q: "economy".to_string(),
            ..FilterSet::default()
        };
        let changed = filters.with_country("de");
        assert_eq!(changed.country, "de");
        assert_eq!(changed.q, "economy");
        assert_eq!(changed.language, "en");
    }
}
