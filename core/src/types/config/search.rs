use serde::{Deserialize, Serialize};

/// Fuzzy matcher settings.
///
/// Defaults: threshold 0.3, distance 255, minimum run of 2 matched
/// characters, and the keys `description`, `name`, `maintainer.name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// 0.0 accepts exact matches only, 1.0 accepts anything.
    pub threshold: f64,
    /// How far from `location` a match may drift before it scores 1.0.
    pub distance: usize,
    /// Character offset where matches are expected to start.
    pub location: usize,
    pub ignore_location: bool,
    /// Runs of matched characters shorter than this are discarded.
    pub min_match_char_length: usize,
    /// Keep scanning the whole field after a good match is found.
    pub find_all_matches: bool,
    pub is_case_sensitive: bool,
    pub ignore_field_norm: bool,
    pub field_norm_weight: f64,
    pub include_matches: bool,
    pub should_sort: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    pub keys: Vec<SearchKey>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            distance: 255,
            location: 0,
            ignore_location: false,
            min_match_char_length: 2,
            find_all_matches: true,
            is_case_sensitive: false,
            ignore_field_norm: false,
            field_norm_weight: 1.0,
            include_matches: false,
            should_sort: true,
            limit: None,
            keys: default_keys(),
        }
    }
}

impl SearchOptions {
    /// Validates option values and returns a list of problems.
    /// Returns empty vec if the options are valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(format!(
                "threshold must be between 0 and 1, got {}",
                self.threshold
            ));
        }

        if self.min_match_char_length == 0 {
            errors.push("min_match_char_length must be at least 1".to_string());
        }

        if !valid_norm_weight(self.field_norm_weight) {
            errors.push(format!(
                "field_norm_weight must be a finite non-negative number, got {}",
                self.field_norm_weight
            ));
        }

        if self.limit == Some(0) {
            errors.push("limit must be at least 1 when set".to_string());
        }

        if self.keys.is_empty() {
            errors.push("at least one search key is required".to_string());
        }

        for key in &self.keys {
            if key.path.trim().is_empty() {
                errors.push("search key path must not be empty".to_string());
            }
            if !valid_key_weight(key.weight) {
                errors.push(format!(
                    "weight of key '{}' must be a finite number greater than 0, got {}",
                    key.path, key.weight
                ));
            }
        }

        errors
    }

    /// Returns a copy with every invalid value replaced by its default.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();

        let keys: Vec<SearchKey> = self
            .keys
            .iter()
            .filter(|key| !key.path.trim().is_empty() && valid_key_weight(key.weight))
            .cloned()
            .collect();

        Self {
            threshold: if (0.0..=1.0).contains(&self.threshold) {
                self.threshold
            } else {
                defaults.threshold
            },
            min_match_char_length: if self.min_match_char_length == 0 {
                defaults.min_match_char_length
            } else {
                self.min_match_char_length
            },
            field_norm_weight: if valid_norm_weight(self.field_norm_weight) {
                self.field_norm_weight
            } else {
                defaults.field_norm_weight
            },
            limit: self.limit.filter(|limit| *limit > 0),
            keys: if keys.is_empty() { defaults.keys } else { keys },
            ..self.clone()
        }
    }
}

/// A searchable field and its relative weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchKey {
    pub path: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl SearchKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            weight: default_weight(),
        }
    }

    pub fn weighted(path: impl Into<String>, weight: f64) -> Self {
        Self {
            path: path.into(),
            weight,
        }
    }
}

fn default_keys() -> Vec<SearchKey> {
    ["description", "name", "maintainer.name"]
        .into_iter()
        .map(SearchKey::new)
        .collect()
}

fn valid_norm_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

fn valid_key_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

fn default_weight() -> f64 {
    1.0
}
