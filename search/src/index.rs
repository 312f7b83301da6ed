//! Multi-key fuzzy index over a fixed collection.

use crate::norm::field_norm;
use crate::pattern::Pattern;
use crate::results::{FieldMatch, SearchHit};
use cardsift_core::{SearchOptions, Searchable};
use tracing::{debug, trace};

/// A key path with its weight normalized so all weights sum to 1.
#[derive(Debug, Clone)]
struct WeightedKey {
    path: String,
    weight: f64,
}

/// A prepared field value.
#[derive(Debug, Clone)]
struct Field {
    text: Vec<char>,
    norm: f64,
}

/// Prepared fields of one item, one slot per key.
#[derive(Debug, Clone)]
struct Record {
    index: usize,
    fields: Vec<Option<Field>>,
}

/// Fuzzy index built once over an immutable item list.
///
/// Blank or missing fields are not indexed and can never match.
pub struct FuzzyIndex<T> {
    items: Vec<T>,
    records: Vec<Record>,
    keys: Vec<WeightedKey>,
    options: SearchOptions,
}

impl<T: Searchable> FuzzyIndex<T> {
    pub fn build(items: Vec<T>, options: SearchOptions) -> Self {
        let keys = weighted_keys(&options);

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| Record {
                index,
                fields: keys
                    .iter()
                    .map(|key| {
                        item.field(&key.path)
                            .filter(|value| !value.trim().is_empty())
                            .map(|value| prepare(value, &options))
                    })
                    .collect(),
            })
            .collect();

        debug!(items = items.len(), keys = keys.len(), "built fuzzy index");

        Self {
            items,
            records,
            keys,
            options,
        }
    }

    /// Returns hits best first (ties keep collection order).
    ///
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let pattern = Pattern::new(query, &self.options);
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .records
            .iter()
            .filter_map(|record| self.score_record(&pattern, record))
            .collect();

        if self.options.should_sort {
            hits.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.index.cmp(&b.index)));
        }
        if let Some(limit) = self.options.limit {
            hits.truncate(limit);
        }

        trace!(query, hits = hits.len(), "fuzzy search");
        hits
    }

    fn score_record(&self, pattern: &Pattern, record: &Record) -> Option<SearchHit> {
        let mut score = 1.0;
        let mut matches = Vec::new();

        for (key, field) in self.keys.iter().zip(&record.fields) {
            let Some(field) = field else {
                continue;
            };

            let outcome = pattern.search_in(&field.text, &self.options);
            if !outcome.is_match {
                continue;
            }

            // A perfect match would zero the product, so floor it.
            let base = if outcome.score == 0.0 {
                f64::EPSILON
            } else {
                outcome.score
            };
            let norm = if self.options.ignore_field_norm {
                1.0
            } else {
                field.norm
            };
            score *= base.powf(key.weight * norm);

            matches.push(FieldMatch {
                key: key.path.clone(),
                score: outcome.score,
                indices: outcome.indices,
            });
        }

        if matches.is_empty() {
            return None;
        }

        Some(SearchHit {
            index: record.index,
            score,
            matches,
        })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn prepare(value: &str, options: &SearchOptions) -> Field {
    let text = if options.is_case_sensitive {
        value.chars().collect()
    } else {
        value.to_lowercase().chars().collect()
    };

    Field {
        text,
        norm: field_norm(value, options.field_norm_weight),
    }
}

/// Normalizes key weights to sum to 1. Non-finite or non-positive weights count as 1.
fn weighted_keys(options: &SearchOptions) -> Vec<WeightedKey> {
    let raw: Vec<f64> = options
        .keys
        .iter()
        .map(|key| {
            if key.weight.is_finite() && key.weight > 0.0 {
                key.weight
            } else {
                1.0
            }
        })
        .collect();
    let total: f64 = raw.iter().sum();

    options
        .keys
        .iter()
        .zip(raw)
        .map(|(key, weight)| WeightedKey {
            path: key.path.clone(),
            weight: weight / total,
        })
        .collect()
}
