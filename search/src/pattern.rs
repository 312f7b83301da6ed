//! A query prepared for repeated Bitap searches.

use crate::bitap::{self, Alphabet, MAX_BITS};
use cardsift_core::SearchOptions;

struct Chunk {
    chars: Vec<char>,
    alphabet: Alphabet,
    /// Offset of this chunk within the full pattern.
    start: usize,
}

/// Outcome of searching one field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldOutcome {
    pub(crate) is_match: bool,
    pub(crate) score: f64,
    pub(crate) indices: Vec<(usize, usize)>,
}

pub(crate) struct Pattern {
    chars: Vec<char>,
    chunks: Vec<Chunk>,
}

impl Pattern {
    pub(crate) fn new(query: &str, options: &SearchOptions) -> Self {
        let chars: Vec<char> = if options.is_case_sensitive {
            query.chars().collect()
        } else {
            query.to_lowercase().chars().collect()
        };

        let mut chunks = Vec::new();
        let mut add_chunk = |start: usize, end: usize| {
            let slice = chars[start..end].to_vec();
            chunks.push(Chunk {
                alphabet: bitap::alphabet(&slice),
                chars: slice,
                start,
            });
        };

        let len = chars.len();
        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            for start in (0..end).step_by(MAX_BITS) {
                add_chunk(start, start + MAX_BITS);
            }
            if remainder > 0 {
                // Last chunk overlaps the previous one to stay full width.
                add_chunk(len - MAX_BITS, len);
            }
        } else if len > 0 {
            add_chunk(0, len);
        }

        Self { chars, chunks }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Searches a field already normalized the same way as the pattern.
    pub(crate) fn search_in(&self, text: &[char], options: &SearchOptions) -> FieldOutcome {
        if self.is_empty() {
            return FieldOutcome {
                is_match: false,
                score: 1.0,
                indices: Vec::new(),
            };
        }

        if self.chars == text {
            return FieldOutcome {
                is_match: true,
                score: 0.0,
                indices: if options.include_matches {
                    vec![(0, text.len() - 1)]
                } else {
                    Vec::new()
                },
            };
        }

        let mut has_matches = false;
        let mut total_score = 0.0;
        let mut indices = Vec::new();

        for chunk in &self.chunks {
            let outcome = bitap::search(
                text,
                &chunk.chars,
                &chunk.alphabet,
                options.location + chunk.start,
                options,
            );

            has_matches |= outcome.is_match;
            total_score += outcome.score;
            if outcome.is_match && options.include_matches {
                indices.extend(outcome.indices);
            }
        }

        FieldOutcome {
            is_match: has_matches,
            score: if has_matches {
                total_score / self.chunks.len() as f64
            } else {
                1.0
            },
            indices,
        }
    }
}
