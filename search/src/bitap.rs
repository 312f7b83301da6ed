//! Single-chunk Bitap search.

use cardsift_core::SearchOptions;
use std::collections::HashMap;

/// Longest pattern one bitmask can hold.
pub(crate) const MAX_BITS: usize = 32;

/// Bit `len - 1 - i` is set for every position `i` holding the character.
pub(crate) type Alphabet = HashMap<char, u32>;

pub(crate) fn alphabet(pattern: &[char]) -> Alphabet {
    let len = pattern.len();
    let mut mask = Alphabet::new();
    for (i, c) in pattern.iter().enumerate() {
        *mask.entry(*c).or_insert(0) |= 1 << (len - i - 1);
    }
    mask
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BitapMatch {
    pub(crate) is_match: bool,
    pub(crate) score: f64,
    /// Inclusive `(start, end)` character ranges.
    pub(crate) indices: Vec<(usize, usize)>,
}

/// Scores a candidate by error count and drift from the expected location.
struct Scorer {
    pattern_len: usize,
    expected: usize,
    distance: usize,
    ignore_location: bool,
}

impl Scorer {
    fn score(&self, errors: usize, location: usize) -> f64 {
        let accuracy = errors as f64 / self.pattern_len as f64;
        if self.ignore_location {
            return accuracy;
        }

        let proximity = self.expected.abs_diff(location);
        if self.distance == 0 {
            return if proximity > 0 { 1.0 } else { accuracy };
        }

        accuracy + proximity as f64 / self.distance as f64
    }
}

/// Searches `text` for `pattern` (1..=32 chars) expected near `location`.
pub(crate) fn search(
    text: &[char],
    pattern: &[char],
    alphabet: &Alphabet,
    location: usize,
    options: &SearchOptions,
) -> BitapMatch {
    debug_assert!(!pattern.is_empty() && pattern.len() <= MAX_BITS);

    let pattern_len = pattern.len();
    let text_len = text.len();
    let expected = location.min(text_len);
    let scorer = Scorer {
        pattern_len,
        expected,
        distance: options.distance,
        ignore_location: options.ignore_location,
    };

    let mut threshold = options.threshold;
    let compute_matches = options.min_match_char_length > 1 || options.include_matches;
    let mut match_mask = vec![false; if compute_matches { text_len } else { 0 }];

    // Exact occurrences tighten the threshold before the approximate passes.
    let mut from = expected;
    while let Some(index) = find(text, pattern, from) {
        threshold = threshold.min(scorer.score(0, index));
        from = index + pattern_len;
        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    let mut best_location = None;
    let mut final_score = 1.0;
    let mut last_bits: Vec<u32> = Vec::new();
    let mut bin_max = pattern_len + text_len;
    let mask = 1u32 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest drift that could still beat the threshold with this many errors.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            if scorer.score(errors, expected + bin_mid) <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected + bin_mid).min(text_len) + pattern_len
        };

        let mut bits = vec![0u32; finish + 2];
        bits[finish + 1] = (1u32 << errors) - 1;

        let last = |k: usize| last_bits.get(k).copied().unwrap_or(0);

        let mut j = finish;
        while j >= start {
            let current = j - 1;
            let char_match = text
                .get(current)
                .and_then(|c| alphabet.get(c))
                .copied()
                .unwrap_or(0);

            if let Some(slot) = match_mask.get_mut(current) {
                *slot = char_match != 0;
            }

            bits[j] = ((bits[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                bits[j] |= ((last(j + 1) | last(j)) << 1) | 1 | last(j + 1);
            }

            if bits[j] & mask != 0 {
                final_score = scorer.score(errors, current);
                if final_score <= threshold {
                    threshold = final_score;
                    best_location = Some(current);
                    if current <= expected {
                        break;
                    }
                    start = (2 * expected).saturating_sub(current).max(1);
                }
            }

            j -= 1;
        }

        // One more error cannot beat what we already have.
        if scorer.score(errors + 1, expected) > threshold {
            break;
        }
        last_bits = bits;
    }

    let mut result = BitapMatch {
        is_match: best_location.is_some(),
        score: f64::max(0.001, final_score),
        indices: Vec::new(),
    };

    if compute_matches {
        let indices = mask_to_indices(&match_mask, options.min_match_char_length);
        if indices.is_empty() {
            result.is_match = false;
        } else if options.include_matches {
            result.indices = indices;
        }
    }

    result
}

/// First exact occurrence of `pattern` in `text` at or after `from`.
fn find(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.len() > text.len() {
        return None;
    }
    (from..=text.len() - pattern.len()).find(|&i| text[i..i + pattern.len()] == *pattern)
}

/// Collapses a match mask into inclusive ranges at least `min_len` long.
pub(crate) fn mask_to_indices(mask: &[bool], min_len: usize) -> Vec<(usize, usize)> {
    let mut indices = Vec::new();
    let mut start = None;

    for (i, &matched) in mask.iter().enumerate() {
        match (matched, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= min_len {
                    indices.push((s, i - 1));
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if mask.len() - s >= min_len {
            indices.push((s, mask.len() - 1));
        }
    }

    indices
}
