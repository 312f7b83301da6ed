//! Cardsift fuzzy search library.
//!
//! Provides the approximate matcher behind `cardsift_core::IndexFactory`.
//!
//! # Design
//!
//! - Matching is Bitap with errors: a pattern of up to 32 characters is a
//!   bitmask, and each allowed error adds one more pass over the text.
//!   Longer patterns are split into 32-character chunks.
//! - A field's score is `errors / pattern_len + drift / distance`, where
//!   drift is how far the match starts from the expected location.
//! - Characters of the text that occur in the pattern form a match mask;
//!   runs shorter than `min_match_char_length` are dropped, and a field with
//!   no remaining run does not match.
//! - An item's score multiplies its matched field scores, each raised to
//!   the key weight times the field-length norm. Lower is better.
//!
//! # API
//!
//! - `FuzzyIndex::build()`: Indexes items once, by key path
//! - `FuzzyIndex::search()`: Ranked hits with per-field detail
//! - `FuzzyIndexFactory`: Plugs the index into the card filter

mod bitap;
mod factory;
mod index;
mod norm;
mod pattern;
mod results;

pub use factory::FuzzyIndexFactory;
pub use index::FuzzyIndex;
pub use results::{FieldMatch, SearchHit};
