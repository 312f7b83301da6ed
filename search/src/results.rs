//! Search results types.

/// One matched item.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Position of the item in the indexed collection.
    pub index: usize,
    /// Combined score; 0.0 is a perfect match, lower is better.
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

/// A key whose field matched the query.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    pub key: String,
    pub score: f64,
    /// Inclusive character ranges; filled only when `include_matches` is set.
    pub indices: Vec<(usize, usize)>,
}
