//! Field-length normalization.

/// `1 / token_count^(weight / 2)`, rounded to three decimals.
///
/// Tokens are runs of non-space characters, so longer fields dampen the
/// contribution of a match inside them.
pub(crate) fn field_norm(value: &str, weight: f64) -> f64 {
    let tokens = value.split(' ').filter(|t| !t.is_empty()).count().max(1);
    let norm = 1.0 / (tokens as f64).powf(0.5 * weight);
    (norm * 1000.0).round() / 1000.0
}
