//! Full-pipeline comparison and the match decision policy.
//!
//! `compare` runs normalization, tokenization, and alignment for a pair of
//! address strings and maps the aligned distance to a similarity in [0, 1].
//! `matches` applies the threshold the verification workflow uses.

use crate::align::align;
use crate::models::{MatchParams, MatchReport, Token};
use crate::normalize::normalize;
use crate::phonetic::{DoubleMetaphoneEncoder, PhoneticEncoder};
use crate::token::tokenize;

/// Threshold the surrounding verification workflow applies by default.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Similarity of two already-tokenized sequences.
///
/// `1 - (distance / maxLen)^2`; the square keeps strong matches close to 1
/// while penalizing growing dissimilarity super-linearly. Two empty
/// sequences are trivially identical.
pub fn similarity(a: &[Token], b: &[Token]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    let distance = align(a, b);
    1.0 - (distance / max_len as f64).powi(2)
}

/// Compare two addresses, returning a similarity value between 0 and 1.
pub fn compare(address_a: &str, address_b: &str) -> f64 {
    compare_with(address_a, address_b, &DoubleMetaphoneEncoder)
}

/// Compare two addresses using a caller-supplied phonetic encoder.
pub fn compare_with(address_a: &str, address_b: &str, encoder: &dyn PhoneticEncoder) -> f64 {
    let tokens_a = tokenize(&normalize(address_a), encoder);
    let tokens_b = tokenize(&normalize(address_b), encoder);
    similarity(&tokens_a, &tokens_b)
}

/// Decide whether two addresses are the same place at the given threshold.
pub fn matches(address_a: &str, address_b: &str, threshold: f64) -> bool {
    compare(address_a, address_b) >= threshold
}

/// Compare a pair and package the outcome for output.
pub fn report(address_a: &str, address_b: &str, params: &MatchParams) -> MatchReport {
    let similarity = compare(address_a, address_b);
    MatchReport {
        id: None,
        address_a: address_a.to_string(),
        address_b: address_b.to_string(),
        similarity,
        threshold: params.threshold,
        matched: similarity >= params.threshold,
    }
}

/// Join broken-down address fields into a single comparison string.
///
/// Registries hand back name, street, postcode, and city as separate
/// fields, and callers supply street, postcode, city, and an optional
/// state; absent and empty fields are skipped.
pub fn compose_address(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .filter_map(|f| *f)
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
