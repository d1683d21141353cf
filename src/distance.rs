//! Normalized dissimilarity between individual tokens.

use crate::models::Token;
use strsim::levenshtein;

/// Distance between two tokens in [0, 1].
///
/// Each side contributes its candidate strings (phonetic codes for word
/// tokens, the literal text otherwise) and the minimum distance across all
/// candidate pairings wins.
pub fn token_distance(a: &Token, b: &Token) -> f64 {
    let mut best = f64::INFINITY;
    for s in a.candidates() {
        for t in b.candidates() {
            let d = string_distance(s, t);
            if d < best {
                if d == 0.0 {
                    return 0.0;
                }
                best = d;
            }
        }
    }
    best
}

/// Character edit distance scaled by the longer operand's length.
/// Two empty strings are identical, distance 0.
pub fn string_distance(s: &str, t: &str) -> f64 {
    let max_len = s.chars().count().max(t.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(s, t) as f64 / max_len as f64
}
