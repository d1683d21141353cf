//! Data structures for the address matching pipeline.

use serde::{Deserialize, Serialize};

/// One whitespace-delimited unit of a normalized address.
///
/// Word tokens are pure ASCII-alphabetic fragments and carry the phonetic
/// codes produced for them; everything else (house numbers, postcodes,
/// mixed fragments) is an opaque literal.
#[derive(Debug, Clone)]
pub enum Token {
    Word { text: String, codes: Vec<String> },
    Literal { text: String },
}

impl Token {
    /// The surface text of the token as it appeared in the address.
    pub fn text(&self) -> &str {
        match self {
            Token::Word { text, .. } | Token::Literal { text } => text,
        }
    }

    /// Candidate strings this token can match under: the phonetic codes for
    /// word tokens that have any, the surface text otherwise.
    pub fn candidates(&self) -> &[String] {
        match self {
            Token::Word { codes, .. } if !codes.is_empty() => codes,
            Token::Word { text, .. } | Token::Literal { text } => std::slice::from_ref(text),
        }
    }
}

/// Equality ignores phonetic codes; two tokens are equal when their kind
/// and surface text agree. Word tokens with different texts can still
/// align at cost 0 through the substitution arm when their codes coincide.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Word { text: a, .. }, Token::Word { text: b, .. }) => a == b,
            (Token::Literal { text: a }, Token::Literal { text: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Token {}

/// Matching parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchParams {
    /// Minimum similarity for two addresses to count as the same place.
    pub threshold: f64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

/// One address pair to screen, as read from a batch input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressPair {
    /// Caller-chosen identifier carried through to the report.
    #[serde(default)]
    pub id: Option<String>,
    pub address_a: String,
    pub address_b: String,
}

/// Result of comparing one address pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub address_a: String,
    pub address_b: String,
    pub similarity: f64,
    pub threshold: f64,
    pub matched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let params = MatchParams::default();
        assert!((params.threshold - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_token_equality_ignores_codes() {
        let a = Token::Word {
            text: "Street".to_string(),
            codes: vec!["STRT".to_string()],
        };
        let b = Token::Word {
            text: "Street".to_string(),
            codes: vec![],
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_word_never_equals_literal() {
        let word = Token::Word {
            text: "41061".to_string(),
            codes: vec![],
        };
        let literal = Token::Literal {
            text: "41061".to_string(),
        };
        assert_ne!(word, literal);
    }

    #[test]
    fn test_candidates_fall_back_to_text() {
        let word = Token::Word {
            text: "Platz".to_string(),
            codes: vec![],
        };
        assert_eq!(word.candidates(), &["Platz".to_string()]);

        let word = Token::Word {
            text: "Platz".to_string(),
            codes: vec!["PLTS".to_string(), "FLTS".to_string()],
        };
        assert_eq!(word.candidates().len(), 2);

        let literal = Token::Literal {
            text: "41061".to_string(),
        };
        assert_eq!(literal.candidates(), &["41061".to_string()]);
    }
}
