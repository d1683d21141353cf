//! Tokenization of normalized address text.

use crate::models::Token;
use crate::phonetic::PhoneticEncoder;

/// Split normalized text on whitespace and classify each fragment.
///
/// Pure ASCII-alphabetic fragments become word tokens carrying the codes
/// the encoder returns for them; everything else (digits, mixed fragments)
/// becomes a literal. Token order is preserved; it feeds the aligner.
pub fn tokenize(normalized: &str, encoder: &dyn PhoneticEncoder) -> Vec<Token> {
    normalized
        .split_whitespace()
        .map(|fragment| {
            if is_word(fragment) {
                Token::Word {
                    text: fragment.to_string(),
                    codes: encoder.encode(fragment),
                }
            } else {
                Token::Literal {
                    text: fragment.to_string(),
                }
            }
        })
        .collect()
}

fn is_word(fragment: &str) -> bool {
    !fragment.is_empty() && fragment.bytes().all(|b| b.is_ascii_alphabetic())
}
