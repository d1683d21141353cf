//! Phonetic encoder boundary.
//!
//! Word tokens compare by sound rather than spelling, so differently-spelled
//! street and city names that are pronounced alike still align cheaply. The
//! engine only requires an ordered, possibly-empty list of code candidates;
//! the default implementation produces the Double Metaphone primary and
//! alternate codes.

use rphonetic::DoubleMetaphone;

/// Source of phonetic code candidates for a word.
///
/// Implementations must tolerate any ASCII-alphabetic input. A failure to
/// encode is expressed as an empty list, never an error; the caller then
/// falls back to literal-text comparison for that token.
pub trait PhoneticEncoder: Sync {
    fn encode(&self, word: &str) -> Vec<String>;
}

/// Double Metaphone encoder returning the primary code followed by the
/// alternate when it differs. Empty codes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleMetaphoneEncoder;

impl PhoneticEncoder for DoubleMetaphoneEncoder {
    fn encode(&self, word: &str) -> Vec<String> {
        // The encoder runs on untrusted registry text; a panic inside it
        // downgrades to "no code available" for this token.
        let encoded = std::panic::catch_unwind(|| {
            let metaphone = DoubleMetaphone::default();
            (
                metaphone.double_metaphone(word).primary().to_string(),
                metaphone.double_metaphone(word).alternate().to_string(),
            )
        });

        let (primary, alternate) = match encoded {
            Ok(pair) => pair,
            Err(_) => {
                log::warn!("double metaphone panicked on {:?}", word);
                return Vec::new();
            }
        };

        let mut codes = Vec::with_capacity(2);
        let keep_alternate = !alternate.is_empty() && alternate != primary;
        if !primary.is_empty() {
            codes.push(primary);
        }
        if keep_alternate {
            codes.push(alternate);
        }
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_produced() {
        let encoder = DoubleMetaphoneEncoder;
        assert!(!encoder.encode("Street").is_empty());
        assert!(!encoder.encode("Leicester").is_empty());
    }

    #[test]
    fn test_equal_sounding_words_share_codes() {
        let encoder = DoubleMetaphoneEncoder;
        assert_eq!(encoder.encode("Smith"), encoder.encode("Smyth"));
    }

    #[test]
    fn test_codes_are_deduplicated() {
        let encoder = DoubleMetaphoneEncoder;
        for word in ["Main", "Platz", "Narborough"] {
            let codes = encoder.encode(word);
            assert!(codes.len() <= 2, "at most primary and alternate");
            if codes.len() == 2 {
                assert_ne!(codes[0], codes[1]);
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        let encoder = DoubleMetaphoneEncoder;
        assert_eq!(encoder.encode("LEICESTER"), encoder.encode("leicester"));
    }
}
