//! Addrmatch Fuzzy Address Matching Library
//!
//! Decides whether two free-text business addresses describe the same place
//! with enough confidence to treat an identity check as verified. One side
//! typically comes from a government registry with inconsistent formatting,
//! the other from a user. Comparison is script-aware (transliteration to
//! ASCII), phonetic (word tokens compare by Double Metaphone codes), and
//! order-tolerant (adjacent token swaps are free).
//!
//! # Example
//!
//! ```
//! use addrmatch::prelude::*;
//!
//! let similarity = compare(
//!     "Santander-Platz 1 Mönchengladbach 41061",
//!     "Santander Platz 1 Monchengladbach 41061",
//! );
//! assert!(similarity > 0.9);
//!
//! assert!(matches("10 Main Street Leicester", "10 Main St. Leicester", 0.7));
//! ```
//!
//! # Custom encoder
//!
//! ```
//! use addrmatch::phonetic::PhoneticEncoder;
//! use addrmatch::compare::compare_with;
//!
//! /// Encoder that never produces codes; words compare by spelling alone.
//! struct NoPhonetics;
//!
//! impl PhoneticEncoder for NoPhonetics {
//!     fn encode(&self, _word: &str) -> Vec<String> {
//!         Vec::new()
//!     }
//! }
//!
//! let similarity = compare_with("Main Street 1", "Main Street 1", &NoPhonetics);
//! assert_eq!(similarity, 1.0);
//! ```

pub mod align;
pub mod batch;
pub mod compare;
pub mod distance;
pub mod models;
pub mod normalize;
pub mod output;
pub mod phonetic;
pub mod token;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::align;
    pub use crate::batch::{load_pairs, screen_file, screen_pairs, BatchError};
    pub use crate::compare::{
        compare, compare_with, compose_address, matches, report, similarity, DEFAULT_THRESHOLD,
    };
    pub use crate::distance::{string_distance, token_distance};
    pub use crate::models::{AddressPair, MatchParams, MatchReport, Token};
    pub use crate::normalize::{normalize, transliterate};
    pub use crate::output::{
        format_report, print_reports, print_summary, write_csv, write_csv_file, write_json,
        write_json_file, OutputError,
    };
    pub use crate::phonetic::{DoubleMetaphoneEncoder, PhoneticEncoder};
    pub use crate::token::tokenize;
}

// Re-export the common entry points at the crate root
pub use compare::{compare, matches, DEFAULT_THRESHOLD};
pub use models::{MatchParams, MatchReport, Token};
