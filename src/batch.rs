//! Bulk screening of address pair files.
//!
//! Reads a JSON array of pairs, compares them in parallel, and collects a
//! report per pair. Per-pair semantics are identical to `compare`; pairs
//! are independent, so the fan-out needs no coordination.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::compare;
use crate::models::{AddressPair, MatchParams, MatchReport};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load address pairs from a JSON file.
///
/// The file holds an array of `{id?, address_a, address_b}` records.
pub fn load_pairs(path: &Path) -> Result<Vec<AddressPair>, BatchError> {
    let file = std::fs::File::open(path)?;
    let pairs = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(pairs)
}

/// Compare every pair in parallel and collect the reports in input order.
pub fn screen_pairs(
    pairs: &[AddressPair],
    params: &MatchParams,
    show_progress: bool,
) -> Vec<MatchReport> {
    let progress = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let reports: Vec<MatchReport> = pairs
        .par_iter()
        .map(|pair| {
            let mut report = compare::report(&pair.address_a, &pair.address_b, params);
            report.id = pair.id.clone();

            if let Some(ref pb) = progress {
                pb.inc(1);
            }

            report
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    reports
}

/// Load a pair file and screen it.
pub fn screen_file(
    path: &Path,
    params: &MatchParams,
    show_progress: bool,
) -> Result<Vec<MatchReport>, BatchError> {
    let pairs = load_pairs(path)?;

    if show_progress {
        eprintln!("Screening {} address pairs...", pairs.len());
    }

    Ok(screen_pairs(&pairs, params, show_progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: &str, a: &str, b: &str) -> AddressPair {
        AddressPair {
            id: Some(id.to_string()),
            address_a: a.to_string(),
            address_b: b.to_string(),
        }
    }

    #[test]
    fn test_screen_pairs_preserves_order_and_ids() {
        let pairs = vec![
            pair("p1", "10 Main Street", "10 Main Street"),
            pair("p2", "10 Main Street", "Elsewhere 99"),
        ];
        let params = MatchParams::default();

        let reports = screen_pairs(&pairs, &params, false);

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id.as_deref(), Some("p1"));
        assert_eq!(reports[1].id.as_deref(), Some("p2"));
        assert!(reports[0].matched);
        assert!(!reports[1].matched);
    }

    #[test]
    fn test_empty_input() {
        let params = MatchParams::default();
        assert!(screen_pairs(&[], &params, false).is_empty());
    }

    #[test]
    fn test_pair_deserialization_defaults_id() {
        let json = r#"[{"address_a": "A", "address_b": "B"}]"#;
        let pairs: Vec<AddressPair> = serde_json::from_str(json).unwrap();
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].id.is_none());
    }
}
