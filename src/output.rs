//! Output formatting for match reports (JSON, CSV, console).

use crate::models::MatchReport;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write reports as JSON.
pub fn write_json<W: Write>(reports: &[MatchReport], writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(reports)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write reports as JSON to a file.
pub fn write_json_file(reports: &[MatchReport], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(reports, &mut file)
}

/// Write reports as CSV.
pub fn write_csv<W: Write>(reports: &[MatchReport], writer: &mut W) -> Result<(), OutputError> {
    writeln!(writer, "id,address_a,address_b,similarity,threshold,matched")?;

    for report in reports {
        writeln!(
            writer,
            "{},{:?},{:?},{:.6},{:.2},{}",
            report.id.as_deref().unwrap_or(""),
            report.address_a,
            report.address_b,
            report.similarity,
            report.threshold,
            report.matched
        )?;
    }

    Ok(())
}

/// Write reports as CSV to a file.
pub fn write_csv_file(reports: &[MatchReport], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(reports, &mut file)
}

/// Format a report as a human-readable line.
pub fn format_report(report: &MatchReport) -> String {
    format!(
        "{} {:.4}  {:?} ↔ {:?}",
        if report.matched { "MATCH   " } else { "NO MATCH" },
        report.similarity,
        report.address_a,
        report.address_b,
    )
}

/// Print reports in a human-readable format.
pub fn print_reports(reports: &[MatchReport], limit: Option<usize>) {
    let to_print = match limit {
        Some(n) => &reports[..n.min(reports.len())],
        None => reports,
    };

    for report in to_print {
        println!("{}", format_report(report));
    }

    if let Some(n) = limit {
        if reports.len() > n {
            println!("... and {} more pairs", reports.len() - n);
        }
    }
}

/// Print a summary of a screening run to stdout.
pub fn print_summary(reports: &[MatchReport]) {
    let matched = reports.iter().filter(|r| r.matched).count();
    let (match_rate, mean_similarity) = if reports.is_empty() {
        (0.0, 0.0)
    } else {
        (
            100.0 * matched as f64 / reports.len() as f64,
            reports.iter().map(|r| r.similarity).sum::<f64>() / reports.len() as f64,
        )
    };

    println!("\n=== Screening Summary ===");
    println!("Pairs compared: {}", reports.len());
    println!("Matched: {} ({:.1}%)", matched, match_rate);
    println!("Mean similarity: {:.3}", mean_similarity);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> MatchReport {
        MatchReport {
            id: Some("p1".to_string()),
            address_a: "10 Main Street".to_string(),
            address_b: "10 Main St".to_string(),
            similarity: 0.984375,
            threshold: 0.7,
            matched: true,
        }
    }

    #[test]
    fn test_csv_shape() {
        let mut buf = Vec::new();
        write_csv(&[sample_report()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,address_a,address_b,similarity,threshold,matched"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("p1,"));
        assert!(row.ends_with(",true"));
        assert!(row.contains("\"10 Main Street\""));
    }

    #[test]
    fn test_json_round_trip() {
        let mut buf = Vec::new();
        write_json(&[sample_report()], &mut buf).unwrap();
        let parsed: Vec<MatchReport> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].id.as_deref(), Some("p1"));
        assert!(parsed[0].matched);
    }

    #[test]
    fn test_format_report() {
        let line = format_report(&sample_report());
        assert!(line.contains("MATCH"));
        assert!(line.contains("0.9844"));
    }
}
