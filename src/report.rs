//! Report rendering for pipeline results
//!
//! Presentation only: consumes [`RecordAnalysis`] values as opaque data and
//! produces text or HTML. The core pipeline never depends on this module.

use crate::pipeline::RecordAnalysis;
use std::fmt::Write;

/// Maximum nucleotides shown in sequence previews
const PREVIEW_NT: usize = 60;
/// Maximum amino acids shown in protein previews
const PREVIEW_AA: usize = 20;

fn preview(seq: &[u8], limit: usize) -> String {
    let shown = String::from_utf8_lossy(&seq[..seq.len().min(limit)]).into_owned();
    if seq.len() > limit {
        format!("{}...", shown)
    } else {
        shown
    }
}

fn format_counts(analysis: &RecordAnalysis) -> String {
    analysis
        .base_counts
        .iter()
        .map(|(&base, &count)| format!("{}={}", base as char, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a plain-text report for console output
pub fn render_text(results: &[RecordAnalysis]) -> String {
    let mut out = String::new();

    for analysis in results {
        if analysis.description.is_empty() {
            let _ = writeln!(out, "Record: {}", analysis.id);
        } else {
            let _ = writeln!(out, "Record: {} ({})", analysis.id, analysis.description);
        }
        let _ = writeln!(out, "  Length: {} bp", analysis.length);
        let _ = writeln!(out, "  GC%: {:.2}%", analysis.gc_percent);
        let _ = writeln!(out, "  Counts: {}", format_counts(analysis));
        let _ = writeln!(out, "  RNA: {}", preview(&analysis.rna, PREVIEW_NT));
        let _ = writeln!(out, "  Protein: {}", preview(&analysis.protein, PREVIEW_AA));
        out.push('\n');
    }

    out
}

/// Render an HTML report
pub fn render_html(results: &[RecordAnalysis]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Sequence Analysis Report</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         .record { border: 1px solid #ccc; padding: 1em; margin-bottom: 1em; }\n\
         .seq { font-family: monospace; word-break: break-all; }\n\
         </style>\n</head>\n<body>\n<h1>Sequence Analysis Report</h1>\n",
    );

    for analysis in results {
        let _ = writeln!(out, "<div class=\"record\">");
        let _ = writeln!(
            out,
            "<h2>{} <small>{}</small></h2>",
            escape(&analysis.id),
            escape(&analysis.description)
        );
        let _ = writeln!(out, "<p>Length: {} bp</p>", analysis.length);
        let _ = writeln!(out, "<p>GC content: {:.2}%</p>", analysis.gc_percent);
        let _ = writeln!(out, "<p>Base counts: {}</p>", escape(&format_counts(analysis)));
        let _ = writeln!(
            out,
            "<p>RNA: <span class=\"seq\">{}</span></p>",
            escape(&preview(&analysis.rna, PREVIEW_NT))
        );
        let _ = writeln!(
            out,
            "<p>Protein: <span class=\"seq\">{}</span></p>",
            escape(&preview(&analysis.protein, PREVIEW_AA))
        );
        let _ = writeln!(out, "</div>");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze_record;
    use crate::types::FastaRecord;

    fn sample() -> Vec<RecordAnalysis> {
        let record = FastaRecord::new(
            "seq1".to_string(),
            "sample gene".to_string(),
            b"ATGGCTTAA".to_vec(),
        );
        vec![analyze_record(&record)]
    }

    #[test]
    fn test_text_report_contains_fields() {
        let text = render_text(&sample());
        assert!(text.contains("seq1"));
        assert!(text.contains("sample gene"));
        assert!(text.contains("Length: 9 bp"));
        assert!(text.contains("RNA: AUGGCUUAA"));
        assert!(text.contains("Protein: MA"));
    }

    #[test]
    fn test_html_report_structure() {
        let html = render_html(&sample());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2>seq1"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_long_sequences_truncated() {
        let record = FastaRecord::new(
            "long".to_string(),
            String::new(),
            b"ACG".repeat(100),
        );
        let text = render_text(&[analyze_record(&record)]);
        assert!(text.contains("..."));
    }

    #[test]
    fn test_html_escapes_description() {
        let record = FastaRecord::new(
            "seq1".to_string(),
            "a <b> & c".to_string(),
            b"ACGT".to_vec(),
        );
        let html = render_html(&[analyze_record(&record)]);
        assert!(html.contains("a &lt;b&gt; &amp; c"));
    }
}
