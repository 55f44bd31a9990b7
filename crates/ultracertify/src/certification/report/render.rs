use super::builder::CertificationReport;
use serde::Serialize;
use std::fmt::Write as _;
use std::io;

/// Plain-text rendering used by the CLI.
pub fn render_text(report: &CertificationReport) -> String {
    let mut out = String::new();
    let header = &report.header;
    let summary = &report.summary;

    let _ = writeln!(out, "{} Report", header.issuer);
    let _ = writeln!(out, "{}", header.title);
    let _ = writeln!(
        out,
        "Building type: {} | Generated on {}",
        header.building_type,
        header.generated_on.format("%Y-%m-%d")
    );

    if !header.project_details.is_empty() {
        let _ = writeln!(out, "\nProject Details");
        for entry in &header.project_details {
            let value = if entry.value.trim().is_empty() {
                "-"
            } else {
                entry.value.as_str()
            };
            let _ = writeln!(out, "- {}: {}", entry.label, value);
        }
    }

    let _ = writeln!(out, "\nCertification Summary");
    let _ = writeln!(
        out,
        "- Total Score Achieved: {} / {} ({:.0}%)",
        summary.total_score, summary.max_score, summary.progress_pct
    );
    let _ = writeln!(
        out,
        "- Certification Level Attained: {}",
        summary.tier.label
    );
    if let Some(next) = &summary.next_tier {
        let _ = writeln!(
            out,
            "- {} more point(s) to reach {} ({})",
            next.points_needed, next.label, next.min_score
        );
    }
    if !summary.withheld_for_evidence.is_empty() {
        let _ = writeln!(
            out,
            "- Not counted without evidence: {}",
            summary.withheld_for_evidence.join(", ")
        );
    }

    for section in &report.sections {
        let _ = writeln!(out, "\n{} ({})", section.name, section.kind_label);
        let _ = writeln!(out, "  Requirements: {}", section.requirements);
        if let (Some(awarded), Some(max)) = (section.points_awarded, section.max_points) {
            let _ = writeln!(out, "  Points Awarded: {} / {}", awarded, max);
        }
        let _ = writeln!(out, "  Status: {}", section.status_label);
        for file in &section.evidence {
            let _ = write!(out, "  Evidence: {} [{}]", file.file_name, file.content_type);
            if let Some(description) = &file.description {
                let _ = write!(out, " {}", description);
            }
            if let Some(location) = &file.location {
                let _ = write!(out, " (Location: {})", location);
            }
            let _ = writeln!(out);
        }
    }

    if let Some(owner) = &header.owner_name {
        let _ = writeln!(
            out,
            "\nReport for {} | Generated by {} on {}",
            owner,
            header.issuer,
            header.generated_on.format("%Y-%m-%d")
        );
    }

    out
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    criterion_id: &'a str,
    name: &'a str,
    kind: &'a str,
    points_awarded: Option<u32>,
    max_points: Option<u32>,
    status: &'a str,
    evidence: usize,
}

/// One CSV row per report section, with a header line.
pub fn write_csv<W: io::Write>(report: &CertificationReport, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for section in &report.sections {
        csv_writer.serialize(CsvRow {
            criterion_id: section.criterion_id,
            name: section.name,
            kind: section.kind_label,
            points_awarded: section.points_awarded,
            max_points: section.max_points,
            status: &section.status_label,
            evidence: section.evidence.len(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
