use super::super::catalog::{CertificationProgram, ResolvedCriterion};
use super::super::domain::{CriterionKind, SelectionMode};
use super::super::evidence::{EvidenceDescriptor, EvidenceLedger};
use super::super::project::ProjectProfile;
use super::super::scoring::Scorecard;
use super::super::selection::{Selection, SelectionState};
use super::views::{
    CriterionStatus, EvidenceView, NextTierView, ProjectDetailEntry, ReportHeader, ReportSection,
    ReportSummary, TierView,
};
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_ISSUER: &str = "UltraCertify";

/// Everything a report is assembled from. Scores come from `scorecard` only.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub program: &'a CertificationProgram,
    pub scorecard: &'a Scorecard,
    pub selections: &'a SelectionState,
    pub evidence: &'a EvidenceLedger,
    pub project: Option<&'a ProjectProfile>,
    pub issuer: &'a str,
    pub generated_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificationReport {
    pub header: ReportHeader,
    pub summary: ReportSummary,
    pub sections: Vec<ReportSection>,
}

impl CertificationReport {
    pub fn build(input: ReportInput<'_>) -> Self {
        let ReportInput {
            program,
            scorecard,
            selections,
            evidence,
            project,
            issuer,
            generated_on,
        } = input;

        let issuer = if issuer.trim().is_empty() {
            DEFAULT_ISSUER
        } else {
            issuer
        };

        let header = ReportHeader {
            issuer: issuer.to_string(),
            title: report_title(program),
            standard: program.standard(),
            building_type: program.building_type(),
            generated_on,
            project_details: project
                .map(|profile| project_details(profile, program))
                .unwrap_or_default(),
            owner_name: project.map(|profile| profile.owner_name.clone()),
        };

        let summary = ReportSummary {
            total_score: scorecard.total_score,
            max_score: scorecard.max_score,
            tier: TierView::from(&scorecard.tier),
            progress_pct: scorecard.progress_pct(),
            next_tier: scorecard.next_tier.map(|gap| NextTierView {
                label: gap.tier.label(),
                min_score: gap.tier.min_score,
                points_needed: gap.points_needed,
            }),
            withheld_for_evidence: Vec::new(),
        };

        let sections = program
            .criteria()
            .iter()
            .filter_map(|criterion| {
                let selection = selections.get(criterion.id);
                let files = evidence.files(criterion.id);
                let attempted = selection.map(Selection::is_attempted).unwrap_or(false);
                if !attempted && files.is_empty() {
                    return None;
                }
                Some(section(criterion, selection, files, scorecard))
            })
            .collect();

        Self {
            header,
            summary,
            sections,
        }
    }

    /// Records criteria whose achieved flag the evidence policy removed before scoring.
    pub fn with_withheld(mut self, withheld: Vec<String>) -> Self {
        self.summary.withheld_for_evidence = withheld;
        self
    }

    pub fn section(&self, criterion_id: &str) -> Option<&ReportSection> {
        self.sections
            .iter()
            .find(|section| section.criterion_id == criterion_id)
    }
}

fn report_title(program: &CertificationProgram) -> String {
    format!(
        "IGBC's {} - Green Building Certification Summary",
        program.standard().label()
    )
}

fn project_details(
    profile: &ProjectProfile,
    program: &CertificationProgram,
) -> Vec<ProjectDetailEntry> {
    let mut details: Vec<ProjectDetailEntry> = profile
        .details()
        .into_iter()
        .map(|(label, value)| ProjectDetailEntry { label, value })
        .collect();
    let position = details
        .iter()
        .position(|entry| entry.label == "Project Type")
        .unwrap_or(details.len());
    details.insert(
        position,
        ProjectDetailEntry {
            label: "Building Type",
            value: program.building_type().label().to_string(),
        },
    );
    details
}

fn section(
    criterion: &ResolvedCriterion,
    selection: Option<&Selection>,
    files: &[EvidenceDescriptor],
    scorecard: &Scorecard,
) -> ReportSection {
    let status = status_for(criterion, selection, !files.is_empty());
    let (points_awarded, max_points) = match criterion.kind {
        CriterionKind::Credit => (
            Some(scorecard.awarded_points(criterion.id).unwrap_or(0)),
            Some(criterion.max_points),
        ),
        CriterionKind::Mandatory => (None, None),
    };

    ReportSection {
        criterion_id: criterion.id,
        name: criterion.name,
        kind: criterion.kind,
        kind_label: criterion.kind.label(),
        requirements: criterion.requirements,
        documents: criterion.documents,
        points_awarded,
        max_points,
        status_label: status.summary(),
        status,
        evidence: files.iter().map(evidence_view).collect(),
    }
}

fn status_for(
    criterion: &ResolvedCriterion,
    selection: Option<&Selection>,
    has_evidence: bool,
) -> CriterionStatus {
    let chosen = selection
        .map(|selection| chosen_labels(criterion, selection))
        .unwrap_or_default();

    if !chosen.is_empty() {
        CriterionStatus::Selected { labels: chosen }
    } else if selection.map(Selection::is_achieved).unwrap_or(false) {
        CriterionStatus::Achieved
    } else if has_evidence {
        CriterionStatus::EvidenceProvided
    } else {
        CriterionStatus::NotAttempted
    }
}

/// Chosen labels that exist in the resolved options, in option order.
fn chosen_labels(criterion: &ResolvedCriterion, selection: &Selection) -> Vec<&'static str> {
    let options = criterion.options.as_deref().unwrap_or_default();
    match (criterion.selection_mode, selection) {
        (SelectionMode::Multiple, Selection::Options(labels)) => options
            .iter()
            .filter(|option| labels.contains(option.label))
            .map(|option| option.label)
            .collect(),
        (SelectionMode::Single, selection) => selection
            .single_label()
            .and_then(|label| criterion.option(label))
            .map(|option| vec![option.label])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn evidence_view(descriptor: &EvidenceDescriptor) -> EvidenceView {
    EvidenceView {
        file_name: descriptor.file_name.clone(),
        content_type: descriptor.resolved_content_type(),
        description: descriptor.description.clone(),
        location: descriptor.location_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certification::catalog::CriteriaCatalog;
    use crate::certification::domain::{BuildingType, Standard};
    use crate::certification::scoring::ScoringEngine;

    fn build(selections: &SelectionState, evidence: &EvidenceLedger) -> CertificationReport {
        let catalog = CriteriaCatalog::shared();
        let program = catalog
            .program(Standard::NestPlus, BuildingType::New)
            .expect("program exists");
        let scorecard = ScoringEngine::new(catalog.clone())
            .score(Standard::NestPlus, BuildingType::New, selections)
            .expect("scores");

        CertificationReport::build(ReportInput {
            program,
            scorecard: &scorecard,
            selections,
            evidence,
            project: None,
            issuer: "",
            generated_on: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
        })
    }

    #[test]
    fn untouched_criteria_are_skipped() {
        let mut selections = SelectionState::new();
        selections.set_achieved("np-basic-amenities", true);
        selections.set_achieved("np-top-soil-preservation", false);
        selections.select_option("np-renewable-energy", "none");

        let report = build(&selections, &EvidenceLedger::new());

        assert_eq!(report.header.issuer, DEFAULT_ISSUER);
        assert_eq!(
            report.header.title,
            "IGBC's NEST PLUS - Green Building Certification Summary"
        );
        assert_eq!(report.sections.len(), 1);
        let section = report.section("np-basic-amenities").expect("section");
        assert_eq!(section.status, CriterionStatus::Achieved);
        assert_eq!(section.points_awarded, Some(2));
        assert_eq!(section.max_points, Some(2));
    }

    #[test]
    fn statuses_follow_selection_and_evidence() {
        let mut selections = SelectionState::new();
        selections.toggle_option("np-exhaust-system", "Exhaust Fan", true);
        selections.toggle_option("np-exhaust-system", "Opening provision", true);
        selections.select_option("np-renewable-energy", "1.5 kW");

        let mut evidence = EvidenceLedger::new();
        evidence.attach("np-waste-segregation", EvidenceDescriptor::new("bins.jpg"));

        let report = build(&selections, &evidence);

        let exhaust = report.section("np-exhaust-system").expect("exhaust section");
        assert_eq!(
            exhaust.status_label,
            "Selected: Opening provision, Exhaust Fan"
        );
        assert_eq!(
            report
                .section("np-renewable-energy")
                .map(|section| section.status_label.as_str()),
            Some("Selected: 1.5 kW")
        );

        let mandatory = report
            .section("np-waste-segregation")
            .expect("evidence-only section");
        assert_eq!(mandatory.status, CriterionStatus::EvidenceProvided);
        assert_eq!(mandatory.points_awarded, None);
        assert_eq!(mandatory.evidence[0].content_type, "image/jpeg");
    }

    #[test]
    fn stale_single_labels_are_listed_as_not_attempted() {
        let mut selections = SelectionState::new();
        selections.select_option("np-renewable-energy", "3.5 kW");

        let report = build(&selections, &EvidenceLedger::new());

        let section = report
            .section("np-renewable-energy")
            .expect("stale answer still gets a section");
        assert_eq!(section.status, CriterionStatus::NotAttempted);
        assert_eq!(section.points_awarded, Some(0));
    }

    #[test]
    fn summary_mirrors_the_scorecard() {
        let mut selections = SelectionState::new();
        selections.select_option("np-renewable-energy", "2.5 kW");

        let report = build(&selections, &EvidenceLedger::new());

        assert_eq!(report.summary.total_score, 5);
        assert_eq!(report.summary.max_score, 85);
        assert_eq!(report.summary.tier.label, "Uncertified");
        let next = report.summary.next_tier.expect("certified is next");
        assert_eq!(next.label, "Certified");
        assert_eq!(next.points_needed, 35);
    }
}
