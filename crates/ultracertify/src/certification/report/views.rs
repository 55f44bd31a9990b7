use super::super::catalog::{CertificationProgram, ResolvedCriterion};
use super::super::domain::{
    BuildingType, CertificationTier, CriterionKind, CriterionOption, SelectionMode, Standard,
    TierLevel,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierView {
    pub level: TierLevel,
    pub label: &'static str,
    pub min_score: u32,
    pub color: &'static str,
}

impl From<&CertificationTier> for TierView {
    fn from(tier: &CertificationTier) -> Self {
        Self {
            level: tier.level,
            label: tier.label(),
            min_score: tier.min_score,
            color: tier.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramView {
    pub standard: Standard,
    pub standard_label: &'static str,
    pub building_type: BuildingType,
    pub criteria_count: usize,
    pub max_score: u32,
    pub tiers: Vec<TierView>,
}

impl From<&CertificationProgram> for ProgramView {
    fn from(program: &CertificationProgram) -> Self {
        Self {
            standard: program.standard(),
            standard_label: program.standard().label(),
            building_type: program.building_type(),
            criteria_count: program.criteria().len(),
            max_score: program.max_score(),
            tiers: program.tiers().iter().map(TierView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionView {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: CriterionKind,
    pub kind_label: &'static str,
    pub requirements: &'static str,
    pub documents: &'static str,
    pub max_points: u32,
    pub binary: bool,
    pub selection_mode: SelectionMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CriterionOption>,
}

impl From<&ResolvedCriterion> for CriterionView {
    fn from(criterion: &ResolvedCriterion) -> Self {
        Self {
            id: criterion.id,
            name: criterion.name,
            kind: criterion.kind,
            kind_label: criterion.kind.label(),
            requirements: criterion.requirements,
            documents: criterion.documents,
            max_points: criterion.max_points,
            binary: criterion.is_binary(),
            selection_mode: criterion.selection_mode,
            options: criterion.options.clone().unwrap_or_default(),
        }
    }
}

/// How far a criterion got, as printed on its report page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CriterionStatus {
    Selected { labels: Vec<&'static str> },
    Achieved,
    EvidenceProvided,
    NotAttempted,
}

impl CriterionStatus {
    pub fn summary(&self) -> String {
        match self {
            CriterionStatus::Selected { labels } => format!("Selected: {}", labels.join(", ")),
            CriterionStatus::Achieved => "Achieved".to_string(),
            CriterionStatus::EvidenceProvided => "Evidence Provided".to_string(),
            CriterionStatus::NotAttempted => "Not Attempted".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceView {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub criterion_id: &'static str,
    pub name: &'static str,
    pub kind: CriterionKind,
    pub kind_label: &'static str,
    pub requirements: &'static str,
    pub documents: &'static str,
    /// Credits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<u32>,
    pub status: CriterionStatus,
    pub status_label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<EvidenceView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailEntry {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportHeader {
    pub issuer: String,
    pub title: String,
    pub standard: Standard,
    pub building_type: BuildingType,
    pub generated_on: NaiveDate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_details: Vec<ProjectDetailEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextTierView {
    pub label: &'static str,
    pub min_score: u32,
    pub points_needed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_score: u32,
    pub max_score: u32,
    pub tier: TierView,
    pub progress_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<NextTierView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub withheld_for_evidence: Vec<String>,
}
