//! NEST and NEST PLUS self-certification: criteria catalog, scoring, and reports.
//!
//! Scoring is a pure function of (standard, building type, selections). Everything else in
//! this module either feeds that function or renders its output.

pub mod catalog;
mod data;
pub mod domain;
pub mod draft;
pub mod evidence;
pub mod project;
pub mod report;
pub mod router;
pub mod scoring;
pub mod selection;
pub mod service;

pub use catalog::{
    resolve_options, resolve_point_ceiling, CatalogIssue, CertificationProgram, CriteriaCatalog,
    ProgramKey, ResolvedCriterion,
};
pub use domain::{
    BuildingSchedule, BuildingType, CertificationError, CertificationTier, CriterionDefinition,
    CriterionKind, CriterionOption, SelectionMode, Standard, StandardDefinition, TierLevel,
};
pub use draft::{DraftError, ProjectDraft};
pub use evidence::{EvidenceDescriptor, EvidenceLedger, EvidencePolicy, GatedSelections};
pub use project::{ProfileIssue, ProjectProfile, ProjectProfileError};
pub use report::{render_text, write_csv, CertificationReport, ReportInput};
pub use router::certification_router;
pub use scoring::{CriterionAward, Scorecard, ScoringEngine, TierGap};
pub use selection::{Selection, SelectionState, NO_SELECTION};
pub use service::{
    CertificationService, CertificationServiceError, ReportRequest, ScoreRequest, ScoreResponse,
};
