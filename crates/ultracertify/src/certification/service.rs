use super::domain::{BuildingType, CertificationError, Standard};
use super::draft::ProjectDraft;
use super::evidence::{EvidenceLedger, EvidencePolicy};
use super::project::{ProjectProfile, ProjectProfileError};
use super::report::views::{CriterionView, ProgramView};
use super::report::{CertificationReport, ReportInput};
use super::scoring::{score_program, Scorecard, ScoringEngine};
use super::selection::SelectionState;
use crate::config::CertificationConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scoring request as sent by a client. Program names stay raw until parsed here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    pub standard: String,
    pub building_type: String,
    #[serde(default)]
    pub selections: SelectionState,
    #[serde(default)]
    pub evidence: EvidenceLedger,
}

impl ScoreRequest {
    pub fn from_draft(draft: &ProjectDraft, evidence: EvidenceLedger) -> Self {
        Self {
            standard: draft.standard.code().to_string(),
            building_type: draft.building_type.label().to_string(),
            selections: draft.selections.clone(),
            evidence,
        }
    }

    pub fn program(&self) -> Result<(Standard, BuildingType), CertificationError> {
        Ok((self.standard.parse()?, self.building_type.parse()?))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub scoring: ScoreRequest,
    #[serde(default)]
    pub project: Option<ProjectProfile>,
    #[serde(default)]
    pub generated_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub scorecard: Scorecard,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub withheld_for_evidence: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CertificationServiceError {
    #[error(transparent)]
    Certification(#[from] CertificationError),
    #[error(transparent)]
    Project(#[from] ProjectProfileError),
}

/// Boundary service composing the scoring engine, the evidence policy, and the report builder.
#[derive(Debug, Clone)]
pub struct CertificationService {
    engine: ScoringEngine,
    policy: EvidencePolicy,
    issuer: String,
}

impl CertificationService {
    pub fn new(engine: ScoringEngine, config: &CertificationConfig) -> Self {
        Self {
            engine,
            policy: EvidencePolicy::new(config.require_evidence),
            issuer: config.report_issuer.clone(),
        }
    }

    pub fn from_config(config: &CertificationConfig) -> Self {
        Self::new(ScoringEngine::default(), config)
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn policy(&self) -> EvidencePolicy {
        self.policy
    }

    pub fn programs(&self) -> Vec<ProgramView> {
        self.engine
            .catalog()
            .programs()
            .into_iter()
            .map(ProgramView::from)
            .collect()
    }

    pub fn criteria(
        &self,
        standard: Standard,
        building_type: BuildingType,
    ) -> Result<Vec<CriterionView>, CertificationError> {
        let criteria = self.engine.catalog().criteria(standard, building_type)?;
        Ok(criteria.iter().map(CriterionView::from).collect())
    }

    /// Score after the evidence gate.
    pub fn score(&self, request: &ScoreRequest) -> Result<ScoreResponse, CertificationError> {
        let (standard, building_type) = request.program()?;
        let program = self.engine.catalog().program(standard, building_type)?;
        let gated = self
            .policy
            .apply(program, &request.selections, &request.evidence);
        let scorecard = score_program(program, &gated.selections);

        debug!(
            %standard,
            %building_type,
            total_score = scorecard.total_score,
            tier = scorecard.tier.label(),
            "selection snapshot scored"
        );

        Ok(ScoreResponse {
            scorecard,
            withheld_for_evidence: gated.withheld,
        })
    }

    pub fn report(
        &self,
        request: &ReportRequest,
        today: NaiveDate,
    ) -> Result<CertificationReport, CertificationServiceError> {
        if let Some(project) = &request.project {
            project.validate()?;
        }

        let scoring = &request.scoring;
        let (standard, building_type) = scoring.program()?;
        let program = self.engine.catalog().program(standard, building_type)?;
        let gated = self
            .policy
            .apply(program, &scoring.selections, &scoring.evidence);
        let scorecard = score_program(program, &gated.selections);

        let report = CertificationReport::build(ReportInput {
            program,
            scorecard: &scorecard,
            selections: &gated.selections,
            evidence: &scoring.evidence,
            project: request.project.as_ref(),
            issuer: &self.issuer,
            generated_on: request.generated_on.unwrap_or(today),
        });

        Ok(report.with_withheld(gated.withheld))
    }
}

impl Default for CertificationService {
    fn default() -> Self {
        Self::from_config(&CertificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certification::evidence::EvidenceDescriptor;

    fn request(standard: &str, building_type: &str) -> ScoreRequest {
        ScoreRequest {
            standard: standard.to_string(),
            building_type: building_type.to_string(),
            ..ScoreRequest::default()
        }
    }

    #[test]
    fn unknown_program_names_are_rejected_before_scoring() {
        let service = CertificationService::default();
        assert_eq!(
            service.score(&request("LEED", "New")).err(),
            Some(CertificationError::UnknownStandard("LEED".to_string()))
        );
        assert_eq!(
            service.score(&request("NEST", "Retrofit")).err(),
            Some(CertificationError::UnknownBuildingType(
                "Retrofit".to_string()
            ))
        );
    }

    #[test]
    fn evidence_policy_only_applies_when_configured() {
        let mut scoring = request("nest-plus", "new");
        scoring.selections.set_achieved("np-basic-amenities", true);

        let relaxed = CertificationService::default();
        assert_eq!(relaxed.score(&scoring).expect("scores").scorecard.total_score, 2);

        let strict = CertificationService::from_config(&CertificationConfig {
            require_evidence: true,
            ..CertificationConfig::default()
        });
        let response = strict.score(&scoring).expect("scores");
        assert_eq!(response.scorecard.total_score, 0);
        assert_eq!(response.withheld_for_evidence, vec!["np-basic-amenities"]);

        scoring
            .evidence
            .attach("np-basic-amenities", EvidenceDescriptor::new("map.png"));
        assert_eq!(strict.score(&scoring).expect("scores").scorecard.total_score, 2);
    }

    #[test]
    fn malformed_selection_values_do_not_reject_the_request() {
        let scoring: ScoreRequest = serde_json::from_value(serde_json::json!({
            "standard": "NEST_PLUS",
            "building_type": "New",
            "selections": {
                "np-basic-amenities": true,
                "np-renewable-energy": 3,
                "np-exhaust-system": null
            }
        }))
        .expect("request parses");

        let response = CertificationService::default()
            .score(&scoring)
            .expect("scores");
        assert_eq!(response.scorecard.total_score, 2);
        assert_eq!(response.scorecard.awarded_points("np-renewable-energy"), Some(0));
        assert_eq!(response.scorecard.awarded_points("np-exhaust-system"), Some(0));
    }

    #[test]
    fn lists_every_program_in_display_order() {
        let programs = CertificationService::default().programs();
        let keys: Vec<_> = programs
            .iter()
            .map(|program| (program.standard, program.building_type, program.max_score))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Standard::NestPlus, BuildingType::New, 85),
                (Standard::NestPlus, BuildingType::Existing, 75),
                (Standard::Nest, BuildingType::New, 50),
                (Standard::Nest, BuildingType::Existing, 45),
            ]
        );
    }

    #[test]
    fn report_uses_the_configured_issuer_and_request_date() {
        let service = CertificationService::from_config(&CertificationConfig {
            report_issuer: "Green Audit Co".to_string(),
            ..CertificationConfig::default()
        });
        let mut scoring = request("NEST", "Existing");
        scoring.selections.set_achieved("n-white-finish-roof", true);
        let report_request = ReportRequest {
            scoring,
            project: None,
            generated_on: NaiveDate::from_ymd_opt(2025, 6, 1),
        };

        let today = NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid date");
        let report = service.report(&report_request, today).expect("report builds");
        assert_eq!(report.header.issuer, "Green Audit Co");
        assert_eq!(report.header.generated_on, NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"));
        assert_eq!(report.sections.len(), 1);
    }
}
