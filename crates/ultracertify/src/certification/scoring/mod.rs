mod rules;
mod tiers;

pub use tiers::TierGap;

use super::catalog::{CertificationProgram, CriteriaCatalog};
use super::domain::{
    BuildingType, CertificationError, CertificationTier, CriterionKind, Standard,
};
use super::selection::SelectionState;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Stateless scorer over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<CriteriaCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<CriteriaCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CriteriaCatalog {
        &self.catalog
    }

    /// Recompute the scorecard for one selection snapshot.
    ///
    /// Fails only when the catalog has no program for the standard and building type.
    pub fn score(
        &self,
        standard: Standard,
        building_type: BuildingType,
        selections: &SelectionState,
    ) -> Result<Scorecard, CertificationError> {
        let program = self.catalog.program(standard, building_type)?;
        Ok(score_program(program, selections))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(CriteriaCatalog::shared())
    }
}

pub(crate) fn score_program(
    program: &CertificationProgram,
    selections: &SelectionState,
) -> Scorecard {
    let awards: Vec<CriterionAward> = program
        .criteria()
        .iter()
        .map(|criterion| CriterionAward {
            criterion_id: criterion.id,
            kind: criterion.kind,
            awarded: rules::award_points(criterion, selections.get(criterion.id)),
            max_points: criterion.max_points,
        })
        .collect();

    let total_score = awards
        .iter()
        .filter(|award| award.kind == CriterionKind::Credit)
        .fold(0_u32, |total, award| total.saturating_add(award.awarded));
    let max_score = program.max_score();
    let progress_ratio = if max_score > 0 {
        (f64::from(total_score) / f64::from(max_score)).min(1.0)
    } else {
        0.0
    };

    let orphaned_selections: Vec<String> = selections
        .iter()
        .filter(|(id, _)| !program.contains(id))
        .map(|(id, _)| id.to_string())
        .collect();
    if !orphaned_selections.is_empty() {
        debug!(
            standard = %program.standard(),
            building_type = %program.building_type(),
            orphaned = orphaned_selections.len(),
            "ignoring selections for criteria outside the program"
        );
    }

    let tier = tiers::current_tier(program.tiers(), total_score);
    let next_tier = tiers::next_tier(program.tiers(), total_score);

    Scorecard {
        standard: program.standard(),
        building_type: program.building_type(),
        awards,
        total_score,
        max_score,
        progress_ratio,
        tier,
        next_tier,
        orphaned_selections,
    }
}

/// Points earned by one in-scope criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionAward {
    pub criterion_id: &'static str,
    pub kind: CriterionKind,
    pub awarded: u32,
    pub max_points: u32,
}

/// Derived view of a selection snapshot. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub standard: Standard,
    pub building_type: BuildingType,
    pub awards: Vec<CriterionAward>,
    pub total_score: u32,
    pub max_score: u32,
    pub progress_ratio: f64,
    pub tier: CertificationTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_tier: Option<TierGap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphaned_selections: Vec<String>,
}

impl Scorecard {
    pub fn awarded_points(&self, criterion_id: &str) -> Option<u32> {
        self.award(criterion_id).map(|award| award.awarded)
    }

    pub fn award(&self, criterion_id: &str) -> Option<&CriterionAward> {
        self.awards
            .iter()
            .find(|award| award.criterion_id == criterion_id)
    }

    pub fn progress_pct(&self) -> f64 {
        self.progress_ratio * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certification::domain::TierLevel;

    fn engine() -> ScoringEngine {
        ScoringEngine::default()
    }

    #[test]
    fn empty_selection_scores_zero_and_is_uncertified() {
        let scorecard = engine()
            .score(Standard::NestPlus, BuildingType::New, &SelectionState::new())
            .expect("program exists");

        assert_eq!(scorecard.total_score, 0);
        assert_eq!(scorecard.max_score, 85);
        assert_eq!(scorecard.progress_ratio, 0.0);
        assert_eq!(scorecard.tier.level, TierLevel::Uncertified);
        let gap = scorecard.next_tier.expect("certified is next");
        assert_eq!(gap.tier.level, TierLevel::Certified);
        assert_eq!(gap.points_needed, 40);
    }

    #[test]
    fn mandatory_awards_are_listed_with_zero_points() {
        let mut selections = SelectionState::new();
        selections.set_achieved("np-waste-segregation", true);

        let scorecard = engine()
            .score(Standard::NestPlus, BuildingType::New, &selections)
            .expect("program exists");

        assert_eq!(scorecard.awarded_points("np-waste-segregation"), Some(0));
        assert_eq!(scorecard.total_score, 0);
    }

    #[test]
    fn orphaned_selections_are_reported_not_scored() {
        let mut selections = SelectionState::new();
        selections.set_achieved("np-top-soil-preservation", true);
        selections.set_achieved("np-basic-amenities", true);

        let scorecard = engine()
            .score(Standard::NestPlus, BuildingType::Existing, &selections)
            .expect("program exists");

        assert_eq!(scorecard.total_score, 2);
        assert_eq!(
            scorecard.orphaned_selections,
            vec!["np-top-soil-preservation".to_string()]
        );
        assert_eq!(scorecard.awarded_points("np-top-soil-preservation"), None);
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut selections = SelectionState::new();
        selections.select_option("np-renewable-energy", "2.5 kW");
        selections.toggle_option("np-water-saving-fixtures", "Dual flush cistern", true);

        let engine = engine();
        let first = engine
            .score(Standard::NestPlus, BuildingType::New, &selections)
            .expect("program exists");
        let second = engine
            .score(Standard::NestPlus, BuildingType::New, &selections)
            .expect("program exists");

        assert_eq!(first, second);
        assert_eq!(first.progress_ratio.to_bits(), second.progress_ratio.to_bits());
    }
}
