use super::data::standard_definitions;
use super::domain::{
    BuildingType, CertificationError, CertificationTier, CriterionDefinition, CriterionKind,
    CriterionOption, SelectionMode, Standard, StandardDefinition,
};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Maximum points obtainable for `criterion` under `building_type`. Missing keyed entries count as zero.
pub fn resolve_point_ceiling(criterion: &CriterionDefinition, building_type: BuildingType) -> u32 {
    criterion
        .points
        .resolve(building_type)
        .copied()
        .unwrap_or(0)
}

/// Ordered options achievable under `building_type`, or empty when none apply.
pub fn resolve_options(
    criterion: &CriterionDefinition,
    building_type: BuildingType,
) -> Vec<CriterionOption> {
    criterion
        .options
        .as_ref()
        .and_then(|options| options.resolve(building_type))
        .cloned()
        .unwrap_or_default()
}

/// A criterion normalised for one building type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCriterion {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: CriterionKind,
    pub requirements: &'static str,
    pub documents: &'static str,
    pub max_points: u32,
    /// `None` marks a binary (achieved / not achieved) criterion.
    pub options: Option<Vec<CriterionOption>>,
    pub selection_mode: SelectionMode,
}

impl ResolvedCriterion {
    fn resolve(definition: &CriterionDefinition, building_type: BuildingType) -> Self {
        let options = definition
            .options
            .as_ref()
            .map(|_| resolve_options(definition, building_type));

        Self {
            id: definition.id,
            name: definition.name,
            kind: definition.kind,
            requirements: definition
                .requirements
                .resolve(building_type)
                .copied()
                .unwrap_or_default(),
            documents: definition.documents,
            max_points: resolve_point_ceiling(definition, building_type),
            options,
            selection_mode: definition.selection_mode,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.options.is_none()
    }

    pub fn option(&self, label: &str) -> Option<&CriterionOption> {
        self.options
            .as_deref()
            .and_then(|options| options.iter().find(|option| option.label == label))
    }

    pub fn option_labels(&self) -> Vec<&'static str> {
        self.options
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|option| option.label)
            .collect()
    }

    fn in_scope(&self) -> bool {
        self.kind == CriterionKind::Mandatory || self.max_points > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProgramKey {
    pub standard: Standard,
    pub building_type: BuildingType,
}

/// Criteria and tiers applicable to one standard and building type.
#[derive(Debug, Clone)]
pub struct CertificationProgram {
    key: ProgramKey,
    criteria: Vec<ResolvedCriterion>,
    index: HashMap<&'static str, usize>,
    tiers: Vec<CertificationTier>,
    max_score: u32,
}

impl CertificationProgram {
    fn build(
        definition: &StandardDefinition,
        building_type: BuildingType,
        issues: &mut Vec<CatalogIssue>,
    ) -> Self {
        let key = ProgramKey {
            standard: definition.standard,
            building_type,
        };

        let criteria: Vec<ResolvedCriterion> = definition
            .criteria
            .iter()
            .map(|criterion| ResolvedCriterion::resolve(criterion, building_type))
            .filter(ResolvedCriterion::in_scope)
            .collect();

        let mut index = HashMap::with_capacity(criteria.len());
        for (position, criterion) in criteria.iter().enumerate() {
            if index.contains_key(criterion.id) {
                issues.push(CatalogIssue::DuplicateCriterion {
                    key,
                    id: criterion.id,
                });
                continue;
            }
            index.insert(criterion.id, position);

            if criterion.selection_mode == SelectionMode::Single {
                for option in criterion.options.as_deref().unwrap_or_default() {
                    if option.points > criterion.max_points {
                        issues.push(CatalogIssue::OptionExceedsCeiling {
                            key,
                            id: criterion.id,
                            label: option.label,
                        });
                    }
                }
            }
        }

        let mut tiers = definition
            .tiers
            .resolve(building_type)
            .cloned()
            .unwrap_or_default();
        tiers.sort_by_key(|tier| tier.min_score);
        for pair in tiers.windows(2) {
            if pair[0].min_score == pair[1].min_score {
                issues.push(CatalogIssue::TierThresholdCollision {
                    key,
                    min_score: pair[0].min_score,
                });
            }
        }

        let max_score = criteria
            .iter()
            .filter(|criterion| criterion.kind == CriterionKind::Credit)
            .map(|criterion| criterion.max_points)
            .sum();

        Self {
            key,
            criteria,
            index,
            tiers,
            max_score,
        }
    }

    pub fn key(&self) -> ProgramKey {
        self.key
    }

    pub fn standard(&self) -> Standard {
        self.key.standard
    }

    pub fn building_type(&self) -> BuildingType {
        self.key.building_type
    }

    /// In-scope criteria in authoring order.
    pub fn criteria(&self) -> &[ResolvedCriterion] {
        &self.criteria
    }

    /// Tiers ascending by `min_score`.
    pub fn tiers(&self) -> &[CertificationTier] {
        &self.tiers
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn criterion(&self, id: &str) -> Result<&ResolvedCriterion, CertificationError> {
        self.index
            .get(id)
            .map(|position| &self.criteria[*position])
            .ok_or_else(|| CertificationError::UnknownCriterion {
                id: id.to_string(),
                standard: self.key.standard,
                building_type: self.key.building_type,
            })
    }
}

/// Authoring mistakes detected while the catalog is built. Logged, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateCriterion {
        key: ProgramKey,
        id: &'static str,
    },
    OptionExceedsCeiling {
        key: ProgramKey,
        id: &'static str,
        label: &'static str,
    },
    TierThresholdCollision {
        key: ProgramKey,
        min_score: u32,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateCriterion { key, id } => write!(
                f,
                "{}/{}: duplicate criterion id '{}'",
                key.standard, key.building_type, id
            ),
            CatalogIssue::OptionExceedsCeiling { key, id, label } => write!(
                f,
                "{}/{}: option '{}' of '{}' exceeds the criterion ceiling",
                key.standard, key.building_type, label, id
            ),
            CatalogIssue::TierThresholdCollision { key, min_score } => write!(
                f,
                "{}/{}: more than one tier starts at {} points",
                key.standard, key.building_type, min_score
            ),
        }
    }
}

/// Process-wide, immutable criteria catalog.
#[derive(Debug, Clone)]
pub struct CriteriaCatalog {
    programs: HashMap<ProgramKey, CertificationProgram>,
    issues: Vec<CatalogIssue>,
}

impl CriteriaCatalog {
    /// Catalog built from the bundled NEST and NEST PLUS definitions.
    pub fn standard() -> Self {
        Self::from_definitions(&standard_definitions())
    }

    /// Shared instance of [`CriteriaCatalog::standard`], built on first use.
    pub fn shared() -> Arc<Self> {
        static CATALOG: OnceLock<Arc<CriteriaCatalog>> = OnceLock::new();
        CATALOG
            .get_or_init(|| Arc::new(CriteriaCatalog::standard()))
            .clone()
    }

    pub fn from_definitions(definitions: &[StandardDefinition]) -> Self {
        let mut programs = HashMap::new();
        let mut issues = Vec::new();

        for definition in definitions {
            for building_type in BuildingType::ordered() {
                let program = CertificationProgram::build(definition, building_type, &mut issues);
                debug!(
                    standard = %program.standard(),
                    building_type = %building_type,
                    criteria = program.criteria().len(),
                    max_score = program.max_score(),
                    "criteria catalog program resolved"
                );
                programs.insert(program.key(), program);
            }
        }

        for issue in &issues {
            warn!(%issue, "criteria catalog authoring issue");
        }

        Self { programs, issues }
    }

    pub fn program(
        &self,
        standard: Standard,
        building_type: BuildingType,
    ) -> Result<&CertificationProgram, CertificationError> {
        self.programs
            .get(&ProgramKey {
                standard,
                building_type,
            })
            .ok_or(CertificationError::UnknownProgram {
                standard,
                building_type,
            })
    }

    pub fn criteria(
        &self,
        standard: Standard,
        building_type: BuildingType,
    ) -> Result<&[ResolvedCriterion], CertificationError> {
        self.program(standard, building_type)
            .map(CertificationProgram::criteria)
    }

    pub fn tiers(
        &self,
        standard: Standard,
        building_type: BuildingType,
    ) -> Result<&[CertificationTier], CertificationError> {
        self.program(standard, building_type)
            .map(CertificationProgram::tiers)
    }

    /// Programs in display order (standard, then building type).
    pub fn programs(&self) -> Vec<&CertificationProgram> {
        Standard::ordered()
            .into_iter()
            .flat_map(|standard| {
                BuildingType::ordered()
                    .into_iter()
                    .map(move |building_type| ProgramKey {
                        standard,
                        building_type,
                    })
            })
            .filter_map(|key| self.programs.get(&key))
            .collect()
    }

    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certification::domain::{BuildingSchedule, TierLevel};

    fn keyed_credit() -> CriterionDefinition {
        CriterionDefinition {
            id: "x-keyed",
            name: "Keyed",
            kind: CriterionKind::Credit,
            requirements: BuildingSchedule::per_type("new text", "existing text"),
            documents: "docs",
            points: BuildingSchedule::PerType {
                new: Some(3),
                existing: None,
            },
            options: Some(BuildingSchedule::PerType {
                new: Some(vec![CriterionOption {
                    label: "Level",
                    points: 3,
                }]),
                existing: None,
            }),
            selection_mode: SelectionMode::Single,
        }
    }

    #[test]
    fn resolution_defaults_missing_entries_to_zero_and_empty() {
        let criterion = keyed_credit();
        assert_eq!(resolve_point_ceiling(&criterion, BuildingType::New), 3);
        assert_eq!(resolve_point_ceiling(&criterion, BuildingType::Existing), 0);
        assert_eq!(resolve_options(&criterion, BuildingType::New).len(), 1);
        assert!(resolve_options(&criterion, BuildingType::Existing).is_empty());
    }

    #[test]
    fn resolved_criterion_picks_building_specific_requirements() {
        let resolved = ResolvedCriterion::resolve(&keyed_credit(), BuildingType::Existing);
        assert_eq!(resolved.requirements, "existing text");
        assert_eq!(resolved.options, Some(Vec::new()));
        assert!(!resolved.is_binary());
    }

    #[test]
    fn authoring_issues_are_collected_without_failing() {
        let tier = |min_score| CertificationTier {
            level: TierLevel::Certified,
            min_score,
            color: "#000000",
        };
        let mut oversized = keyed_credit();
        oversized.id = "x-oversized";
        oversized.points = BuildingSchedule::Uniform(1);
        oversized.options = Some(BuildingSchedule::Uniform(vec![CriterionOption {
            label: "Too many",
            points: 4,
        }]));

        let definition = StandardDefinition {
            standard: Standard::Nest,
            criteria: vec![keyed_credit(), keyed_credit(), oversized],
            tiers: BuildingSchedule::Uniform(vec![tier(10), tier(10)]),
        };

        let catalog = CriteriaCatalog::from_definitions(&[definition]);
        let issues = catalog.issues();

        assert!(issues.iter().any(|issue| matches!(
            issue,
            CatalogIssue::DuplicateCriterion { id: "x-keyed", .. }
        )));
        assert!(issues.iter().any(|issue| matches!(
            issue,
            CatalogIssue::OptionExceedsCeiling {
                label: "Too many",
                ..
            }
        )));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, CatalogIssue::TierThresholdCollision { min_score: 10, .. })));

        let program = catalog
            .program(Standard::Nest, BuildingType::New)
            .expect("program built");
        assert_eq!(program.criterion("x-keyed").expect("first wins").max_points, 3);
    }

    #[test]
    fn missing_standard_is_an_unknown_program() {
        let catalog = CriteriaCatalog::from_definitions(&[]);
        assert_eq!(
            catalog.criteria(Standard::NestPlus, BuildingType::New).err(),
            Some(CertificationError::UnknownProgram {
                standard: Standard::NestPlus,
                building_type: BuildingType::New,
            })
        );
    }

    #[test]
    fn shared_catalog_is_built_once() {
        let first = CriteriaCatalog::shared();
        let second = CriteriaCatalog::shared();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
