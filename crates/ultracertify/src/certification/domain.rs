use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Certification schemes supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Standard {
    #[serde(rename = "NEST")]
    Nest,
    #[serde(rename = "NEST_PLUS")]
    NestPlus,
}

impl Standard {
    pub const fn ordered() -> [Self; 2] {
        [Self::NestPlus, Self::Nest]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Nest => "NEST",
            Self::NestPlus => "NEST_PLUS",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nest => "NEST",
            Self::NestPlus => "NEST PLUS",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Standard {
    type Err = CertificationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "NEST" => Ok(Self::Nest),
            "NESTPLUS" => Ok(Self::NestPlus),
            _ => Err(CertificationError::UnknownStandard(raw.to_string())),
        }
    }
}

/// Selects which point ceilings, options, and tiers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildingType {
    New,
    Existing,
}

impl BuildingType {
    pub const fn ordered() -> [Self; 2] {
        [Self::New, Self::Existing]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Existing => "Existing",
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BuildingType {
    type Err = CertificationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "existing" => Ok(Self::Existing),
            _ => Err(CertificationError::UnknownBuildingType(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriterionKind {
    Mandatory,
    Credit,
}

impl CriterionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mandatory => "Mandatory",
            Self::Credit => "Credit",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// One achievable level of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionOption {
    pub label: &'static str,
    pub points: u32,
}

/// A value that is either shared by every building type or keyed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildingSchedule<T> {
    Uniform(T),
    PerType {
        new: Option<T>,
        existing: Option<T>,
    },
}

impl<T> BuildingSchedule<T> {
    pub fn per_type(new: T, existing: T) -> Self {
        Self::PerType {
            new: Some(new),
            existing: Some(existing),
        }
    }

    pub fn resolve(&self, building_type: BuildingType) -> Option<&T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::PerType { new, existing } => match building_type {
                BuildingType::New => new.as_ref(),
                BuildingType::Existing => existing.as_ref(),
            },
        }
    }
}

/// Authoring-time shape of a criterion, before it is resolved for a building type.
#[derive(Debug, Clone)]
pub struct CriterionDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: CriterionKind,
    pub requirements: BuildingSchedule<&'static str>,
    pub documents: &'static str,
    pub points: BuildingSchedule<u32>,
    pub options: Option<BuildingSchedule<Vec<CriterionOption>>>,
    pub selection_mode: SelectionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierLevel {
    Uncertified,
    Certified,
    Silver,
    Gold,
    Platinum,
}

impl TierLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uncertified => "Uncertified",
            Self::Certified => "Certified",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

/// Named score threshold a project qualifies for once its total meets `min_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CertificationTier {
    pub level: TierLevel,
    pub min_score: u32,
    pub color: &'static str,
}

impl CertificationTier {
    /// Sentinel reported when no catalog tier qualifies. Never part of a tier list.
    pub const UNCERTIFIED: Self = Self {
        level: TierLevel::Uncertified,
        min_score: 0,
        color: "#94a3b8",
    };

    pub const fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn is_certified(&self) -> bool {
        self.level != TierLevel::Uncertified
    }
}

/// Full authoring data for one certification standard.
#[derive(Debug, Clone)]
pub struct StandardDefinition {
    pub standard: Standard,
    pub criteria: Vec<CriterionDefinition>,
    pub tiers: BuildingSchedule<Vec<CertificationTier>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificationError {
    #[error("unknown certification standard '{0}'")]
    UnknownStandard(String),
    #[error("unknown building type '{0}'")]
    UnknownBuildingType(String),
    #[error("no criteria catalog for {standard} / {building_type} buildings")]
    UnknownProgram {
        standard: Standard,
        building_type: BuildingType,
    },
    #[error("criterion '{id}' is not part of {standard} / {building_type} buildings")]
    UnknownCriterion {
        id: String,
        standard: Standard,
        building_type: BuildingType,
    },
}
