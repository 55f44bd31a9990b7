use super::domain::{BuildingType, CertificationError, Standard};
use super::scoring::{Scorecard, ScoringEngine};
use super::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Saved progress: the program and the answers, never a computed score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDraft {
    pub standard: Standard,
    pub building_type: BuildingType,
    #[serde(default)]
    pub selections: SelectionState,
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("unable to access draft {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("draft is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectDraft {
    pub fn new(standard: Standard, building_type: BuildingType) -> Self {
        Self {
            standard,
            building_type,
            selections: SelectionState::new(),
        }
    }

    /// Keeps every selection; entries that fall out of scope are ignored when scored.
    pub fn switch_building_type(&mut self, building_type: BuildingType) {
        self.building_type = building_type;
    }

    pub fn score(&self, engine: &ScoringEngine) -> Result<Scorecard, CertificationError> {
        engine.score(self.standard, self.building_type, &self.selections)
    }

    pub fn from_json(raw: &str) -> Result<Self, DraftError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, DraftError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DraftError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DraftError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let draft = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            standard = %draft.standard,
            building_type = %draft.building_type,
            selections = draft.selections.len(),
            "draft loaded"
        );
        Ok(draft)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DraftError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| DraftError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
