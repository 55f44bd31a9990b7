use super::catalog::CertificationProgram;
use super::selection::{Selection, SelectionState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Metadata for one uploaded photo or document. The file itself is never held here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDescriptor {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl EvidenceDescriptor {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            description: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Declared content type, or one guessed from the file extension.
    pub fn resolved_content_type(&self) -> String {
        match &self.content_type {
            Some(content_type) if !content_type.trim().is_empty() => content_type.clone(),
            _ => mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.resolved_content_type().starts_with("image/")
    }

    /// `"lat, lon"` with five decimals when both coordinates are present.
    pub fn location_label(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(format!("{latitude:.5}, {longitude:.5}")),
            _ => None,
        }
    }
}

/// Evidence keyed by criterion id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceLedger {
    entries: BTreeMap<String, Vec<EvidenceDescriptor>>,
}

impl EvidenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, criterion_id: impl Into<String>, descriptor: EvidenceDescriptor) {
        self.entries
            .entry(criterion_id.into())
            .or_default()
            .push(descriptor);
    }

    /// Removes the first descriptor with `file_name`. Returns whether one was found.
    pub fn detach(&mut self, criterion_id: &str, file_name: &str) -> bool {
        let Some(files) = self.entries.get_mut(criterion_id) else {
            return false;
        };
        let Some(position) = files.iter().position(|file| file.file_name == file_name) else {
            return false;
        };
        files.remove(position);
        if files.is_empty() {
            self.entries.remove(criterion_id);
        }
        true
    }

    pub fn files(&self, criterion_id: &str) -> &[EvidenceDescriptor] {
        self.entries
            .get(criterion_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count(&self, criterion_id: &str) -> usize {
        self.files(criterion_id).len()
    }

    pub fn has_evidence(&self, criterion_id: &str) -> bool {
        self.count(criterion_id) > 0
    }

    pub fn criterion_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, files)| !files.is_empty())
            .map(|(id, _)| id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

/// Service-side gate run before scoring. The engine never looks at evidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvidencePolicy {
    require_evidence: bool,
}

/// Selections after the evidence gate, with the ids whose achieved flag was withheld.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatedSelections {
    pub selections: SelectionState,
    pub withheld: Vec<String>,
}

impl EvidencePolicy {
    pub fn new(require_evidence: bool) -> Self {
        Self { require_evidence }
    }

    pub fn requires_evidence(&self) -> bool {
        self.require_evidence
    }

    /// Drops achieved flags of binary criteria that have no evidence attached.
    pub fn apply(
        &self,
        program: &CertificationProgram,
        selections: &SelectionState,
        evidence: &EvidenceLedger,
    ) -> GatedSelections {
        if !self.require_evidence {
            return GatedSelections {
                selections: selections.clone(),
                withheld: Vec::new(),
            };
        }

        let mut withheld = Vec::new();
        let gated = selections
            .iter()
            .filter(|(id, selection)| {
                let unevidenced_flag = selection.is_achieved()
                    && !evidence.has_evidence(id)
                    && program
                        .criterion(id)
                        .map(|criterion| criterion.is_binary())
                        .unwrap_or(false);
                if unevidenced_flag {
                    withheld.push(id.to_string());
                }
                !unevidenced_flag
            })
            .map(|(id, selection): (&str, &Selection)| (id.to_string(), selection.clone()))
            .collect();

        if !withheld.is_empty() {
            debug!(
                standard = %program.standard(),
                building_type = %program.building_type(),
                withheld = withheld.len(),
                "achieved flags withheld for missing evidence"
            );
        }

        GatedSelections {
            selections: gated,
            withheld,
        }
    }
}
