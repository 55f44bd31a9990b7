use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Label the selection widgets use for "nothing chosen".
pub const NO_SELECTION: &str = "none";

/// A user's answer for one criterion.
///
/// Serialises to the shapes a client keeps in its form state: `true`/`false` for binary
/// criteria, a label for single-choice criteria, and an array of labels for multi-select.
/// Any other JSON value is kept as `Malformed` so one bad entry never rejects the whole map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Achieved(bool),
    Option(String),
    Options(BTreeSet<String>),
    Malformed(serde_json::Value),
}

impl Selection {
    /// Truthiness of an achieved flag. Clients that store flags as strings send `"true"`.
    pub fn is_achieved(&self) -> bool {
        match self {
            Selection::Achieved(flag) => *flag,
            Selection::Option(value) => {
                let value = value.trim();
                value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("achieved")
            }
            Selection::Options(_) | Selection::Malformed(_) => false,
        }
    }

    /// The single chosen label, unless empty or the "none" placeholder.
    pub fn single_label(&self) -> Option<&str> {
        match self {
            Selection::Option(label) if !label.is_empty() && label != NO_SELECTION => {
                Some(label.as_str())
            }
            _ => None,
        }
    }

    pub fn labels(&self) -> Option<&BTreeSet<String>> {
        match self {
            Selection::Options(labels) => Some(labels),
            _ => None,
        }
    }

    /// Whether the entry carries any answer worth reporting.
    pub fn is_attempted(&self) -> bool {
        match self {
            Selection::Achieved(flag) => *flag,
            Selection::Option(_) => self.is_achieved() || self.single_label().is_some(),
            Selection::Options(labels) => !labels.is_empty(),
            Selection::Malformed(_) => false,
        }
    }
}

/// Caller-owned answers keyed by criterion id. The scoring engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    entries: BTreeMap<String, Selection>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, criterion_id: &str) -> Option<&Selection> {
        self.entries.get(criterion_id)
    }

    pub fn set_achieved(&mut self, criterion_id: impl Into<String>, achieved: bool) {
        self.entries
            .insert(criterion_id.into(), Selection::Achieved(achieved));
    }

    /// Single-choice selection. Replaces whatever was chosen before.
    pub fn select_option(&mut self, criterion_id: impl Into<String>, label: impl Into<String>) {
        self.entries
            .insert(criterion_id.into(), Selection::Option(label.into()));
    }

    /// Multi-select checkbox change. A non-set entry is discarded and restarted as a set.
    pub fn toggle_option(
        &mut self,
        criterion_id: impl Into<String>,
        label: impl Into<String>,
        checked: bool,
    ) {
        let entry = self
            .entries
            .entry(criterion_id.into())
            .or_insert_with(|| Selection::Options(BTreeSet::new()));
        if !matches!(entry, Selection::Options(_)) {
            *entry = Selection::Options(BTreeSet::new());
        }
        if let Selection::Options(labels) = entry {
            let label = label.into();
            if checked {
                labels.insert(label);
            } else {
                labels.remove(&label);
            }
        }
    }

    pub fn clear(&mut self, criterion_id: &str) -> Option<Selection> {
        self.entries.remove(criterion_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries
            .iter()
            .map(|(id, selection)| (id.as_str(), selection))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Selection)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (String, Selection)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_client_form_state_shapes() {
        let state: SelectionState = serde_json::from_value(json!({
            "np-basic-amenities": true,
            "np-renewable-energy": "1.5 kW",
            "np-water-metering-controllers": ["Water Metering", "Water Metering"],
        }))
        .expect("form state parses");

        assert_eq!(
            state.get("np-basic-amenities"),
            Some(&Selection::Achieved(true))
        );
        assert_eq!(
            state
                .get("np-renewable-energy")
                .and_then(Selection::single_label),
            Some("1.5 kW")
        );
        assert_eq!(
            state
                .get("np-water-metering-controllers")
                .and_then(Selection::labels)
                .map(BTreeSet::len),
            Some(1)
        );
    }

    #[test]
    fn select_option_replaces_previous_choice() {
        let mut state = SelectionState::new();
        state.select_option("np-renewable-energy", "0.5 kW");
        state.select_option("np-renewable-energy", "2.5 kW");

        assert_eq!(state.len(), 1);
        assert_eq!(
            state.get("np-renewable-energy"),
            Some(&Selection::Option("2.5 kW".to_string()))
        );
    }

    #[test]
    fn toggle_option_behaves_like_a_set() {
        let mut state = SelectionState::new();
        state.toggle_option("np-exhaust-system", "Exhaust Fan", true);
        state.toggle_option("np-exhaust-system", "Exhaust Fan", true);
        state.toggle_option("np-exhaust-system", "Opening provision", true);
        state.toggle_option("np-exhaust-system", "Exhaust Fan", false);

        let labels = state
            .get("np-exhaust-system")
            .and_then(Selection::labels)
            .expect("multi-select entry");
        assert_eq!(labels.len(), 1);
        assert!(labels.contains("Opening provision"));
    }

    #[test]
    fn toggle_option_restarts_malformed_entries() {
        let mut state = SelectionState::new();
        state.select_option("np-exhaust-system", "Exhaust Fan");
        state.toggle_option("np-exhaust-system", "Opening provision", true);

        let labels = state
            .get("np-exhaust-system")
            .and_then(Selection::labels)
            .expect("converted to a set");
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["Opening provision"]);
    }

    #[test]
    fn string_flags_and_placeholders_are_interpreted() {
        assert!(Selection::Option("true".to_string()).is_achieved());
        assert!(!Selection::Option("false".to_string()).is_achieved());
        assert_eq!(Selection::Option(NO_SELECTION.to_string()).single_label(), None);
        assert!(!Selection::Option(String::new()).is_attempted());
        assert!(!Selection::Achieved(false).is_attempted());
    }

    #[test]
    fn unexpected_json_values_are_kept_as_malformed_entries() {
        let state: SelectionState = serde_json::from_value(json!({
            "np-basic-amenities": true,
            "np-renewable-energy": null,
            "np-daylighting": 3,
            "np-exhaust-system": ["Exhaust Fan", 1],
        }))
        .expect("form state parses");

        assert_eq!(state.len(), 4);
        assert_eq!(
            state.get("np-renewable-energy"),
            Some(&Selection::Malformed(serde_json::Value::Null))
        );
        for id in ["np-renewable-energy", "np-daylighting", "np-exhaust-system"] {
            let selection = state.get(id).expect("entry kept");
            assert!(!selection.is_achieved(), "{id}");
            assert!(!selection.is_attempted(), "{id}");
            assert_eq!(selection.single_label(), None, "{id}");
            assert_eq!(selection.labels(), None, "{id}");
        }
    }
}
