use super::super::catalog::ResolvedCriterion;
use super::super::domain::{CriterionKind, SelectionMode};
use super::super::selection::Selection;

/// Points earned by one criterion for the given answer.
///
/// Never fails: a missing, stale, or wrong-shaped answer earns zero.
pub(crate) fn award_points(criterion: &ResolvedCriterion, selection: Option<&Selection>) -> u32 {
    if criterion.kind == CriterionKind::Mandatory {
        return 0;
    }

    let Some(selection) = selection else {
        return 0;
    };

    let Some(options) = criterion.options.as_deref() else {
        return if selection.is_achieved() {
            criterion.max_points
        } else {
            0
        };
    };

    match criterion.selection_mode {
        SelectionMode::Single => selection
            .single_label()
            .and_then(|label| options.iter().find(|option| option.label == label))
            .map(|option| option.points)
            .unwrap_or(0),
        SelectionMode::Multiple => {
            let Some(labels) = selection.labels() else {
                return 0;
            };
            let earned = options
                .iter()
                .filter(|option| labels.contains(option.label))
                .fold(0_u32, |total, option| total.saturating_add(option.points));
            earned.min(criterion.max_points)
        }
    }
}
