use ultracertify::certification::{
    BuildingType, CertificationProgram, CriteriaCatalog, CriterionKind, ProjectDraft,
    ResolvedCriterion, ScoringEngine, Selection, SelectionMode, SelectionState, Standard,
    TierLevel,
};

fn engine() -> ScoringEngine {
    ScoringEngine::new(CriteriaCatalog::shared())
}

fn program(standard: Standard, building_type: BuildingType) -> CertificationProgram {
    CriteriaCatalog::shared()
        .program(standard, building_type)
        .expect("program exists")
        .clone()
}

/// Picks options criterion by criterion until `target` points are claimed.
fn selections_worth(program: &CertificationProgram, target: u32) -> SelectionState {
    let mut selections = SelectionState::new();
    let mut remaining = target;

    for criterion in program.criteria() {
        if remaining == 0 {
            break;
        }
        if criterion.kind == CriterionKind::Mandatory {
            continue;
        }
        remaining -= claim(criterion, remaining, &mut selections);
    }

    selections
}

fn claim(criterion: &ResolvedCriterion, budget: u32, selections: &mut SelectionState) -> u32 {
    let Some(options) = criterion.options.as_deref() else {
        if criterion.max_points <= budget {
            selections.set_achieved(criterion.id, true);
            return criterion.max_points;
        }
        return 0;
    };

    match criterion.selection_mode {
        SelectionMode::Single => options
            .iter()
            .filter(|option| option.points <= budget && option.points > 0)
            .max_by_key(|option| option.points)
            .map(|option| {
                selections.select_option(criterion.id, option.label);
                option.points
            })
            .unwrap_or(0),
        SelectionMode::Multiple => {
            let mut claimed = 0;
            for option in options {
                if claimed + option.points <= budget.min(criterion.max_points) {
                    selections.toggle_option(criterion.id, option.label, true);
                    claimed += option.points;
                }
            }
            claimed
        }
    }
}

#[test]
fn max_scores_match_the_published_catalog() {
    let expected = [
        (Standard::NestPlus, BuildingType::New, 85),
        (Standard::NestPlus, BuildingType::Existing, 75),
        (Standard::Nest, BuildingType::New, 50),
        (Standard::Nest, BuildingType::Existing, 45),
    ];

    for (standard, building_type, max_score) in expected {
        let program = program(standard, building_type);
        assert_eq!(program.max_score(), max_score, "{standard} {building_type}");

        let full = selections_worth(&program, u32::MAX);
        let scorecard = engine()
            .score(standard, building_type, &full)
            .expect("program exists");
        assert_eq!(scorecard.total_score, max_score, "{standard} {building_type}");
        assert_eq!(scorecard.progress_ratio, 1.0);
        assert_eq!(scorecard.tier.level, TierLevel::Platinum);
        assert!(scorecard.next_tier.is_none());
    }
}

#[test]
fn nest_plus_catalog_sizes() {
    assert_eq!(
        program(Standard::NestPlus, BuildingType::New).criteria().len(),
        32
    );
    assert_eq!(
        program(Standard::NestPlus, BuildingType::Existing)
            .criteria()
            .len(),
        33
    );
}

#[test]
fn multi_select_water_metering_awards_per_option() {
    let engine = engine();
    let score = |selections: &SelectionState| {
        engine
            .score(Standard::NestPlus, BuildingType::New, selections)
            .expect("program exists")
            .awarded_points("np-water-metering-controllers")
    };

    let mut selections = SelectionState::new();
    assert_eq!(score(&selections), Some(0));

    selections.toggle_option("np-water-metering-controllers", "Water Metering", true);
    assert_eq!(score(&selections), Some(1));

    selections.toggle_option(
        "np-water-metering-controllers",
        "Automatic water level controllers",
        true,
    );
    assert_eq!(score(&selections), Some(2));
}

#[test]
fn single_select_renewable_energy_ignores_placeholders_and_stale_labels() {
    let engine = engine();
    let score = |label: &str| {
        let mut selections = SelectionState::new();
        selections.select_option("np-renewable-energy", label);
        engine
            .score(Standard::NestPlus, BuildingType::New, &selections)
            .expect("program exists")
            .awarded_points("np-renewable-energy")
    };

    assert_eq!(score("1.5 kW"), Some(3));
    assert_eq!(score("none"), Some(0));
    assert_eq!(score(""), Some(0));
    assert_eq!(score("3.5 kW"), Some(0));
}

#[test]
fn tier_thresholds_are_inclusive_on_real_scores() {
    let program = program(Standard::NestPlus, BuildingType::New);
    let cases = [
        (39, TierLevel::Uncertified),
        (40, TierLevel::Certified),
        (64, TierLevel::Silver),
        (65, TierLevel::Gold),
        (75, TierLevel::Platinum),
    ];

    for (target, level) in cases {
        let selections = selections_worth(&program, target);
        let scorecard = engine()
            .score(Standard::NestPlus, BuildingType::New, &selections)
            .expect("program exists");
        assert_eq!(scorecard.total_score, target);
        assert_eq!(scorecard.tier.level, level, "score {target}");
    }
}

#[test]
fn switching_to_existing_drops_new_only_criteria_without_failing() {
    let mut draft = ProjectDraft::new(Standard::NestPlus, BuildingType::New);
    draft
        .selections
        .set_achieved("np-top-soil-preservation", true);
    draft
        .selections
        .select_option("np-local-materials", "50% of total cost");
    draft.selections.set_achieved("np-indoor-plants", true);

    let engine = engine();
    assert_eq!(draft.score(&engine).expect("scores").total_score, 5);

    draft.switch_building_type(BuildingType::Existing);
    let existing = program(Standard::NestPlus, BuildingType::Existing);
    assert!(!existing.contains("np-top-soil-preservation"));
    assert!(!existing.contains("np-local-materials"));

    let scorecard = draft.score(&engine).expect("scores");
    assert_eq!(scorecard.total_score, 1);
    assert_eq!(
        scorecard.orphaned_selections,
        vec!["np-local-materials", "np-top-soil-preservation"]
    );
}

#[test]
fn scoring_properties_hold_across_every_program() {
    let engine = engine();
    for program in CriteriaCatalog::shared().programs() {
        let full = selections_worth(program, u32::MAX);
        let scorecard = engine
            .score(program.standard(), program.building_type(), &full)
            .expect("program exists");

        for award in &scorecard.awards {
            assert!(award.awarded <= award.max_points, "{}", award.criterion_id);
            if award.kind == CriterionKind::Mandatory {
                assert_eq!(award.awarded, 0);
            }
        }

        let again = engine
            .score(program.standard(), program.building_type(), &full)
            .expect("program exists");
        assert_eq!(scorecard, again);
    }
}

#[test]
fn multiple_mode_ignores_single_string_answers() {
    let selections: SelectionState = [(
        "np-exhaust-system".to_string(),
        Selection::Option("Exhaust Fan".to_string()),
    )]
    .into_iter()
    .collect();

    let scorecard = engine()
        .score(Standard::NestPlus, BuildingType::New, &selections)
        .expect("program exists");
    assert_eq!(scorecard.awarded_points("np-exhaust-system"), Some(0));
}
