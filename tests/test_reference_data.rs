//! Reference data accessors and the rendering built on top of them

use fieldbook::formatters;
use fieldbook::research::{self, Behaviour};
use fieldbook::validator;

#[test]
fn test_nine_birds_are_researched() {
    let names = research::bird_names();
    assert_eq!(names.len(), 9);
    assert!(names.contains(&"Speckled Pigeon"));
    assert!(names.contains(&"Lesser Striped Swallow"));

    // Every listed name passes its own lookup check
    for name in names {
        assert!(validator::check_bird_is_researched(name));
    }
}

#[test]
fn test_six_behaviours_with_stable_labels() {
    assert_eq!(Behaviour::ALL.len(), 6);
    assert_eq!(
        research::behaviour_labels(),
        vec![
            "singing",
            "flying",
            "foraging/eating",
            "nest building",
            "performing attraction display",
            "copulating/mating",
        ]
    );
}

#[test]
fn test_six_impossible_pairs() {
    let combos = research::invalid_behaviour_combos();
    assert_eq!(combos.len(), 6);
    assert!(combos.contains(&(Behaviour::Flying, Behaviour::Copulation)));

    // Singing pairs with everything; it appears in no combo
    for (a, b) in combos {
        assert_ne!(*a, Behaviour::Singing);
        assert_ne!(*b, Behaviour::Singing);
    }
}

#[test]
fn test_pair_membership_is_unordered() {
    // The set contains both members, regardless of selection order
    let selected: std::collections::BTreeSet<_> =
        [Behaviour::Copulation, Behaviour::Flying].into_iter().collect();
    assert!(validator::check_for_invalid_behaviour_combos(&selected));
}

#[test]
fn test_research_bounds() {
    assert_eq!(research::MAX_QUANTITY, 200);
    assert_eq!(research::min_date().to_string(), "2020-01-01");
}

#[test]
fn test_reference_rendering_matches_the_data() {
    let reference = formatters::format_bird_reference();
    for name in research::bird_names() {
        assert!(reference.contains(name));
    }
    assert!(!reference.ends_with(", "));

    let behaviours = formatters::format_behaviour_list();
    for behaviour in Behaviour::ALL {
        assert!(behaviours.contains(behaviour.label()));
    }

    let parameters = formatters::format_research_parameters();
    assert!(parameters.contains("2020-01-01"));
    assert!(parameters.contains("200"));
}
