//! Static reference data for the bird research project.
//!
//! Everything the validator checks against lives here: the researched bird
//! names, the behaviour enumeration with its display labels, the pairs of
//! behaviours that are physically impossible to perform at the same time,
//! and the date/quantity bounds of the research project. All of it is fixed
//! for the lifetime of the process and read-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Largest number of birds a single sighting may report.
pub const MAX_QUANTITY: u32 = 200;

/// Common names of the birds covered by the research project.
///
/// Matching against this list is exact and case sensitive.
pub const BIRD_NAMES: [&str; 9] = [
    "Speckled Pigeon",
    "Cape Turtle-Dove",
    "African Green-Pigeon",
    "Burchell's Coucal",
    "White-rumped Swift",
    "Southern Fiscal",
    "Lesser Striped Swallow",
    "Sombre Greenbul",
    "Dark-capped Bulbul",
];

/// First day of the research period. Sightings dated earlier are rejected.
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("research start date is a valid calendar date")
}

/// The researched bird names, for lookup checks and picker population.
pub fn bird_names() -> &'static [&'static str] {
    &BIRD_NAMES
}

/// The researched bird names as a single comma-separated line, for display
/// next to the name field.
pub fn bird_names_line() -> String {
    BIRD_NAMES.join(", ")
}

/// A category of bird activity an observer may report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Behaviour {
    Singing,
    Flying,
    Foraging,
    NestBuilding,
    AttractionDisplay,
    Copulation,
}

impl Behaviour {
    /// Every behaviour, in the order pickers present them.
    pub const ALL: [Behaviour; 6] = [
        Behaviour::Singing,
        Behaviour::Flying,
        Behaviour::Foraging,
        Behaviour::NestBuilding,
        Behaviour::AttractionDisplay,
        Behaviour::Copulation,
    ];

    /// Human-readable label shown in pickers and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Behaviour::Singing => "singing",
            Behaviour::Flying => "flying",
            Behaviour::Foraging => "foraging/eating",
            Behaviour::NestBuilding => "nest building",
            Behaviour::AttractionDisplay => "performing attraction display",
            Behaviour::Copulation => "copulating/mating",
        }
    }

    /// Look up the behaviour for a display label, e.g. "singing".
    ///
    /// Returns `None` for labels that are not in the enumeration; callers
    /// decide how to report that.
    pub fn from_label(label: &str) -> Option<Behaviour> {
        Behaviour::ALL.iter().copied().find(|b| b.label() == label)
    }
}

impl Display for Behaviour {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display labels of every behaviour, in picker order.
pub fn behaviour_labels() -> Vec<&'static str> {
    Behaviour::ALL.iter().map(|b| b.label()).collect()
}

/// Unordered pairs of behaviours that cannot co-occur in one sighting.
///
/// A bird cannot, for example, be copulating while flying. Selection sets
/// containing both members of any pair here are invalid.
pub const INVALID_BEHAVIOUR_COMBOS: [(Behaviour, Behaviour); 6] = [
    (Behaviour::Flying, Behaviour::Copulation),
    (Behaviour::Foraging, Behaviour::NestBuilding),
    (Behaviour::Foraging, Behaviour::AttractionDisplay),
    (Behaviour::Foraging, Behaviour::Copulation),
    (Behaviour::NestBuilding, Behaviour::AttractionDisplay),
    (Behaviour::NestBuilding, Behaviour::Copulation),
];

/// The impossible behaviour pairs, for combo checks and documentation.
pub fn invalid_behaviour_combos() -> &'static [(Behaviour, Behaviour)] {
    &INVALID_BEHAVIOUR_COMBOS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_date_is_research_start() {
        assert_eq!(min_date(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_bird_names_line_joins_without_trailing_separator() {
        let line = bird_names_line();
        assert!(line.starts_with("Speckled Pigeon, "));
        assert!(line.ends_with("Dark-capped Bulbul"));
        assert_eq!(line.matches(", ").count(), BIRD_NAMES.len() - 1);
    }

    #[test]
    fn test_behaviour_labels_round_trip() {
        for behaviour in Behaviour::ALL {
            assert_eq!(Behaviour::from_label(behaviour.label()), Some(behaviour));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown_labels() {
        assert_eq!(Behaviour::from_label("swimming"), None);
        assert_eq!(Behaviour::from_label("Singing"), None); // labels are lowercase
        assert_eq!(Behaviour::from_label(""), None);
    }

    #[test]
    fn test_behaviour_display_matches_label() {
        assert_eq!(Behaviour::Copulation.to_string(), "copulating/mating");
        assert_eq!(Behaviour::Foraging.to_string(), "foraging/eating");
    }

    #[test]
    fn test_invalid_combos_are_distinct_pairs() {
        for (a, b) in INVALID_BEHAVIOUR_COMBOS {
            assert_ne!(a, b);
        }
        // No pair listed twice, in either order
        for (i, (a, b)) in INVALID_BEHAVIOUR_COMBOS.iter().enumerate() {
            for (c, d) in &INVALID_BEHAVIOUR_COMBOS[i + 1..] {
                assert!(!(a == c && b == d) && !(a == d && b == c));
            }
        }
    }
}
