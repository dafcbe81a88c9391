//! Field validation against the static research rules.
//!
//! One pure check per concern, plus [`validate`] which runs every field's
//! check chain over a [`SightingEntry`] and produces a [`ValidationReport`].
//! Each field's chain short-circuits: the first failing check wins and its
//! message is the one attached to the field. Nothing here prints or stores
//! anything; rendering the report is the caller's job.

use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

use crate::entry::SightingEntry;
use crate::report::{Field, FieldResult, ValidationReport};
use crate::research::{self, Behaviour};

const BLANK_FIELD: &str = "This field cannot be left blank.";

/// A field has content once surrounding whitespace is ignored.
pub fn check_presence(value: &str) -> bool {
    !value.trim().is_empty()
}

/// A text field contains no decimal digit characters.
pub fn check_no_numbers(value: &str) -> bool {
    !value.chars().any(|c| c.is_ascii_digit())
}

/// The name matches a researched bird exactly, case sensitively.
pub fn check_bird_is_researched(bird_name: &str) -> bool {
    research::bird_names().contains(&bird_name)
}

/// Quantity is at least one bird and no more than the research maximum.
pub fn check_valid_quantity(quantity: u32) -> bool {
    (1..=research::MAX_QUANTITY).contains(&quantity)
}

/// The date falls on or after the start of the research period.
pub fn check_date_after_min(date: NaiveDate) -> bool {
    date >= research::min_date()
}

/// The date is no later than today's local calendar date.
pub fn check_date_not_in_future(date: NaiveDate) -> bool {
    date <= Local::now().date_naive()
}

/// Whether the selection contains both members of any impossible pair.
///
/// An empty selection trivially contains no pair.
pub fn check_for_invalid_behaviour_combos(behaviours: &BTreeSet<Behaviour>) -> bool {
    research::invalid_behaviour_combos()
        .iter()
        .any(|(a, b)| behaviours.contains(a) && behaviours.contains(b))
}

/// Render every violated pair as "<labelA> and <labelB>", ", "-joined.
///
/// Empty when no pair is violated. All violated pairs appear, each as its
/// own fragment.
pub fn describe_invalid_behaviour_combos(behaviours: &BTreeSet<Behaviour>) -> String {
    research::invalid_behaviour_combos()
        .iter()
        .filter(|(a, b)| behaviours.contains(a) && behaviours.contains(b))
        .map(|(a, b)| format!("{} and {}", a.label(), b.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run every field's check chain and aggregate the outcomes.
pub fn validate(entry: &SightingEntry) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.record(Field::BirdName, validate_bird_name(&entry.bird_name));
    report.record(Field::Quantity, validate_quantity(entry.quantity));
    report.record(
        Field::SightingDate,
        validate_sighting_date(entry.sighting_date),
    );
    report.record(Field::Behaviours, validate_behaviours(&entry.behaviours));
    report
}

/// Chain: presence, then no digits, then researched-bird lookup.
fn validate_bird_name(bird_name: &str) -> FieldResult {
    if !check_presence(bird_name) {
        FieldResult::invalid(BLANK_FIELD)
    } else if !check_no_numbers(bird_name) {
        FieldResult::invalid("Bird names cannot contain numbers. Enter the quantity in its own field.")
    } else if !check_bird_is_researched(bird_name) {
        FieldResult::invalid(
            "This bird is not among the birds being researched. Names are case sensitive.",
        )
    } else {
        FieldResult::valid()
    }
}

/// Chain: presence (a blank field), then range.
fn validate_quantity(quantity: Option<u32>) -> FieldResult {
    match quantity {
        None => FieldResult::invalid(BLANK_FIELD),
        Some(q) if !check_valid_quantity(q) => FieldResult::invalid(format!(
            "Please enter a number between 1 and {} (inclusive).",
            research::MAX_QUANTITY
        )),
        Some(_) => FieldResult::valid(),
    }
}

/// Chain: presence, then research-period start, then not-in-future.
fn validate_sighting_date(date: Option<NaiveDate>) -> FieldResult {
    match date {
        None => FieldResult::invalid(BLANK_FIELD),
        Some(d) if !check_date_after_min(d) => FieldResult::invalid(format!(
            "Please enter {} or later. That is when the research period began.",
            research::min_date()
        )),
        Some(d) if !check_date_not_in_future(d) => FieldResult::invalid(
            "Sighting date cannot be in the future. Please enter today's date or earlier.",
        ),
        Some(_) => FieldResult::valid(),
    }
}

/// Combo detection runs regardless of how many behaviours are selected.
fn validate_behaviours(behaviours: &BTreeSet<Behaviour>) -> FieldResult {
    if check_for_invalid_behaviour_combos(behaviours) {
        FieldResult::invalid(format!(
            "Birds cannot be both {} at the same time. Remove the invalid combination, \
             or log a separate sighting for each behaviour you saw.",
            describe_invalid_behaviour_combos(behaviours)
        ))
    } else {
        FieldResult::valid()
    }
}
