//! The sighting entry assembled from current form state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::research::Behaviour;

/// A single user-reported observation.
///
/// Built fresh from whatever the user has entered each time validation runs
/// and discarded afterwards; nothing is persisted between passes. `None` for
/// quantity or date means the field was left blank, which the validator
/// reports as a presence failure on that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingEntry {
    pub bird_name: String,
    pub quantity: Option<u32>,
    pub sighting_date: Option<NaiveDate>,
    #[serde(default)]
    pub behaviours: BTreeSet<Behaviour>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_is_an_untouched_form() {
        let entry = SightingEntry::default();
        assert!(entry.bird_name.is_empty());
        assert_eq!(entry.quantity, None);
        assert_eq!(entry.sighting_date, None);
        assert!(entry.behaviours.is_empty());
    }
}
