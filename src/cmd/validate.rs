//! Flag-driven validation of a single sighting entry.
//!
//! Builds a [`SightingEntry`] from command-line flags, runs the validation
//! pass, and renders the report. Malformed flag values (an unparsable date,
//! an unknown behaviour label) are operational errors, not validation
//! failures, and are reported through `anyhow`.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

use fieldbook::entry::SightingEntry;
use fieldbook::research::{self, Behaviour};
use fieldbook::{formatters, ui, validator};

pub fn cmd_validate(
    bird: Option<&str>,
    quantity: Option<u32>,
    date: Option<&str>,
    behaviour_labels: &[String],
    json: bool,
) -> Result<()> {
    let entry = SightingEntry {
        bird_name: bird.unwrap_or("").to_string(),
        quantity,
        sighting_date: parse_sighting_date(date)?,
        behaviours: parse_behaviour_labels(behaviour_labels)?,
    };

    let report = validator::validate(&entry);

    if json {
        super::print_json(&report)?;
    } else if !ui::is_quiet() {
        println!("{}", formatters::format_report(&report));
    }

    if !report.all_valid {
        std::process::exit(1);
    }
    Ok(())
}

/// An omitted flag stays a blank field; "today" is the seen-today shortcut.
fn parse_sighting_date(date: Option<&str>) -> Result<Option<NaiveDate>> {
    match date {
        None => Ok(None),
        Some("today") => Ok(Some(Local::now().date_naive())),
        Some(raw) => {
            let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| {
                format!("invalid date '{}': expected YYYY-MM-DD or 'today'", raw)
            })?;
            Ok(Some(parsed))
        }
    }
}

/// Resolve display labels to behaviours; duplicates collapse into the set.
fn parse_behaviour_labels(labels: &[String]) -> Result<BTreeSet<Behaviour>> {
    let mut behaviours = BTreeSet::new();
    for label in labels {
        let behaviour = Behaviour::from_label(label).with_context(|| {
            format!(
                "unknown behaviour '{}' (expected one of: {})",
                label,
                research::behaviour_labels().join(", ")
            )
        })?;
        behaviours.insert(behaviour);
    }
    Ok(behaviours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sighting_date_formats() {
        assert_eq!(parse_sighting_date(None).unwrap(), None);
        assert_eq!(
            parse_sighting_date(Some("2024-06-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            parse_sighting_date(Some("today")).unwrap(),
            Some(Local::now().date_naive())
        );
        assert!(parse_sighting_date(Some("01/06/2024")).is_err());
    }

    #[test]
    fn test_parse_behaviour_labels_dedupes() {
        let labels = vec!["singing".to_string(), "singing".to_string()];
        let parsed = parse_behaviour_labels(&labels).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed.contains(&Behaviour::Singing));
    }

    #[test]
    fn test_parse_behaviour_labels_rejects_unknown() {
        let labels = vec!["swimming".to_string()];
        let err = parse_behaviour_labels(&labels).unwrap_err();
        assert!(err.to_string().contains("unknown behaviour 'swimming'"));
    }
}
