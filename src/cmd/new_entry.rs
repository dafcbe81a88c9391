//! Interactive sighting entry wizard.
//!
//! CLI counterpart of the data-entry form: prompts for each field, validates
//! the assembled entry, and offers to edit and revalidate while fields are
//! invalid. The validation core keeps no memory between passes; each retry
//! rebuilds the entry from the edited answers.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;

use fieldbook::entry::SightingEntry;
use fieldbook::research::Behaviour;
use fieldbook::{formatters, validator};

pub fn cmd_new() -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!(
            "`fieldbook new` needs an interactive terminal. Use `fieldbook validate` with flags instead."
        );
    }

    println!("{}", formatters::format_bird_reference());
    println!();

    let mut entry = SightingEntry::default();
    loop {
        entry = prompt_entry(&entry)?;

        let report = validator::validate(&entry);
        println!();
        println!("{}", formatters::format_report(&report));

        if report.all_valid {
            return Ok(());
        }

        println!();
        let edit_again = dialoguer::Confirm::new()
            .with_prompt("Edit the entry and validate again?")
            .default(true)
            .interact()?;
        if !edit_again {
            std::process::exit(1);
        }
        println!();
    }
}

/// Prompt for every field, pre-filled with the previous answers on retries.
fn prompt_entry(previous: &SightingEntry) -> Result<SightingEntry> {
    let bird_name: String = dialoguer::Input::new()
        .with_prompt("Name of bird")
        .with_initial_text(&previous.bird_name)
        .allow_empty(true)
        .interact_text()?;

    let quantity_raw: String = dialoguer::Input::new()
        .with_prompt("Quantity")
        .with_initial_text(previous.quantity.map(|q| q.to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| {
            let trimmed = input.trim();
            if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err("enter a whole number, or leave blank")
            }
        })
        .interact_text()?;
    let quantity = quantity_raw.trim().parse::<u32>().ok();

    let date_raw: String = dialoguer::Input::new()
        .with_prompt("Date observed (YYYY-MM-DD, \"today\", or blank)")
        .with_initial_text(
            previous
                .sighting_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .validate_with(|input: &String| {
            let trimmed = input.trim();
            if trimmed.is_empty()
                || trimmed == "today"
                || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok()
            {
                Ok(())
            } else {
                Err("enter YYYY-MM-DD, \"today\", or leave blank")
            }
        })
        .interact_text()?;
    let sighting_date = parse_date_answer(&date_raw);

    let defaults: Vec<bool> = Behaviour::ALL
        .iter()
        .map(|b| previous.behaviours.contains(b))
        .collect();
    let picks = dialoguer::MultiSelect::new()
        .with_prompt("Bird behaviours (space toggles, enter confirms)")
        .items(&Behaviour::ALL.map(|b| b.label()))
        .defaults(&defaults)
        .interact()?;
    let behaviours: BTreeSet<Behaviour> = picks.into_iter().map(|i| Behaviour::ALL[i]).collect();

    Ok(SightingEntry {
        bird_name,
        quantity,
        sighting_date,
        behaviours,
    })
}

/// Validated answers only reach here: blank, "today", or a parsable date.
fn parse_date_answer(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed == "today" {
        Some(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_answer_variants() {
        assert_eq!(parse_date_answer(""), None);
        assert_eq!(parse_date_answer("  "), None);
        assert_eq!(parse_date_answer("today"), Some(Local::now().date_naive()));
        assert_eq!(
            parse_date_answer("2023-03-14"),
            NaiveDate::from_ymd_opt(2023, 3, 14)
        );
    }
}
