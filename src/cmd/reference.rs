//! Reference data listings for user reference and picker population.

use anyhow::Result;
use serde_json::json;

use fieldbook::formatters;
use fieldbook::research::{self, Behaviour};

pub fn cmd_birds(json: bool) -> Result<()> {
    if json {
        super::print_json(&research::bird_names())
    } else {
        println!("{}", formatters::format_bird_list());
        Ok(())
    }
}

pub fn cmd_behaviours(json: bool) -> Result<()> {
    if json {
        let behaviours: Vec<_> = Behaviour::ALL
            .iter()
            .map(|b| json!({ "name": b, "label": b.label() }))
            .collect();
        super::print_json(&behaviours)
    } else {
        println!("{}", formatters::format_behaviour_list());
        Ok(())
    }
}

pub fn cmd_research(json: bool) -> Result<()> {
    if json {
        super::print_json(&json!({
            "min_date": research::min_date(),
            "max_quantity": research::MAX_QUANTITY,
        }))
    } else {
        println!("{}", formatters::format_research_parameters());
        Ok(())
    }
}
