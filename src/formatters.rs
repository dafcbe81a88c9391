//! Output formatters for validation reports and reference data
//!
//! Pure functions that turn a [`ValidationReport`] or the static reference
//! data into terminal text. Callers decide where the text goes.

use colored::Colorize;

use crate::report::{Field, ValidationReport};
use crate::research::{self, Behaviour};

/// Format a validation report as multi-line text, one row per field.
pub fn format_report(report: &ValidationReport) -> String {
    let mut output = vec![
        "Sighting Entry".bold().to_string(),
        "==============".to_string(),
        String::new(),
    ];

    for field in Field::ALL {
        if let Some(result) = report.field(field) {
            output.push(format_field_row(field, result.is_valid, result.error.as_deref()));
        }
    }

    output.push(String::new());
    output.push(format_verdict(report.all_valid));
    output.join("\n")
}

/// One aligned row: icon, field label, then either "ok" or the error.
fn format_field_row(field: Field, is_valid: bool, error: Option<&str>) -> String {
    let icon = crate::ui::field_icon(is_valid);
    let detail = match error {
        Some(message) => message.red().to_string(),
        None => "ok".dimmed().to_string(),
    };
    format!("  {} {:<16} {}", icon, field.label(), detail)
}

/// The overall verdict line shown under the field rows.
pub fn format_verdict(all_valid: bool) -> String {
    if all_valid {
        "All fields are valid!".green().to_string()
    } else {
        "There are invalid fields. Please go back and check these."
            .red()
            .to_string()
    }
}

/// The single reference line shown next to the name field.
pub fn format_bird_reference() -> String {
    format!(
        "These are the birds being researched: {}",
        research::bird_names_line()
    )
}

/// Heading plus one line per researched bird.
pub fn format_bird_list() -> String {
    let mut output = vec![
        "Researched Birds".bold().to_string(),
        "================".to_string(),
    ];
    for name in research::bird_names() {
        output.push(format!("  {}", name));
    }
    output.join("\n")
}

/// Heading plus one line per observable behaviour label.
pub fn format_behaviour_list() -> String {
    let mut output = vec![
        "Observable Behaviours".bold().to_string(),
        "=====================".to_string(),
    ];
    for behaviour in Behaviour::ALL {
        output.push(format!("  {}", behaviour.label()));
    }
    output.join("\n")
}

/// The date and quantity bounds entries are checked against.
pub fn format_research_parameters() -> String {
    [
        "Research Parameters".bold().to_string(),
        "===================".to_string(),
        format!("  {:<24} {}", "Research period began:", research::min_date()),
        format!("  {:<24} {}", "Maximum quantity:", research::MAX_QUANTITY),
    ]
    .join("\n")
}
