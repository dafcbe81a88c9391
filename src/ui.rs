//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for status colors, icons, and
//! formatting patterns used by the fieldbook CLI. The validation core never
//! prints; everything terminal-facing goes through here or `formatters`.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("FIELDBOOK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a field's validation outcome.
///
/// Icons:
/// - valid: ● (green)
/// - invalid: ✗ (red)
pub fn field_icon(is_valid: bool) -> ColoredString {
    if is_valid {
        "●".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for validation output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for a fully valid entry
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for validation failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_field_icon_symbols() {
        assert!(field_icon(true).contains('●'));
        assert!(field_icon(false).contains('✗'));
    }

    #[test]
    #[serial]
    fn test_is_quiet_reads_env_var() {
        std::env::remove_var("FIELDBOOK_QUIET");
        assert!(!is_quiet());

        std::env::set_var("FIELDBOOK_QUIET", "1");
        assert!(is_quiet());

        std::env::set_var("FIELDBOOK_QUIET", "TRUE");
        assert!(is_quiet());

        std::env::set_var("FIELDBOOK_QUIET", "0");
        assert!(!is_quiet());

        std::env::remove_var("FIELDBOOK_QUIET");
    }
}
