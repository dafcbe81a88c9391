//! # Fieldbook - Bird Sighting Validation
//!
//! Fieldbook validates single bird-sighting observations against the static
//! rules of an ecological research project: which birds are covered, how
//! many may be reported at once, when the research period began, and which
//! observed behaviours cannot physically co-occur.
//!
//! ## Overview
//!
//! A sighting entry carries a bird name, a count, a sighting date, and a set
//! of observed behaviours. Validation is a single synchronous pass: each
//! field runs a short-circuiting chain of pure checks against the reference
//! data, and the result is a per-field report plus an overall verdict.
//! Nothing is persisted; every pass starts from fresh input.
//!
//! ## Core Concepts
//!
//! - **Reference data**: the researched birds, the behaviour enumeration,
//!   the impossible behaviour pairs, and the date/quantity bounds
//! - **Entry**: the ephemeral form state handed in per validation pass
//! - **Report**: field-level pass/fail with human-readable diagnostics
//!
//! ## Modules
//!
//! - [`research`] - Static reference data the checks read from
//! - [`entry`] - The sighting entry assembled from form state
//! - [`validator`] - The check functions and the validation pass
//! - [`report`] - Field results and the aggregate report
//! - [`ui`] - Terminal color and icon helpers
//! - [`formatters`] - Report and reference-data text rendering
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fieldbook::entry::SightingEntry;
//! use fieldbook::research::Behaviour;
//! use fieldbook::validator;
//!
//! let entry = SightingEntry {
//!     bird_name: "Cape Turtle-Dove".to_string(),
//!     quantity: Some(5),
//!     sighting_date: NaiveDate::from_ymd_opt(2024, 6, 1),
//!     behaviours: [Behaviour::Singing].into_iter().collect(),
//! };
//!
//! let report = validator::validate(&entry);
//! assert!(report.all_valid);
//! ```

// Re-export all public modules
pub mod entry;
pub mod formatters;
pub mod report;
pub mod research;
pub mod ui;
pub mod validator;
