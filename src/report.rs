//! Field-level validation outcomes and the aggregate report.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// The entry fields a validation pass covers, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BirdName,
    Quantity,
    SightingDate,
    Behaviours,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::BirdName,
        Field::Quantity,
        Field::SightingDate,
        Field::Behaviours,
    ];

    /// Label shown next to the field in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Field::BirdName => "Name of bird",
            Field::Quantity => "Quantity",
            Field::SightingDate => "Date observed",
            Field::Behaviours => "Bird behaviours",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of one field's check chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldResult {
    /// Whether every check in the field's chain passed.
    pub is_valid: bool,
    /// Message for the first failing check (empty when valid).
    pub error: Option<String>,
}

impl FieldResult {
    pub fn valid() -> Self {
        FieldResult {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        FieldResult {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// All field outcomes for one validation pass.
///
/// `all_valid` starts true and is cleared the moment any field records a
/// failure; within a pass nothing sets it back.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub fields: BTreeMap<Field, FieldResult>,
    pub all_valid: bool,
}

impl ValidationReport {
    pub(crate) fn new() -> Self {
        ValidationReport {
            fields: BTreeMap::new(),
            all_valid: true,
        }
    }

    pub(crate) fn record(&mut self, field: Field, result: FieldResult) {
        if !result.is_valid {
            self.all_valid = false;
        }
        self.fields.insert(field, result);
    }

    /// The recorded outcome for a field, if the pass covered it.
    pub fn field(&self, field: Field) -> Option<&FieldResult> {
        self.fields.get(&field)
    }

    /// Error messages of every failed field, in form order.
    pub fn errors(&self) -> Vec<&str> {
        self.fields
            .values()
            .filter_map(|r| r.error.as_deref())
            .collect()
    }
}
