//! Error types for EDM mapping operations.
//!
//! This module provides the [`EdmError`] type for all library operations,
//! the [`Violation`] / [`ValidationErrors`] pair used to report every failed
//! rule of a record at once, and the [`Result`] convenience type.

use std::fmt;

use thiserror::Error;

/// A single failed validation rule.
///
/// Names the offending EDM class (e.g. `edm:ProvidedCHO`), the field if the
/// rule is field-level, and a message that includes the offending value(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Compact class name, e.g. `ore:Aggregation` or `EDM_Record`.
    pub class: String,
    /// Field name as used by the schema registry, e.g. `edm_rights`.
    pub field: Option<String>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// Creates a violation for a specific field of a class.
    #[must_use]
    pub fn field(
        class: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a class-level (or record-level) violation.
    #[must_use]
    pub fn class(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}: {}", self.class, field, self.message),
            None => write!(f, "{}: {}", self.class, self.message),
        }
    }
}

/// The full list of violations found while validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Appends all violations of another list.
    pub fn append(&mut self, other: ValidationErrors) {
        self.violations.extend(other.violations);
    }

    /// Returns true if no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns an iterator over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Returns every violation message, in the order they were found.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Returns true if any violation message contains `needle`.
    #[must_use]
    pub fn contains_message(&self, needle: &str) -> bool {
        self.violations.iter().any(|v| v.message.contains(needle))
    }

    /// Returns true if any violation concerns `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.field.as_deref() == Some(field))
    }

    /// Converts the list into `Ok(())` when empty, or an [`EdmError::Validation`].
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Validation`] if at least one violation was recorded.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EdmError::Validation(self))
        }
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

/// Error type for all EDM library operations.
#[derive(Error, Debug)]
pub enum EdmError {
    /// Input bytes do not parse as the declared wire format.
    #[error("Format error: {0}")]
    Format(String),

    /// A cardinality-one class has zero or several instances in the source graph.
    #[error("Multiplicity error: expected exactly one instance of {class}, found {count}")]
    Multiplicity {
        /// Compact class name.
        class: &'static str,
        /// Number of instances found.
        count: usize,
    },

    /// A single-valued field has several values in the source graph.
    #[error("Multiplicity error: expected at most one value for {class}.{field}, found {count}")]
    MultipleValues {
        /// Compact class name.
        class: &'static str,
        /// Field name.
        field: &'static str,
        /// Number of values found.
        count: usize,
    },

    /// One or more field-level or record-level rules failed.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A value failed URI shape validation.
    #[error("Invalid URI reference: '{0}'")]
    InvalidRef(String),

    /// A rights statement did not match a known vocabulary.
    #[error("Invalid rights statement: {0}")]
    Rights(String),

    /// A plain mapping does not have the shape of an EDM record.
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// The graph could not be written in the requested format.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EdmError {
    /// Returns the collected violations if this is a validation error.
    #[must_use]
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`EdmError`].
pub type Result<T> = std::result::Result<T, EdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let v = Violation::field("ore:Aggregation", "edm_rights", "missing");
        assert_eq!(v.to_string(), "ore:Aggregation.edm_rights: missing");

        let v = Violation::class("EDM_Record", "ids differ");
        assert_eq!(v.to_string(), "EDM_Record: ids differ");
    }

    #[test]
    fn test_validation_errors_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.push(Violation::field("skos:Concept", "skos_prefLabel", "duplicate"));
        errors.push(Violation::class("EDM_Record", "mismatch"));
        let err = errors.into_result().unwrap_err();

        let violations = err.violations().expect("validation error");
        assert_eq!(violations.len(), 2);
        assert!(violations.has_field("skos_prefLabel"));
        assert!(violations.contains_message("mismatch"));
        assert!(err.to_string().contains("2 violation(s)"));
    }
}
