//! Aggregation of field results into one report
//!
//! [`aggregate`] folds a sequence of [`FieldValidationResult`]s into a
//! [`ValidationAggregate`] keyed by field name. Only failing fields are
//! recorded, so an empty aggregate means the whole input is valid. A runtime
//! error in any result aborts aggregation and is returned instead.

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::field::{FieldOutcome, FieldValidationResult};
use crate::foundation::{RuntimeError, ValidationError};

// ============================================================================
// VALIDATION AGGREGATE
// ============================================================================

/// Validation errors keyed by field name, in the order the fields were
/// reported.
///
/// With the `serde` feature it serializes as an object mapping each failing
/// field to its error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationAggregate {
    errors_by_field: IndexMap<Cow<'static, str>, ValidationError>,
}

impl ValidationAggregate {
    /// Returns true if no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors_by_field.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors_by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors_by_field.is_empty()
    }

    /// The error recorded for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors_by_field.get(field)
    }

    /// Failing fields and their errors, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors_by_field
            .iter()
            .map(|(field, error)| (field.as_ref(), error))
    }

    /// Names of the failing fields, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors_by_field.keys().map(AsRef::as_ref)
    }

    /// `Ok(())` when valid, otherwise the aggregate itself as the error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }

    /// Records `error` for `field` unless the field already failed.
    fn record(&mut self, field: Cow<'static, str>, error: ValidationError) {
        match self.errors_by_field.entry(field) {
            Entry::Occupied(entry) => {
                tracing::trace!(field = %entry.key(), "field already failed, keeping first error");
            }
            Entry::Vacant(entry) => {
                entry.insert(error);
            }
        }
    }
}

impl<'a> IntoIterator for &'a ValidationAggregate {
    type Item = (&'a Cow<'static, str>, &'a ValidationError);
    type IntoIter = indexmap::map::Iter<'a, Cow<'static, str>, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors_by_field.iter()
    }
}

impl std::fmt::Display for ValidationAggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        write!(f, "{} invalid field(s)", self.len())?;
        for (field, error) in self.iter() {
            write!(f, "\n  {field}: {}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationAggregate {}

// ============================================================================
// AGGREGATE
// ============================================================================

/// Combines field results into a [`ValidationAggregate`].
///
/// Results are visited in order. The first runtime error aborts and is
/// returned. When a field name appears more than once with a failure, the
/// first failure is kept.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::prelude::*;
///
/// let report = aggregate([
///     validate_field("name", "", &[&not_empty()]),
///     validate_field("email", "abc@example.com", &[&is_email()]),
/// ])
/// .unwrap();
///
/// assert!(!report.is_valid());
/// assert_eq!(report.get("name").unwrap().code, "notEmpty.empty");
/// assert!(report.get("email").is_none());
/// ```
pub fn aggregate<I>(results: I) -> Result<ValidationAggregate, RuntimeError>
where
    I: IntoIterator<Item = FieldValidationResult>,
{
    let mut report = ValidationAggregate::default();

    for result in results {
        let (field, outcome) = result.into_parts();
        match outcome {
            FieldOutcome::Passed => {}
            FieldOutcome::Invalid(error) => report.record(field, error),
            FieldOutcome::Failed(error) => {
                tracing::debug!(field = %field, error = %error, "aggregation aborted by runtime error");
                return Err(error);
            }
        }
    }

    tracing::debug!(invalid_fields = report.len(), "validation aggregated");
    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================
