//! Field validation
//!
//! Runs an ordered list of rules against one field's value and records the
//! first failure. The rules are evaluated in slice order; evaluation stops at
//! the first validation error or runtime error.

use std::borrow::{Borrow, Cow};

use vkit_option::Optional;

use crate::foundation::{
    RuleFailure, RuleResult, RuntimeError, Validate, ValidationError, validate_with_all,
};

// ============================================================================
// FIELD OUTCOME
// ============================================================================

/// What happened when a field's rules were evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// Every rule passed, or the field was an absent optional.
    Passed,
    /// A rule rejected the value.
    Invalid(ValidationError),
    /// A rule could not be evaluated.
    Failed(RuntimeError),
}

// ============================================================================
// FIELD VALIDATION RESULT
// ============================================================================

/// The outcome of validating a single named field.
///
/// Holds at most one failure: either a validation error or a runtime error,
/// never both.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValidationResult {
    field: Cow<'static, str>,
    outcome: FieldOutcome,
}

impl FieldValidationResult {
    /// A passing result for `field`.
    pub fn passed(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            outcome: FieldOutcome::Passed,
        }
    }

    /// Builds a result from a rule evaluation. Validation errors get the
    /// field name attached.
    pub fn from_rule_result(
        field: impl Into<Cow<'static, str>>,
        result: RuleResult,
    ) -> Self {
        let field = field.into();
        let outcome = match result {
            Ok(()) => FieldOutcome::Passed,
            Err(RuleFailure::Invalid(error)) => {
                FieldOutcome::Invalid(error.with_field(field.clone()))
            }
            Err(RuleFailure::Runtime(error)) => FieldOutcome::Failed(error),
        };
        Self { field, outcome }
    }

    /// The field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn outcome(&self) -> &FieldOutcome {
        &self.outcome
    }

    /// The validation error, if a rule rejected the value.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match &self.outcome {
            FieldOutcome::Invalid(error) => Some(error),
            _ => None,
        }
    }

    /// The runtime error, if a rule could not be evaluated.
    pub fn runtime_error(&self) -> Option<&RuntimeError> {
        match &self.outcome {
            FieldOutcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Returns true if every rule passed.
    pub fn is_passed(&self) -> bool {
        matches!(self.outcome, FieldOutcome::Passed)
    }

    /// Splits the result into the field name and its outcome.
    pub fn into_parts(self) -> (Cow<'static, str>, FieldOutcome) {
        (self.field, self.outcome)
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Validates `value` against `rules` in order and stops at the first failure.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::prelude::*;
///
/// let result = validate_field("name", "abc", &[&max_length(2), &min_length(50)]);
///
/// let error = result.validation_error().unwrap();
/// assert_eq!(error.code, "maxLength.length");
/// assert_eq!(error.field.as_deref(), Some("name"));
/// assert!(result.runtime_error().is_none());
/// ```
pub fn validate_field<T>(
    field: impl Into<Cow<'static, str>>,
    value: &T,
    rules: &[&dyn Validate<Input = T>],
) -> FieldValidationResult
where
    T: ?Sized,
{
    let field = field.into();
    let result = validate_with_all(value, rules);
    let result = FieldValidationResult::from_rule_result(field, result);
    trace_outcome(&result);
    result
}

/// Validates an optional field.
///
/// An absent value passes without evaluating any rule. A present value is
/// borrowed as the rules' input type and validated as in [`validate_field`].
///
/// # Examples
///
/// ```rust
/// use vkit_option::Optional;
/// use vkit_validator::prelude::*;
///
/// let nickname: Optional<String> = Optional::absent();
/// assert!(validate_optional_field("nickname", &nickname, &[&min_length(50)]).is_passed());
///
/// let nickname = Optional::present(String::from("al"));
/// assert!(!validate_optional_field("nickname", &nickname, &[&min_length(3)]).is_passed());
/// ```
pub fn validate_optional_field<T, U>(
    field: impl Into<Cow<'static, str>>,
    value: &Optional<T>,
    rules: &[&dyn Validate<Input = U>],
) -> FieldValidationResult
where
    T: Borrow<U>,
    U: ?Sized,
{
    match value.as_option() {
        Some(inner) => validate_field(field, <T as Borrow<U>>::borrow(inner), rules),
        None => {
            let result = FieldValidationResult::passed(field);
            tracing::trace!(field = %result.field(), "optional field absent, rules skipped");
            result
        }
    }
}

fn trace_outcome(result: &FieldValidationResult) {
    match result.outcome() {
        FieldOutcome::Passed => tracing::trace!(field = %result.field(), "field passed"),
        FieldOutcome::Invalid(error) => {
            tracing::trace!(field = %result.field(), code = %error.code, "field invalid");
        }
        FieldOutcome::Failed(error) => {
            tracing::debug!(field = %result.field(), error = %error, "rule evaluation failed");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::rule_fn;
    use crate::validators::{max, max_length, min, min_length, not_empty};
    use pretty_assertions::assert_eq;
    use vkit_option::{absent, present};

    #[test]
    fn test_all_rules_pass() {
        let result = validate_field("name", "abc", &[&not_empty(), &min_length(2)]);
        assert!(result.is_passed());
        assert_eq!(result.field(), "name");
        assert!(result.validation_error().is_none());
        assert!(result.runtime_error().is_none());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let result = validate_field("name", "abc", &[&max_length(2), &min_length(50)]);
        let error = result.validation_error().unwrap();
        assert_eq!(error.code, "maxLength.length");
        assert_eq!(error.field.as_deref(), Some("name"));
    }

    #[test]
    fn test_integer_rules_in_order() {
        let result = validate_field("age", &33_i64, &[&max(2_i64), &min(1_i64)]);
        assert_eq!(result.validation_error().unwrap().code, "max.invalid");
    }

    #[test]
    fn test_runtime_error_stops_evaluation() {
        let broken = rule_fn(|_: &str| Err(RuntimeError::evaluation("lookup", "offline").into()));
        let result = validate_field("name", "", &[&broken, &not_empty()]);

        assert!(result.validation_error().is_none());
        assert_eq!(
            result.runtime_error(),
            Some(&RuntimeError::evaluation("lookup", "offline"))
        );
    }

    #[test]
    fn test_empty_rule_list_passes() {
        let rules: &[&dyn Validate<Input = str>] = &[];
        assert!(validate_field("name", "", rules).is_passed());
    }

    #[test]
    fn test_absent_optional_skips_rules() {
        let value: Optional<i64> = absent();
        let result = validate_optional_field("age", &value, &[&max(2_i64), &min(1_i64)]);
        assert!(result.is_passed());
        assert_eq!(result.field(), "age");
    }

    #[test]
    fn test_present_optional_is_validated() {
        let result = validate_optional_field("age", &present(33_i64), &[&max(2_i64)]);
        assert_eq!(result.validation_error().unwrap().code, "max.invalid");
    }

    #[test]
    fn test_optional_string_with_str_rules() {
        let value = present(String::from("abc"));
        let result = validate_optional_field("name", &value, &[&max_length(2)]);
        assert_eq!(result.validation_error().unwrap().field.as_deref(), Some("name"));
    }

    #[test]
    fn test_from_rule_result_attaches_field() {
        let failure: RuleFailure = ValidationError::new("x", "y").into();
        let result = FieldValidationResult::from_rule_result("email", Err(failure));
        assert_eq!(
            result.into_parts(),
            (
                Cow::Borrowed("email"),
                FieldOutcome::Invalid(ValidationError::new("x", "y").with_field("email"))
            )
        );
    }
}
