//! AND combinator - ordered conjunction of rules
//!
//! [`And`] runs two rules in order and reports the first failure. Chaining
//! `.and()` (or [`compose!`](crate::compose)) gives the "evaluate rules in
//! order, first failure returned" behavior used by [`When`](super::When)
//! and [`WhenNotEmpty`](super::WhenNotEmpty).
//!
//! # Examples
//!
//! ```rust
//! use vkit_validator::combinators::And;
//! use vkit_validator::foundation::Validate;
//! use vkit_validator::validators::{max_length, min_length};
//!
//! let validator = And::new(min_length(5), max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! assert!(validator.validate("hi").is_err());
//! ```

use crate::foundation::{RuleFailure, Validate};

/// Combines two rules with logical AND.
///
/// Both rules must pass. The right rule is not evaluated when the left one
/// fails, whether with a validation or a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Creates an [`AndAll`] from a list of rules of one type.
///
/// Boxed trait objects mix rule types in one list:
///
/// ```rust
/// use vkit_validator::combinators::and_all;
/// use vkit_validator::foundation::Validate;
/// use vkit_validator::validators::{max_length, not_empty};
///
/// let rules: Vec<Box<dyn Validate<Input = str> + Send + Sync>> =
///     vec![Box::new(not_empty()), Box::new(max_length(5))];
/// let validator = and_all(rules);
/// assert!(validator.validate("hey").is_ok());
/// assert!(validator.validate("").is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Runs a list of rules in order, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Returns the rules in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::traits::ValidateExt;
    use crate::foundation::{RuntimeError, ValidationError};
    use std::cell::Cell;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), RuleFailure> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::new("min", format!("min {}", self.min)).into())
            }
        }
    }

    struct Counting<'a> {
        calls: &'a Cell<usize>,
    }

    impl Validate for Counting<'_> {
        type Input = str;
        fn validate(&self, _input: &str) -> Result<(), RuleFailure> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    struct Broken;

    impl Validate for Broken {
        type Input = str;
        fn validate(&self, _input: &str) -> Result<(), RuleFailure> {
            Err(RuntimeError::evaluation("broken", "no backend").into())
        }
    }

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(MinLength { min: 1 }, MinLength { min: 2 });
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_left_failure_skips_right() {
        let calls = Cell::new(0);
        let validator = MinLength { min: 5 }.and(Counting { calls: &calls });
        assert!(validator.validate("hi").is_err());
        assert_eq!(calls.get(), 0);

        assert!(validator.validate("hello").is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_and_runtime_error_short_circuits() {
        let calls = Cell::new(0);
        let validator = and(Broken, Counting { calls: &calls });
        let failure = validator.validate("x").unwrap_err();
        assert!(failure.as_runtime().is_some());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_all_reports_first_failure() {
        let combined = and_all(vec![
            MinLength { min: 3 },
            MinLength { min: 5 },
            MinLength { min: 7 },
        ]);
        assert!(combined.validate("helloworld").is_ok());

        let failure = combined.validate("hell").unwrap_err();
        assert_eq!(failure.as_invalid().unwrap().message, "min 5");
    }
}
