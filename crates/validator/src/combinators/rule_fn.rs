//! RULE FN - closures as rules
//!
//! Custom rules that need to report a [`RuntimeError`](crate::foundation::RuntimeError)
//! (a lookup that could not complete, a pattern loaded at runtime) do not
//! fit the `rule`/`error` shape of [`validator!`](crate::validator). A
//! closure returning [`RuleFailure`] covers them.

use std::marker::PhantomData;

use crate::foundation::{RuleFailure, Validate};

/// Adapts a closure into a rule.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::combinators::rule_fn;
/// use vkit_validator::foundation::{RuntimeError, Validate, ValidationError};
///
/// let reserved = rule_fn(|name: &str| match name {
///     "" => Err(RuntimeError::evaluation("reserved", "name lookup needs input").into()),
///     "admin" | "root" => Err(ValidationError::new("name.reserved", "is reserved.").into()),
///     _ => Ok(()),
/// });
///
/// assert!(reserved.validate("alice").is_ok());
/// assert!(reserved.validate("root").unwrap_err().is_invalid());
/// assert!(reserved.validate("").unwrap_err().as_runtime().is_some());
/// ```
pub struct RuleFn<F, T: ?Sized> {
    check: F,
    _input: PhantomData<fn(&T)>,
}

impl<F, T> RuleFn<F, T>
where
    F: Fn(&T) -> Result<(), RuleFailure>,
    T: ?Sized,
{
    pub fn new(check: F) -> Self {
        Self {
            check,
            _input: PhantomData,
        }
    }
}

impl<F, T> Clone for RuleFn<F, T>
where
    F: Clone,
    T: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
            _input: PhantomData,
        }
    }
}

impl<F, T: ?Sized> std::fmt::Debug for RuleFn<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleFn").finish_non_exhaustive()
    }
}

impl<F, T> Validate for RuleFn<F, T>
where
    F: Fn(&T) -> Result<(), RuleFailure>,
    T: ?Sized,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), RuleFailure> {
        (self.check)(input)
    }
}

/// Creates a [`RuleFn`] from a closure.
pub fn rule_fn<F, T>(check: F) -> RuleFn<F, T>
where
    F: Fn(&T) -> Result<(), RuleFailure>,
    T: ?Sized,
{
    RuleFn::new(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuntimeError, ValidateExt, ValidationError};

    fn even(value: &i64) -> Result<(), RuleFailure> {
        if value % 2 == 0 {
            Ok(())
        } else {
            Err(ValidationError::new("even", "must be even.").into())
        }
    }

    #[test]
    fn test_fn_item_as_rule() {
        let rule = rule_fn(even);
        assert!(rule.validate(&4).is_ok());
        assert_eq!(rule.validate(&3).unwrap_err().as_invalid().unwrap().code, "even");
    }

    #[test]
    fn test_closure_reports_runtime_error() {
        let rule = rule_fn(|_: &str| Err(RuntimeError::evaluation("remote", "timeout").into()));
        let failure = rule.validate("x").unwrap_err();
        assert!(matches!(
            failure.as_runtime(),
            Some(RuntimeError::Evaluation { rule, .. }) if rule == "remote"
        ));
    }

    #[test]
    fn test_composes_with_and() {
        let positive = rule_fn(|value: &i64| {
            if *value > 0 {
                Ok(())
            } else {
                Err(ValidationError::new("positive", "must be positive.").into())
            }
        });
        let rule = positive.and(rule_fn(even));
        assert!(rule.validate(&2).is_ok());
        assert_eq!(rule.validate(&-2).unwrap_err().as_invalid().unwrap().code, "positive");
        assert_eq!(rule.validate(&3).unwrap_err().as_invalid().unwrap().code, "even");
    }
}
