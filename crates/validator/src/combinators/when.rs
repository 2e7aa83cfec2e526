//! WHEN combinators - conditional validation
//!
//! - [`When`] runs its rules only when a predicate holds for the input.
//! - [`WhenNotEmpty`] runs its rules only when the input is not
//!   [blank](crate::foundation::Blank).
//!
//! In both cases a skipped input passes automatically.
//!
//! # Examples
//!
//! ```rust
//! use vkit_validator::prelude::*;
//!
//! // Only validate non-empty strings
//! let nickname = when_not_empty(min_length(3).and(max_length(12)));
//! assert!(nickname.validate("").is_ok());
//! assert!(nickname.validate("al").is_err());
//! assert!(nickname.validate("alice").is_ok());
//! ```

use crate::foundation::{Blank, RuleFailure, Validate};

// ============================================================================
// WHEN
// ============================================================================

/// Conditionally applies a rule based on a predicate.
///
/// If `condition` returns `false` the input passes without running the
/// rule. Compose several rules with [`and`](crate::foundation::ValidateExt::and)
/// or [`compose!`](crate::compose) to get ordered, first-failure evaluation.
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the guarded rule.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns a reference to the condition function.
    pub fn condition(&self) -> &C {
        &self.condition
    }

    /// Extracts the rule and the condition function.
    pub fn into_parts(self) -> (V, C) {
        (self.validator, self.condition)
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator from a predicate and the rules it guards.
///
/// ```rust
/// use vkit_validator::prelude::*;
///
/// let validator = when(|s: &str| s.starts_with("0x"), eth_address());
/// assert!(validator.validate("plain text").is_ok()); // skipped
/// assert!(validator.validate("0xabc").is_err()); // checked, too short
/// ```
pub fn when<C, V>(condition: C, validator: V) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

// ============================================================================
// WHEN NOT EMPTY
// ============================================================================

/// Applies a rule only when the input is not blank.
///
/// Strings are blank when empty and integers when zero. Types that use the
/// default [`Blank`] impl are never blank, so the rule always runs for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhenNotEmpty<V> {
    pub(crate) validator: V,
}

impl<V> WhenNotEmpty<V> {
    /// Creates a new `WhenNotEmpty` combinator.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Returns a reference to the guarded rule.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Extracts the guarded rule.
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<V> Validate for WhenNotEmpty<V>
where
    V: Validate,
    V::Input: Blank,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        if input.is_blank() {
            Ok(())
        } else {
            self.validator.validate(input)
        }
    }
}

/// Creates a `WhenNotEmpty` combinator.
pub fn when_not_empty<V>(validator: V) -> WhenNotEmpty<V>
where
    V: Validate,
    V::Input: Blank,
{
    WhenNotEmpty::new(validator)
}
