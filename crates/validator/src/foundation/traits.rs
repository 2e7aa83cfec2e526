//! Core traits for the validation system
//!
//! This module defines the trait every rule implements and the extension
//! trait that adds the composition methods.

use crate::foundation::RuleFailure;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validation rule implements.
///
/// A rule is a pure function from `&Input` to an outcome. It captures its
/// parameters (a bound, a pattern, an allowed set) at construction and never
/// mutates them, so evaluating it twice on the same input gives the same
/// answer.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for `str`)
///
/// # Examples
///
/// ```rust
/// use vkit_validator::foundation::{RuleFailure, Validate, ValidationError};
///
/// struct StartsUpper;
///
/// impl Validate for StartsUpper {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), RuleFailure> {
///         if input.chars().next().is_some_and(char::is_uppercase) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("upper.first", "must start with an upper-case letter.").into())
///         }
///     }
/// }
///
/// assert!(StartsUpper.validate("Alice").is_ok());
/// assert!(StartsUpper.validate("alice").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the input passes
    /// * `Err(RuleFailure::Invalid(_))` if the input breaks the rule
    /// * `Err(RuleFailure::Runtime(_))` if the rule could not be evaluated
    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure>;
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        (**self).validate(input)
    }
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::prelude::*;
///
/// let username = min_length(3).and(max_length(20));
/// assert!(username.validate("alice").is_ok());
/// assert!(username.validate("al").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs `self`, then `other`. The first failure wins.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Runs the rule only when `condition` returns `true`.
    ///
    /// ```rust
    /// use vkit_validator::prelude::*;
    ///
    /// let validator = min_length(10).when(|s: &str| s.starts_with("long"));
    /// assert!(validator.validate("longstring123").is_ok());
    /// assert!(validator.validate("long").is_err());
    /// assert!(validator.validate("short").is_ok());
    /// ```
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Runs the rule only when the input is not blank.
    fn when_not_empty(self) -> WhenNotEmpty<Self>
    where
        Self::Input: Blank,
    {
        WhenNotEmpty::new(self)
    }

    /// Lifts the rule to an [`Optional<T>`](vkit_option::Optional) input
    /// that passes when absent. `T` is borrowed as the rule's input.
    fn if_present<T>(self) -> IfPresent<Self, T>
    where
        T: std::borrow::Borrow<Self::Input>,
    {
        IfPresent::new(self)
    }

    /// Replaces the message of any validation error the rule reports.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

use crate::foundation::Blank;

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::present::IfPresent;
pub use crate::combinators::when::{When, WhenNotEmpty};

// ============================================================================
// TESTS
// ============================================================================
