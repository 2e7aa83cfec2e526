//! Core validation types and traits
//!
//! This module contains the building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Blank`]
//! - **Errors**: [`ValidationError`], [`RuntimeError`], [`RuleFailure`]
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Rules are generic over their input type, so a string rule cannot be
//! handed an integer field:
//!
//! ```rust,ignore
//! impl Validate for MinLength {
//!     type Input = str;
//!     fn validate(&self, input: &str) -> Result<(), RuleFailure> { /* ... */ }
//! }
//! ```
//!
//! ## 2. Composition
//!
//! Rules compose in order; the first failure wins:
//!
//! ```rust,ignore
//! let validator = not_empty().and(max_length(20));
//! ```
//!
//! ## 3. Two failure kinds
//!
//! A rule either rejects the input ([`ValidationError`]) or cannot evaluate
//! it at all ([`RuntimeError`]). The second kind aborts the whole pass.

pub mod blank;
pub mod error;
pub mod traits;

pub use blank::Blank;
pub use error::{RuleFailure, RuntimeError, ValidationError};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the validator core.
pub mod prelude {
    pub use super::{Blank, RuleFailure, RuntimeError, Validate, ValidateExt, ValidationError};
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates `validators` in order against `value` and returns the first
/// failure.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::foundation::{Validate, validate_with_all};
/// use vkit_validator::validators::{max_length, min_length};
///
/// let rules: &[&dyn Validate<Input = str>] = &[&min_length(3), &max_length(10)];
/// assert!(validate_with_all("hello", rules).is_ok());
/// assert!(validate_with_all("hi", rules).is_err());
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), RuleFailure>
where
    V: Validate + ?Sized,
{
    for validator in validators {
        validator.validate(value)?;
    }
    Ok(())
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The result of evaluating a single rule.
pub type RuleResult = Result<(), RuleFailure>;

// ============================================================================
// TESTS
// ============================================================================
