//! Prelude module for convenient imports.
//!
//! Provides a single `use vkit_validator::prelude::*;` import that brings
//! in the traits, error types, validators, combinators, and the field and
//! aggregation entry points.
//!
//! # Examples
//!
//! ```rust
//! use vkit_validator::prelude::*;
//!
//! let username = when_not_empty(min_length(3).and(max_length(20)));
//! assert!(username.validate("").is_ok());
//! assert!(username.validate("al").is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Blank, RuleFailure, RuleResult, RuntimeError, Validate, ValidateExt, ValidationError,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, AndAll, IfPresent, RuleFn, When, WhenNotEmpty, WithMessage, and, and_all, if_present,
    rule_fn, when, when_not_empty, with_message,
};

// ============================================================================
// FIELDS: Per-field validation and aggregation
// ============================================================================

pub use crate::aggregate::{ValidationAggregate, aggregate};
pub use crate::field::{
    FieldOutcome, FieldValidationResult, validate_field, validate_optional_field,
};
