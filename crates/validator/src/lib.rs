//! # vkit-validator
//!
//! Composable field validation built on [`vkit_option::Optional`].
//!
//! A rule is a pure function from a value to one of three outcomes: the value
//! passes, the value breaks the rule ([`ValidationError`](foundation::ValidationError)),
//! or the rule could not be evaluated ([`RuntimeError`](foundation::RuntimeError)).
//! Rules run per field in order with first-failure short-circuiting, and the
//! per-field results are aggregated into a report keyed by field name.
//!
//! ## Quick Start
//!
//! ```rust
//! use vkit_option::Optional;
//! use vkit_validator::prelude::*;
//!
//! let nickname: Optional<String> = Optional::absent();
//!
//! let report = aggregate([
//!     validate_field("name", "abc", &[&max_length(2), &min_length(50)]),
//!     validate_field("age", &33_i64, &[&max(2_i64), &min(1_i64)]),
//!     validate_optional_field("nickname", &nickname, &[&min_length(3)]),
//! ])
//! .expect("built-in rules never fail at runtime");
//!
//! assert_eq!(report.len(), 2);
//! assert_eq!(report.get("name").unwrap().code, "maxLength.length");
//! assert_eq!(report.get("age").unwrap().code, "max.invalid");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! [`rule_fn`](combinators::rule_fn) for closures, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **String**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`IsEmail`](validators::IsEmail),
//!   [`OneOf`](validators::OneOf), [`MatchesRegex`](validators::MatchesRegex),
//!   [`EthAddress`](validators::EthAddress)
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max)
//! - **Conditional**: [`When`](combinators::When), [`WhenNotEmpty`](combinators::WhenNotEmpty),
//!   [`IfPresent`](combinators::IfPresent)
//!
//! ## Feature flags
//!
//! - `serde` (default): `Serialize` for [`ValidationError`](foundation::ValidationError)
//!   and [`ValidationAggregate`](aggregate::ValidationAggregate), and the
//!   `vkit-option` serde adapter.

// ValidationError is returned by value from every rule; boxing it would add
// indirection to every validation call.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<When<...>, ...>) produces complex types.
#![allow(clippy::type_complexity)]

pub mod aggregate;
pub mod combinators;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
