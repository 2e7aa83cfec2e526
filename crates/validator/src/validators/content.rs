//! String content validators
//!
//! Email addresses and caller-supplied patterns.

use std::sync::LazyLock;

use regex::Regex;

use super::address;
use crate::foundation::{RuntimeError, ValidationError};

// Addresses must name a dotted (public) domain: `abc@example` is rejected.
static PUBLIC_DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^@]*\.").unwrap());

fn is_email_address(input: &str) -> bool {
    address::is_single_mailbox(input) && PUBLIC_DOMAIN_REGEX.is_match(input)
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Accepts a single RFC 5322 mailbox: a bare address (`abc@example.com`),
    /// one with a display name (`Abc <abc@example.com>`), quoted local parts
    /// and UTF-8 included. Something after the `@` must contain a dot.
    pub IsEmail for str;
    rule(input) { is_email_address(input) }
    error(input) { ValidationError::new("isEmail.invalid", "must be a valid email address.") }
    fn is_email();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The pattern is not anchored implicitly: add `^`/`$` for a full match.
    pub MatchesRegex { pattern: Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("regex.invalid", "does not match expected pattern.")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> RuntimeError {
        Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|source| RuntimeError::invalid_pattern(pattern, source))
    }
    fn matches_regex(pattern: &str) -> RuntimeError;
}

impl MatchesRegex {
    /// Wraps an already compiled pattern.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }
}

/// Creates a [`MatchesRegex`] from a compiled pattern.
#[must_use]
pub fn matches(pattern: Regex) -> MatchesRegex {
    MatchesRegex::from_regex(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
