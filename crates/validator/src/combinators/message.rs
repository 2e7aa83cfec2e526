//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{RuleFailure, Validate};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the message (and optionally the code) of a rule's validation
/// error.
///
/// Runtime errors pass through untouched: they are addressed to operators
/// and keep their original text. Parameters and the field name of the
/// original error are preserved.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::prelude::*;
///
/// let validator = min_length(8).with_message("password is too short.");
///
/// let failure = validator.validate("short").unwrap_err();
/// let error = failure.as_invalid().unwrap();
/// assert_eq!(error.message, "password is too short.");
/// assert_eq!(error.code, "minLength.length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
    code: Option<String>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        self.inner.validate(input).map_err(|failure| match failure {
            RuleFailure::Invalid(mut error) => {
                error.message = Cow::Owned(self.message.clone());
                if let Some(code) = &self.code {
                    error.code = Cow::Owned(code.clone());
                }
                RuleFailure::Invalid(error)
            }
            runtime @ RuleFailure::Runtime(_) => runtime,
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuntimeError, ValidationError};

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), RuleFailure> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "min_length",
                    format!("Must be at least {} characters", self.min),
                )
                .with_param("min", self.min.to_string())
                .into())
            }
        }
    }

    struct Broken;

    impl Validate for Broken {
        type Input = str;

        fn validate(&self, _input: &str) -> Result<(), RuleFailure> {
            Err(RuntimeError::evaluation("broken", "lookup failed").into())
        }
    }

    #[test]
    fn test_with_message_success() {
        let validator = WithMessage::new(MinLength { min: 3 }, "Custom message");
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_with_message_replaces_message() {
        let validator = WithMessage::new(MinLength { min: 10 }, "Password too short");
        let failure = validator.validate("short").unwrap_err();

        let error = failure.as_invalid().unwrap();
        assert_eq!(error.message, "Password too short");
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("10"));
    }

    #[test]
    fn test_with_message_and_code() {
        let validator =
            WithMessage::new(MinLength { min: 10 }, "Password too short").with_code("password.short");
        let failure = validator.validate("short").unwrap_err();

        let error = failure.as_invalid().unwrap();
        assert_eq!(error.message, "Password too short");
        assert_eq!(error.code, "password.short");
    }

    #[test]
    fn test_runtime_error_passes_through() {
        let validator = with_message(Broken, "never shown");
        let failure = validator.validate("anything").unwrap_err();

        assert_eq!(
            failure.as_runtime(),
            Some(&RuntimeError::evaluation("broken", "lookup failed"))
        );
    }
}
