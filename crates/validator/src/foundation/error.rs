//! Error types for rule evaluation
//!
//! Two disjoint kinds flow out of a rule:
//!
//! - [`ValidationError`]: the input breaks a business rule. Recoverable and
//!   meant to be shown to the end user verbatim.
//! - [`RuntimeError`]: the rule itself could not be evaluated (for example a
//!   malformed pattern). Aborts the validation pass and is meant for the
//!   operator, not the end user.
//!
//! [`RuleFailure`] carries exactly one of them for a single evaluation.
//!
//! String fields of [`ValidationError`] use `Cow<'static, str>` so static
//! codes and messages never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A data-level validation failure.
///
/// # Examples
///
/// ```rust
/// use vkit_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("minLength.length", "must be minimum 5 characters long.")
///     .with_field("username")
///     .with_param("min", "5");
///
/// assert_eq!(error.param("min"), Some("5"));
/// assert_eq!(error.field.as_deref(), Some("username"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Stable code for programmatic handling.
    ///
    /// Examples: "notEmpty.empty", "eth.hex", "max.invalid"
    pub code: Cow<'static, str>,

    /// Human-readable message with arguments already substituted.
    pub message: Cow<'static, str>,

    /// Field the error was reported for, set by field validation.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub field: Option<Cow<'static, str>>,

    /// Arguments substituted into `message`, in insertion order.
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Vec::is_empty",
            serialize_with = "serialize_params"
        )
    )]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// ```rust
    /// use vkit_validator::foundation::ValidationError;
    ///
    /// // Static strings, no allocation:
    /// let error = ValidationError::new("notEmpty.empty", "may not be empty.");
    ///
    /// // Dynamic strings allocate only when needed:
    /// let error = ValidationError::new("min.invalid", format!("must be at least {}.", 3));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Records an argument that was substituted into the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(feature = "serde")]
fn serialize_params<S>(
    params: &[(Cow<'static, str>, Cow<'static, str>)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(params.len()))?;
    for (key, value) in params {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

// ============================================================================
// RUNTIME ERROR
// ============================================================================

/// An infrastructure failure: the rule could not be evaluated at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RuntimeError {
    /// A pattern handed to a rule could not be compiled.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule could not evaluate its input.
    #[error("rule `{rule}` could not be evaluated: {message}")]
    Evaluation {
        rule: Cow<'static, str>,
        message: String,
    },
}

impl RuntimeError {
    /// Creates an [`Evaluation`](Self::Evaluation) error.
    pub fn evaluation(rule: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self::Evaluation {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Creates an [`InvalidPattern`](Self::InvalidPattern) error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

// ============================================================================
// RULE FAILURE
// ============================================================================

/// The failing outcome of a single rule evaluation.
///
/// A rule returns `Ok(())`, or exactly one of these variants, never both.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleFailure {
    /// The input failed the rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The rule could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl RuleFailure {
    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::Runtime(_) => None,
        }
    }

    /// Returns the runtime error, if this is one.
    #[must_use]
    pub fn as_runtime(&self) -> Option<&RuntimeError> {
        match self {
            Self::Runtime(error) => Some(error),
            Self::Invalid(_) => None,
        }
    }

    /// Returns true for a validation failure.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.field, None);
    }

    #[test]
    fn test_error_with_field() {
        let error = ValidationError::new("notEmpty.empty", "may not be empty.").with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
        assert_eq!(error.to_string(), "[email] notEmpty.empty: may not be empty.");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min.invalid", "must be at least 5.")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("notEmpty.empty", "may not be empty.");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = RuntimeError::invalid_pattern("(", source);
        assert!(error.to_string().starts_with("invalid pattern `(`"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_rule_failure_from_conversions() {
        let invalid: RuleFailure = ValidationError::new("a", "b").into();
        assert!(invalid.is_invalid());
        assert_eq!(invalid.as_invalid().map(|e| e.code.as_ref()), Some("a"));
        assert!(invalid.as_runtime().is_none());

        let runtime: RuleFailure = RuntimeError::evaluation("probe", "backend down").into();
        assert!(!runtime.is_invalid());
        assert_eq!(
            runtime.to_string(),
            "rule `probe` could not be evaluated: backend down"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_shape() {
        let error = ValidationError::new("max.invalid", "must not exceed 2.").with_param("max", "2");
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({
                "code": "max.invalid",
                "message": "must not exceed 2.",
                "params": { "max": "2" }
            })
        );
    }
}
