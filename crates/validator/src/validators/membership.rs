//! Set membership validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is one of a fixed set of values.
    ///
    /// Comparison is exact: no trimming, no case folding.
    ///
    /// # Examples
    ///
    /// ```
    /// use vkit_validator::validators::one_of;
    /// use vkit_validator::foundation::Validate;
    ///
    /// let validator = one_of(["draft", "published"]);
    /// assert!(validator.validate("draft").is_ok());
    /// assert!(validator.validate("Draft").is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub OneOf { allowed: Vec<String> } for str;
    rule(self, input) { self.allowed.iter().any(|value| value == input) }
    error(self, input) {
        let joined = self.allowed.join(", ");
        ValidationError::new("oneOf.notFound", format!("is not one of {joined}."))
            .with_param("allowed", joined)
    }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}
