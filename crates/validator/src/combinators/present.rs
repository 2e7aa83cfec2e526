//! IF PRESENT combinator - validates `Optional` values

use std::borrow::Borrow;
use std::marker::PhantomData;

use vkit_option::Optional;

use crate::foundation::{RuleFailure, Validate};

/// Lifts a rule to an [`Optional`] input.
///
/// Absent input passes without running the rule. Present input is borrowed
/// as the rule's input type, so an `Optional<String>` works with `str`
/// rules.
///
/// # Examples
///
/// ```rust
/// use vkit_option::Optional;
/// use vkit_validator::prelude::*;
///
/// let validator = min_length(3).if_present::<String>();
/// assert!(validator.validate(&Optional::absent()).is_ok());
/// assert!(validator.validate(&Optional::present("hello".to_string())).is_ok());
/// assert!(validator.validate(&Optional::present("hi".to_string())).is_err());
/// ```
pub struct IfPresent<V, T> {
    pub(crate) inner: V,
    _input: PhantomData<fn(&T)>,
}

impl<V, T> IfPresent<V, T> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _input: PhantomData,
        }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Clone for IfPresent<V, T>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<V, T> std::fmt::Debug for IfPresent<V, T>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IfPresent")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<V, T> Validate for IfPresent<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    type Input = Optional<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), RuleFailure> {
        match input.as_option() {
            None => Ok(()),
            Some(value) => self.inner.validate(value.borrow()),
        }
    }
}

/// Creates an `IfPresent` combinator.
pub fn if_present<V, T>(validator: V) -> IfPresent<V, T>
where
    V: Validate,
    T: Borrow<V::Input>,
{
    IfPresent::new(validator)
}
