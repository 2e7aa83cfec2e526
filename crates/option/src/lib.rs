//! # vkit-option
//!
//! An optional value with explicit presence tracking.
//!
//! [`Optional<T>`] holds zero or one value of `T`. It is built once through
//! [`Optional::present`] or [`Optional::absent`] and never changes afterwards.
//! Field validation in `vkit-validator` treats an absent optional as always
//! valid, which is the main reason this type exists next to [`Option`]:
//! request payloads decode "field not sent" and "field sent as null" into the
//! same absent state.
//!
//! ## Quick Start
//!
//! ```rust
//! use vkit_option::Optional;
//!
//! let name = Optional::present("alice");
//! assert!(name.is_present());
//! assert_eq!(name.get_or_default("anonymous"), "alice");
//!
//! let nick: Optional<&str> = Optional::absent();
//! assert_eq!(nick.get_or_compute(|| "generated"), "generated");
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: absent serializes as `null`, `present(v)` as `v`.

#[cfg(feature = "serde")]
mod serde_impl;

// ============================================================================
// OPTIONAL
// ============================================================================

/// A container holding zero or one value of `T`.
///
/// Two optionals are equal when both are absent, or both are present with
/// equal values. [`Default`] yields an absent optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    inner: Option<T>,
}

impl<T> Optional<T> {
    /// Wraps a value. The result is present.
    #[must_use]
    pub const fn present(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Creates an optional without a value.
    #[must_use]
    pub const fn absent() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if a value is held.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if no value is held.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the value together with its presence flag.
    ///
    /// When absent the value is `T::default()` and must not be treated as
    /// meaningful. Prefer [`as_option`](Self::as_option) when a borrow is
    /// enough.
    #[must_use]
    pub fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match &self.inner {
            Some(value) => (value.clone(), true),
            None => (T::default(), false),
        }
    }

    /// Borrows the value if present.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Returns the value, panicking if absent.
    ///
    /// Calling this on an absent optional is a contract violation by the
    /// caller, not a recoverable condition.
    ///
    /// # Panics
    ///
    /// Panics with `"unwrap of absent optional"` if no value is held.
    #[track_caller]
    pub fn get_or_panic(self) -> T {
        match self.inner {
            Some(value) => value,
            None => panic!("unwrap of absent optional"),
        }
    }

    /// Returns the value if present, otherwise `fallback`.
    pub fn get_or_default(self, fallback: T) -> T {
        self.inner.unwrap_or(fallback)
    }

    /// Returns the value if present, otherwise the result of `fallback`.
    ///
    /// `fallback` is only invoked when the optional is absent.
    pub fn get_or_compute<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.inner.unwrap_or_else(fallback)
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            inner: self.inner.as_ref(),
        }
    }

    /// Maps a present value, leaving an absent optional untouched.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            inner: self.inner.map(f),
        }
    }

    /// Converts into the standard library [`Option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.inner
    }
}

/// Shorthand for [`Optional::present`].
#[must_use]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::present(value)
}

/// Shorthand for [`Optional::absent`].
#[must_use]
pub const fn absent<T>() -> Optional<T> {
    Optional::absent()
}

// ============================================================================
// TESTS
// ============================================================================
