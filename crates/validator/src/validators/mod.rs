//! Built-in validators
//!
//! # Categories
//!
//! - **String**: [`NotEmpty`], [`MinLength`], [`MaxLength`], [`IsEmail`],
//!   [`MatchesRegex`], [`OneOf`], [`EthAddress`]
//! - **Numeric**: [`Min`], [`Max`]
//!
//! Conditional rules ([`When`](crate::combinators::When),
//! [`WhenNotEmpty`](crate::combinators::WhenNotEmpty)) live in
//! [`combinators`](crate::combinators).
//!
//! # Examples
//!
//! ```rust
//! use vkit_validator::prelude::*;
//!
//! let username = not_empty().and(min_length(3)).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//!
//! let age = min(18).and(max(130));
//! assert!(age.validate(&42).is_ok());
//! ```

mod address;
pub mod content;
pub mod eth_address;
pub mod length;
pub mod membership;
pub mod range;

// ============================================================================
// RE-EXPORTS: String validators
// ============================================================================

pub use content::{IsEmail, MatchesRegex, is_email, matches, matches_regex};
pub use eth_address::{EthAddress, eth_address};
pub use length::{LengthMode, MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use membership::{OneOf, one_of};

// ============================================================================
// RE-EXPORTS: Numeric validators
// ============================================================================

pub use range::{Max, Min, max, min};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_builtin_rules_are_send_sync() {
        assert_send_sync::<NotEmpty>();
        assert_send_sync::<MinLength>();
        assert_send_sync::<MaxLength>();
        assert_send_sync::<IsEmail>();
        assert_send_sync::<MatchesRegex>();
        assert_send_sync::<OneOf>();
        assert_send_sync::<EthAddress>();
        assert_send_sync::<Min<i64>>();
        assert_send_sync::<Max<f64>>();
    }

    #[test]
    fn test_rules_validate_across_threads() {
        let rule = std::sync::Arc::new(min_length(3));
        let handle = {
            let rule = std::sync::Arc::clone(&rule);
            std::thread::spawn(move || {
                use crate::foundation::Validate;
                rule.validate("abc").is_ok()
            })
        };
        assert!(handle.join().unwrap());
    }
}
