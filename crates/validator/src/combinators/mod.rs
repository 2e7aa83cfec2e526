//! Combinators for composing rules
//!
//! - [`And`] / [`AndAll`]: ordered conjunction, first failure wins
//! - [`When`] / [`WhenNotEmpty`]: conditional evaluation
//! - [`IfPresent`]: rules over [`Optional`](vkit_option::Optional) values
//! - [`WithMessage`]: replace the reported message
//! - [`RuleFn`]: closures as rules
//!
//! Every combinator is also reachable as a method on
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod message;
pub mod present;
pub mod rule_fn;
pub mod when;

pub use and::{And, AndAll, and, and_all};
pub use message::{WithMessage, with_message};
pub use present::{IfPresent, if_present};
pub use rule_fn::{RuleFn, rule_fn};
pub use when::{When, WhenNotEmpty, when, when_not_empty};
