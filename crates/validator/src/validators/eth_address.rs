//! Ethereum address validator.

use crate::foundation::{RuleFailure, Validate, ValidationError};

const PREFIX: &str = "0x";
const ADDRESS_LEN: usize = 42;

// ============================================================================
// ETH ADDRESS VALIDATOR
// ============================================================================

/// Validates a hex-encoded Ethereum address: `0x` followed by 40 hex digits.
///
/// Checks run in a fixed order and only the first failing one is reported:
///
/// 1. `eth.0x`: the `0x` prefix is missing
/// 2. `eth.length`: the address is not 42 characters long
/// 3. `eth.hex`: a character after the prefix is not a hex digit
///
/// Mixed case is accepted; the checksum encoding is not verified.
///
/// # Examples
///
/// ```
/// use vkit_validator::validators::eth_address;
/// use vkit_validator::foundation::Validate;
///
/// let validator = eth_address();
/// assert!(validator.validate("0x32Be343B94f860124dC4fEe278FDCBD38C102D88").is_ok());
///
/// let failure = validator.validate("0xbanana").unwrap_err();
/// assert_eq!(failure.as_invalid().unwrap().code, "eth.length");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EthAddress;

impl EthAddress {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for EthAddress {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), RuleFailure> {
        let Some(digits) = input.strip_prefix(PREFIX) else {
            return Err(ValidationError::new("eth.0x", "must start with '0x'.").into());
        };

        if input.len() != ADDRESS_LEN {
            return Err(ValidationError::new("eth.length", "must be 42 characters long.")
                .with_param("actual", input.len().to_string())
                .into());
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::new(
                "eth.hex",
                "may only contain hexadecimal characters.",
            )
            .into());
        }

        Ok(())
    }
}

/// Creates an Ethereum address validator.
#[must_use]
pub const fn eth_address() -> EthAddress {
    EthAddress
}
