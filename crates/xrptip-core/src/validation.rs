//! # Validation Module
//!
//! Input validation utilities for xrptip.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web client forms                                             │
//! │  ├── Basic format checks (empty, starts with 'r')                      │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Address alphabet and length                                       │
//! │  ├── Destination tag range                                             │
//! │  └── Fee configuration invariants                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: REST backend / ledger                                        │
//! │  └── Address checksum, account existence                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are deliberately NOT validated here: the fee policy turns bad
//! amounts into the zero breakdown instead of an error.
//!
//! ## Usage
//! ```rust
//! use xrptip_core::validation::{validate_xrp_address, validate_destination_tag};
//!
//! assert!(validate_xrp_address("rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ").is_ok());
//! assert!(validate_destination_tag(Some("12345")).is_ok());
//! ```

use crate::error::ValidationError;
use crate::fees::FeeConfig;
use crate::money::{XrpAmount, MAX_XRP_DROPS};
use crate::types::PPM;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The base58 alphabet used by XRPL addresses (no `0`, `O`, `I`, `l`).
pub const XRPL_ALPHABET: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Shortest classic address length.
pub const MIN_ADDRESS_LEN: usize = 25;

/// Longest classic address length.
pub const MAX_ADDRESS_LEN: usize = 35;

// =============================================================================
// Ledger Identifiers
// =============================================================================

/// Validates a classic XRPL address.
///
/// ## Rules
/// - Must not be empty
/// - Must start with `r`
/// - Must be 25 to 35 characters
/// - Must only use the XRPL base58 alphabet
///
/// The checksum is not verified here; the backend does that when the
/// creator saves the address.
///
/// ## Example
/// ```rust
/// use xrptip_core::validation::validate_xrp_address;
///
/// assert!(validate_xrp_address("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh").is_ok());
/// assert!(validate_xrp_address("").is_err());
/// assert!(validate_xrp_address("0x52908400098527886E0F7030069857D2E4169EE7").is_err());
/// ```
pub fn validate_xrp_address(address: &str) -> ValidationResult<()> {
    if address.is_empty() {
        return Err(ValidationError::Required {
            field: "address".to_string(),
        });
    }

    if !address.starts_with('r') {
        return Err(ValidationError::InvalidFormat {
            field: "address".to_string(),
            reason: "must start with 'r'".to_string(),
        });
    }

    if address.len() < MIN_ADDRESS_LEN {
        return Err(ValidationError::TooShort {
            field: "address".to_string(),
            min: MIN_ADDRESS_LEN,
        });
    }

    if address.len() > MAX_ADDRESS_LEN {
        return Err(ValidationError::TooLong {
            field: "address".to_string(),
            max: MAX_ADDRESS_LEN,
        });
    }

    if let Some(bad) = address.chars().find(|c| !XRPL_ALPHABET.contains(*c)) {
        return Err(ValidationError::InvalidFormat {
            field: "address".to_string(),
            reason: format!("'{}' is not a valid address character", bad),
        });
    }

    Ok(())
}

/// Validates an optional destination tag.
///
/// ## Rules
/// - `None` is valid (no tag)
/// - Otherwise only ASCII digits, fitting in a 32-bit unsigned integer
///
/// ## Example
/// ```rust
/// use xrptip_core::validation::validate_destination_tag;
///
/// assert!(validate_destination_tag(None).is_ok());
/// assert!(validate_destination_tag(Some("4294967295")).is_ok());
/// assert!(validate_destination_tag(Some("4294967296")).is_err());
/// assert!(validate_destination_tag(Some("12&x=1")).is_err());
/// ```
pub fn validate_destination_tag(tag: Option<&str>) -> ValidationResult<()> {
    let Some(tag) = tag else {
        return Ok(());
    };

    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "destination_tag".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    tag.parse::<u32>().map_err(|_| ValidationError::OutOfRange {
        field: "destination_tag".to_string(),
        min: "0".to_string(),
        max: u32::MAX.to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Creator Identifiers
// =============================================================================

/// Validates a creator username as it appears in public URLs.
///
/// ## Rules
/// - Must not be empty
/// - ASCII letters, digits, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use xrptip_core::validation::validate_username;
///
/// assert!(validate_username("satoshi_fan-42").is_ok());
/// assert!(validate_username("").is_err());
/// assert!(validate_username("has space").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Fee Configuration
// =============================================================================

/// Validates a fee configuration.
///
/// ## Rules
/// - Fee rate below 100%
/// - Platform wallet is a valid address
/// - Currency symbol is not empty
/// - `max_fee`, when set, is not below `min_fee`
/// - Every amount fits within the total XRP supply
///
/// Non-negativity of the amounts is guaranteed by `XrpAmount` itself.
pub fn validate_fee_config(config: &FeeConfig) -> ValidationResult<()> {
    if config.fee_rate.ppm() >= PPM {
        return Err(ValidationError::OutOfRange {
            field: "fee_percentage".to_string(),
            min: "0".to_string(),
            max: "1 (exclusive)".to_string(),
        });
    }

    validate_xrp_address(&config.platform_wallet_address).map_err(|err| match err {
        ValidationError::Required { .. } => ValidationError::Required {
            field: "platform_wallet_address".to_string(),
        },
        other => other,
    })?;

    if config.currency_symbol.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency_symbol".to_string(),
        });
    }

    validate_supply_bound("min_amount_for_fees", config.min_amount_for_fees)?;
    validate_supply_bound("min_fee", config.min_fee)?;
    if let Some(max_fee) = config.max_fee {
        validate_supply_bound("max_fee", max_fee)?;
    }

    if let Some(max_fee) = config.max_fee {
        if max_fee < config.min_fee {
            return Err(ValidationError::LessThan {
                field: "max_fee".to_string(),
                other: "min_fee".to_string(),
            });
        }
    }

    Ok(())
}

/// Keeps `amount + fee` representable for any accepted tip.
fn validate_supply_bound(field: &str, amount: XrpAmount) -> ValidationResult<()> {
    if amount.drops() > MAX_XRP_DROPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: XrpAmount::from_drops(MAX_XRP_DROPS).to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::XrpAmount;
    use crate::types::FeeRate;

    #[test]
    fn test_validate_xrp_address() {
        assert!(validate_xrp_address("rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ").is_ok());
        assert!(validate_xrp_address("rrrrrrrrrrrrrrrrrrrrrhoLvTp").is_ok());

        assert_eq!(
            validate_xrp_address(""),
            Err(ValidationError::Required {
                field: "address".to_string()
            })
        );
        assert!(matches!(
            validate_xrp_address("rShort"),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(matches!(
            validate_xrp_address(&format!("r{}", "p".repeat(40))),
            Err(ValidationError::TooLong { .. })
        ));
        // 'l' and '0' are not in the XRPL alphabet
        assert!(matches!(
            validate_xrp_address("rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCl"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_xrp_address("rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiC0"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_xrp_address("XVLhHMPHU98es4dbozjVtdWzVrDjtV5fdx1mHp98tDMoQXb"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_destination_tag() {
        assert!(validate_destination_tag(None).is_ok());
        assert!(validate_destination_tag(Some("0")).is_ok());
        assert!(validate_destination_tag(Some("12345")).is_ok());

        assert!(validate_destination_tag(Some("")).is_err());
        assert!(validate_destination_tag(Some("-1")).is_err());
        assert!(validate_destination_tag(Some("1.5")).is_err());
        assert!(matches!(
            validate_destination_tag(Some("99999999999")),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("A_b-9").is_ok());

        assert!(validate_username("   ").is_err());
        assert!(validate_username("alice/bob").is_err());
        assert!(validate_username("élodie").is_err());
    }

    #[test]
    fn test_validate_fee_config() {
        assert!(validate_fee_config(&FeeConfig::default()).is_ok());

        let mut config = FeeConfig::default();
        config.fee_rate = FeeRate::from_ppm(PPM);
        assert!(matches!(
            validate_fee_config(&config),
            Err(ValidationError::OutOfRange { .. })
        ));

        let mut config = FeeConfig::default();
        config.max_fee = Some(XrpAmount::from_cents(5));
        assert!(matches!(
            validate_fee_config(&config),
            Err(ValidationError::LessThan { .. })
        ));

        let mut config = FeeConfig::default();
        config.max_fee = Some(config.min_fee);
        assert!(validate_fee_config(&config).is_ok());

        let mut config = FeeConfig::default();
        config.platform_wallet_address = String::new();
        assert_eq!(
            validate_fee_config(&config),
            Err(ValidationError::Required {
                field: "platform_wallet_address".to_string()
            })
        );

        let mut config = FeeConfig::default();
        config.currency_symbol = " ".to_string();
        assert!(validate_fee_config(&config).is_err());
    }

    #[test]
    fn test_validate_fee_config_supply_bound() {
        let mut config = FeeConfig::default();
        config.min_fee = XrpAmount::from_drops(u64::MAX - 1);
        config.max_fee = None;
        assert_eq!(
            validate_fee_config(&config),
            Err(ValidationError::OutOfRange {
                field: "min_fee".to_string(),
                min: "0".to_string(),
                max: "100000000000".to_string(),
            })
        );

        let mut config = FeeConfig::default();
        config.max_fee = Some(XrpAmount::from_drops(MAX_XRP_DROPS + 1));
        assert!(matches!(
            validate_fee_config(&config),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "max_fee"
        ));

        let mut config = FeeConfig::default();
        config.min_amount_for_fees = XrpAmount::from_drops(u64::MAX);
        assert!(validate_fee_config(&config).is_err());

        let mut config = FeeConfig::default();
        config.max_fee = Some(XrpAmount::from_drops(MAX_XRP_DROPS));
        assert!(validate_fee_config(&config).is_ok());
    }
}
