//! # Fee Policy
//!
//! Turns a requested tip into what the supporter pays and how it splits.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount (form input)                                                    │
//! │       │                                                                 │
//! │       ├── NaN / ≤ 0 / empty ─────────────► zero breakdown (not an error)│
//! │       │                                                                 │
//! │       ├── < min_amount_for_fees ─────────► fee = 0                      │
//! │       │                                                                 │
//! │       └── otherwise                                                     │
//! │             raw = amount × fee_rate                                     │
//! │             raw < min_fee  → min_fee                                    │
//! │             raw > max_fee  → max_fee   (only if a ceiling is set)       │
//! │             round half up to 0.01 XRP                                   │
//! │             total = amount + fee                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use xrptip_core::fees::FeePolicy;
//! use xrptip_core::money::XrpAmount;
//!
//! let policy = FeePolicy::default(); // 5%, 0.1 XRP floor, no ceiling
//!
//! let breakdown = policy.calculate_fees(5.0);
//! assert_eq!(breakdown.fee, XrpAmount::from_cents(25));
//! assert_eq!(breakdown.total.to_string(), "5.25");
//!
//! // Partial form input never fails
//! assert!(!policy.calculate_fees_str("").is_payable());
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::display::format_fee_breakdown;
use crate::error::CoreResult;
use crate::money::{XrpAmount, DROPS_PER_CENT};
use crate::types::{FeeBreakdown, FeeRate, FormattedFeeBreakdown, PaymentRequest, PPM};
use crate::validation::{validate_fee_config, ValidationResult};
use crate::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_PLATFORM_WALLET};

/// One cent of XRP in the `drops × PPM` scale the fee is computed in.
const SCALED_CENT: u128 = DROPS_PER_CENT as u128 * PPM as u128;

// =============================================================================
// Fee Config
// =============================================================================

/// Platform fee economics.
///
/// Immutable once a [`FeePolicy`] is built from it. Operators tune these
/// through configuration, never through code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    /// Fee as a rate of the tip amount.
    pub fee_rate: FeeRate,

    /// Intermediary wallet every payment is sent to. The backend forwards
    /// the creator's share from there.
    pub platform_wallet_address: String,

    /// Tips below this pay no fee.
    pub min_amount_for_fees: XrpAmount,

    /// Smallest fee charged once fees apply.
    pub min_fee: XrpAmount,

    /// Largest fee charged. `None` means no ceiling.
    pub max_fee: Option<XrpAmount>,

    /// Suffix used when displaying amounts.
    pub currency_symbol: String,
}

impl Default for FeeConfig {
    /// Production economics: 5% fee, fees from 1 XRP, 0.1 XRP floor, no
    /// ceiling.
    fn default() -> Self {
        FeeConfig {
            fee_rate: FeeRate::from_ppm(50_000),
            platform_wallet_address: DEFAULT_PLATFORM_WALLET.to_string(),
            min_amount_for_fees: XrpAmount::from_xrp(1),
            min_fee: XrpAmount::from_cents(10),
            max_fee: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

// =============================================================================
// Fee Policy
// =============================================================================

/// Computes fee breakdowns under a validated [`FeeConfig`].
///
/// Every method is pure: the same amount under the same config always gives
/// the same breakdown, with no floating point past the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeePolicy {
    config: FeeConfig,
}

impl FeePolicy {
    /// Creates a policy, rejecting configs that break the fee invariants.
    pub fn new(config: FeeConfig) -> ValidationResult<Self> {
        validate_fee_config(&config)?;
        Ok(FeePolicy { config })
    }

    /// Returns the config this policy was built with.
    #[inline]
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    /// Calculates the breakdown for a numeric amount in XRP.
    ///
    /// NaN, infinities and non-positive values give the zero breakdown.
    pub fn calculate_fees(&self, amount: f64) -> FeeBreakdown {
        match XrpAmount::from_xrp_f64(amount) {
            Some(amount) => self.calculate_for(amount),
            None => FeeBreakdown::zero(),
        }
    }

    /// Calculates the breakdown for raw form input such as `"12.5"`.
    ///
    /// Empty or unparseable text gives the zero breakdown.
    pub fn calculate_fees_str(&self, input: &str) -> FeeBreakdown {
        match XrpAmount::parse_xrp(input) {
            Some(amount) => self.calculate_for(amount),
            None => FeeBreakdown::zero(),
        }
    }

    /// Calculates the breakdown for an exact amount.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::fees::FeePolicy;
    /// use xrptip_core::money::XrpAmount;
    ///
    /// let policy = FeePolicy::default();
    ///
    /// // Below the 1 XRP threshold: no fee
    /// let small = policy.calculate_for(XrpAmount::from_cents(50));
    /// assert!(!small.has_fee());
    /// assert_eq!(small.total, XrpAmount::from_cents(50));
    ///
    /// // 5% of 1 XRP is 0.05, lifted to the 0.1 floor
    /// let one = policy.calculate_for(XrpAmount::from_xrp(1));
    /// assert_eq!(one.fee, XrpAmount::from_cents(10));
    /// ```
    pub fn calculate_for(&self, amount: XrpAmount) -> FeeBreakdown {
        if amount.is_zero() {
            return FeeBreakdown::zero();
        }

        if amount < self.config.min_amount_for_fees {
            return FeeBreakdown::with_fee(amount, XrpAmount::zero());
        }

        FeeBreakdown::with_fee(amount, self.fee_for(amount))
    }

    /// Renders a breakdown with this policy's rate and currency symbol.
    pub fn format(&self, breakdown: &FeeBreakdown) -> FormattedFeeBreakdown {
        format_fee_breakdown(
            breakdown,
            self.config.fee_rate,
            &self.config.currency_symbol,
        )
    }

    /// Builds the request that pays `breakdown.total` into the platform
    /// wallet.
    pub fn payment_request(
        &self,
        breakdown: &FeeBreakdown,
        destination_tag: Option<&str>,
    ) -> CoreResult<PaymentRequest> {
        PaymentRequest::new(
            &self.config.platform_wallet_address,
            breakdown.total,
            destination_tag,
        )
    }

    /// Clamped, cent-rounded fee for an amount at or above the threshold.
    ///
    /// Works in `drops × PPM` so the rate multiplication is exact; the
    /// comparison against floor and ceiling happens before rounding.
    fn fee_for(&self, amount: XrpAmount) -> XrpAmount {
        let raw = amount.drops() as u128 * self.config.fee_rate.ppm() as u128;
        let floor = self.config.min_fee.drops() as u128 * PPM as u128;

        let clamped = if raw < floor {
            floor
        } else {
            match self.config.max_fee {
                Some(max_fee) => raw.min(max_fee.drops() as u128 * PPM as u128),
                None => raw,
            }
        };

        let cents = (clamped + SCALED_CENT / 2) / SCALED_CENT;
        XrpAmount::from_drops((cents * DROPS_PER_CENT as u128) as u64)
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        FeePolicy {
            config: FeeConfig::default(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::MAX_XRP_DROPS;

    fn policy_with(
        ppm: u32,
        threshold: XrpAmount,
        min_fee: XrpAmount,
        max_fee: Option<XrpAmount>,
    ) -> FeePolicy {
        FeePolicy::new(FeeConfig {
            fee_rate: FeeRate::from_ppm(ppm),
            min_amount_for_fees: threshold,
            min_fee,
            max_fee,
            ..FeeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_policy_scenarios() {
        let policy = FeePolicy::default();

        let five = policy.calculate_fees(5.0);
        assert_eq!(five.fee, XrpAmount::from_cents(25));
        assert_eq!(five.total, XrpAmount::from_cents(525));

        let half = policy.calculate_fees(0.5);
        assert_eq!(half.fee, XrpAmount::zero());
        assert_eq!(half.total, XrpAmount::from_cents(50));
        assert_eq!(half.platform_amount, XrpAmount::zero());
        assert_eq!(half.creator_amount, XrpAmount::from_cents(50));

        let one = policy.calculate_fees(1.0);
        assert_eq!(one.fee, XrpAmount::from_cents(10));
        assert_eq!(one.total, XrpAmount::from_cents(110));

        let hundred = policy.calculate_fees(100.0);
        assert_eq!(hundred.fee, XrpAmount::from_xrp(5));
        assert_eq!(hundred.total, XrpAmount::from_xrp(105));
    }

    #[test]
    fn test_invalid_amounts_give_zero_breakdown() {
        let policy = FeePolicy::default();

        for amount in [0.0, -0.0, -1.0, -100.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(policy.calculate_fees(amount), FeeBreakdown::zero());
        }

        for input in ["", "   ", "abc", "-5", "1,5", "5 XRP", "NaN"] {
            assert_eq!(policy.calculate_fees_str(input), FeeBreakdown::zero());
        }

        // Rounds to zero drops
        assert_eq!(policy.calculate_fees(0.0000001), FeeBreakdown::zero());
    }

    #[test]
    fn test_form_input_matches_numeric_input() {
        let policy = FeePolicy::default();
        assert_eq!(policy.calculate_fees_str(" 5 "), policy.calculate_fees(5.0));
        assert_eq!(policy.calculate_fees_str("12.34"), policy.calculate_fees(12.34));
    }

    #[test]
    fn test_ceiling_applies() {
        let policy = policy_with(
            50_000,
            XrpAmount::from_xrp(1),
            XrpAmount::from_cents(10),
            Some(XrpAmount::from_xrp(2)),
        );

        let breakdown = policy.calculate_fees(100.0);
        assert_eq!(breakdown.fee, XrpAmount::from_xrp(2));
        assert_eq!(breakdown.total, XrpAmount::from_xrp(102));

        // Under the ceiling the percentage still applies
        assert_eq!(policy.calculate_fees(20.0).fee, XrpAmount::from_xrp(1));
    }

    #[test]
    fn test_rounds_half_up_to_the_cent() {
        let policy = policy_with(25_000, XrpAmount::zero(), XrpAmount::zero(), None);

        // 2.5% of 1.3 = 0.0325
        assert_eq!(policy.calculate_fees(1.3).fee, XrpAmount::from_cents(3));
        // 2.5% of 1.4 = 0.035, exactly on the half
        assert_eq!(policy.calculate_fees(1.4).fee, XrpAmount::from_cents(4));

        // 5% of 20.1 = 1.005, which float math tends to round down
        let default = FeePolicy::default();
        assert_eq!(default.calculate_fees(20.1).fee, XrpAmount::from_cents(101));
    }

    #[test]
    fn test_zero_rate_without_floor_charges_nothing() {
        let policy = policy_with(0, XrpAmount::zero(), XrpAmount::zero(), None);
        let breakdown = policy.calculate_fees(42.0);
        assert!(!breakdown.has_fee());
        assert_eq!(breakdown.total, XrpAmount::from_xrp(42));
    }

    #[test]
    fn test_invariants_over_many_amounts() {
        let policy = FeePolicy::default();
        let config = policy.config().clone();

        for cents in 1..=20_000u64 {
            let breakdown = policy.calculate_fees(cents as f64 / 100.0);
            let amount = XrpAmount::from_cents(cents);

            assert_eq!(breakdown.amount, amount);
            assert_eq!(breakdown.creator_amount, breakdown.amount);
            assert_eq!(breakdown.platform_amount, breakdown.fee);
            assert_eq!(breakdown.total, breakdown.amount + breakdown.fee);
            assert!(breakdown.amount <= breakdown.total);
            assert_eq!(breakdown.fee.drops() % DROPS_PER_CENT, 0);

            if amount < config.min_amount_for_fees {
                assert!(!breakdown.has_fee());
            } else {
                assert!(breakdown.fee >= config.min_fee);
            }
        }
    }

    #[test]
    fn test_invariants_with_ceiling() {
        let min_fee = XrpAmount::from_cents(10);
        let max_fee = XrpAmount::from_xrp(2);
        let policy = policy_with(50_000, XrpAmount::from_xrp(1), min_fee, Some(max_fee));

        for cents in 1..=20_000u64 {
            let breakdown = policy.calculate_fees(cents as f64 / 100.0);
            let amount = XrpAmount::from_cents(cents);

            assert_eq!(breakdown.amount, amount);
            assert_eq!(breakdown.total, breakdown.amount + breakdown.fee);
            assert!(breakdown.fee <= max_fee);

            if amount < XrpAmount::from_xrp(1) {
                assert!(!breakdown.has_fee());
            } else {
                assert!(breakdown.fee >= min_fee);
            }
        }

        // 5% reaches the 2 XRP ceiling at 40 XRP
        assert_eq!(policy.calculate_fees(40.0).fee, max_fee);
        assert_eq!(policy.calculate_fees(200.0).fee, max_fee);
        assert_eq!(policy.calculate_fees(39.8).fee, XrpAmount::from_cents(199));
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let policy = FeePolicy::default();
        for amount in [0.33, 1.0, 7.77, 1234.5678] {
            assert_eq!(policy.calculate_fees(amount), policy.calculate_fees(amount));
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = FeeConfig {
            min_fee: XrpAmount::from_xrp(3),
            max_fee: Some(XrpAmount::from_xrp(1)),
            ..FeeConfig::default()
        };
        assert!(FeePolicy::new(config).is_err());

        // A floor beyond the XRP supply would overflow the total
        let config = FeeConfig {
            min_fee: XrpAmount::from_drops(u64::MAX - 1),
            ..FeeConfig::default()
        };
        assert!(FeePolicy::new(config).is_err());
    }

    #[test]
    fn test_largest_accepted_config_keeps_total_exact() {
        let policy = policy_with(
            999_999,
            XrpAmount::zero(),
            XrpAmount::from_drops(MAX_XRP_DROPS),
            None,
        );

        let breakdown = policy.calculate_for(XrpAmount::from_drops(MAX_XRP_DROPS));
        assert_eq!(breakdown.fee, XrpAmount::from_drops(MAX_XRP_DROPS));
        assert_eq!(breakdown.total.drops(), 2 * MAX_XRP_DROPS);
    }

    #[test]
    fn test_payment_request_targets_platform_wallet() {
        let policy = FeePolicy::default();
        let breakdown = policy.calculate_fees(5.0);
        let request = policy.payment_request(&breakdown, Some("12345")).unwrap();

        assert_eq!(request.destination_address, DEFAULT_PLATFORM_WALLET);
        assert_eq!(request.amount, breakdown.total);
        assert_eq!(
            request.to_uri(),
            format!("ripple:{}?amount=5.25&dt=12345", DEFAULT_PLATFORM_WALLET)
        );
    }
}
