//! # Display Formatting
//!
//! Renders fee breakdowns as the strings the tip page shows.
//!
//! ```text
//! Pour le créateur          5.00 XRP
//! Frais de plateforme (5.0%) 0.25 XRP
//! ─────────────────────────────────
//! Total à payer             5.25 XRP
//! ```
//!
//! Formatting never changes the numbers: rounding already happened in the
//! fee policy, and amounts finer than a cent are only rounded for display.

use crate::money::XrpAmount;
use crate::types::{FeeBreakdown, FeeRate, FormattedFeeBreakdown};

/// Formats an amount with 2 decimals and the currency suffix.
///
/// ## Example
/// ```rust
/// use xrptip_core::display::format_amount;
/// use xrptip_core::money::XrpAmount;
///
/// assert_eq!(format_amount(XrpAmount::from_xrp(5), "XRP"), "5.00 XRP");
/// ```
pub fn format_amount(amount: XrpAmount, currency_symbol: &str) -> String {
    format!("{} {}", amount.format_fixed(2), currency_symbol)
}

/// Formats a fee rate as a percentage with 1 decimal.
///
/// ## Example
/// ```rust
/// use xrptip_core::display::format_percentage;
/// use xrptip_core::types::FeeRate;
///
/// assert_eq!(format_percentage(FeeRate::from_ppm(50_000)), "5.0%");
/// assert_eq!(format_percentage(FeeRate::from_ppm(25_000)), "2.5%");
/// ```
pub fn format_percentage(rate: FeeRate) -> String {
    // 1,000 ppm = 0.1%
    let tenths = (u64::from(rate.ppm()) + 500) / 1_000;
    format!("{}.{}%", tenths / 10, tenths % 10)
}

/// Formats every field of a breakdown.
pub fn format_fee_breakdown(
    breakdown: &FeeBreakdown,
    rate: FeeRate,
    currency_symbol: &str,
) -> FormattedFeeBreakdown {
    FormattedFeeBreakdown {
        amount: format_amount(breakdown.amount, currency_symbol),
        fee: format_amount(breakdown.fee, currency_symbol),
        total: format_amount(breakdown.total, currency_symbol),
        platform_amount: format_amount(breakdown.platform_amount, currency_symbol),
        creator_amount: format_amount(breakdown.creator_amount, currency_symbol),
        fee_percentage: format_percentage(rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::FeePolicy;

    #[test]
    fn test_format_default_breakdown() {
        let breakdown = FeeBreakdown::with_fee(XrpAmount::from_xrp(5), XrpAmount::from_cents(25));
        let formatted = format_fee_breakdown(&breakdown, FeeRate::from_ppm(50_000), "XRP");

        assert_eq!(formatted.amount, "5.00 XRP");
        assert_eq!(formatted.fee, "0.25 XRP");
        assert_eq!(formatted.total, "5.25 XRP");
        assert_eq!(formatted.platform_amount, "0.25 XRP");
        assert_eq!(formatted.creator_amount, "5.00 XRP");
        assert_eq!(formatted.fee_percentage, "5.0%");
    }

    #[test]
    fn test_format_zero_breakdown() {
        let formatted = FeePolicy::default().format(&FeeBreakdown::zero());
        assert_eq!(formatted.total, "0.00 XRP");
        assert_eq!(formatted.fee_percentage, "5.0%");
    }

    #[test]
    fn test_custom_currency_symbol() {
        assert_eq!(format_amount(XrpAmount::from_cents(110), "drops-xrp"), "1.10 drops-xrp");
    }

    #[test]
    fn test_sub_cent_amounts_are_rounded_for_display_only() {
        let amount = XrpAmount::from_drops(1_234_567);
        assert_eq!(format_amount(amount, "XRP"), "1.23 XRP");
        assert_eq!(amount.drops(), 1_234_567);
    }

    #[test]
    fn test_format_percentage_edges() {
        assert_eq!(format_percentage(FeeRate::zero()), "0.0%");
        assert_eq!(format_percentage(FeeRate::from_ppm(500)), "0.1%");
        assert_eq!(format_percentage(FeeRate::from_ppm(999_999)), "100.0%");
        assert_eq!(format_percentage(FeeRate::from_ppm(123_456)), "12.3%");
    }

    #[test]
    fn test_format_percentage_unvalidated_rate() {
        // Rates straight from from_ppm or serde are never range-checked
        assert_eq!(format_percentage(FeeRate::from_ppm(u32::MAX)), "429496.7%");
        assert_eq!(format_percentage(FeeRate::from_ppm(u32::MAX - 499)), "429496.7%");
    }
}
