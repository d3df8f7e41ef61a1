//! # Money Module
//!
//! Provides the `XrpAmount` type for handling XRP values safely.
//!
//! ## Why Integer Drops?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 * 1000000 = 100000.00000000001  ❌ not a valid drop count        │
//! │    Math.round(1.005 * 100) / 100 = 1   ❌ half-up lost                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Drops                                            │
//! │    1 XRP = 1,000,000 drops (the ledger's own unit)                      │
//! │    All fee math is integer math on drops                                │
//! │    Floats only exist at the form boundary, rounded to the nearest drop  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use xrptip_core::money::XrpAmount;
//!
//! let tip = XrpAmount::from_xrp(5);
//! let fee = XrpAmount::from_cents(25); // 0.25 XRP
//!
//! let total = tip + fee;
//! assert_eq!(total.drops(), 5_250_000);
//! assert_eq!(total.to_string(), "5.25");
//! assert_eq!(total.format_fixed(2), "5.25");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// Drops in one XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Drops in one hundredth of an XRP, the precision fees are rounded to.
pub const DROPS_PER_CENT: u64 = 10_000;

/// Decimal places of a drop expressed in XRP.
pub const XRP_DECIMALS: u32 = 6;

/// Total XRP supply in drops. Nothing larger can ever be paid.
pub const MAX_XRP_DROPS: u64 = 100_000_000_000 * DROPS_PER_XRP;

// =============================================================================
// XrpAmount Type
// =============================================================================

/// An XRP value in drops, the smallest ledger unit.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: tips, fees and totals are never negative
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **Serializes as drops**: the web client divides by 1e6 for display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct XrpAmount(u64);

impl XrpAmount {
    /// Creates an amount from drops.
    #[inline]
    pub const fn from_drops(drops: u64) -> Self {
        XrpAmount(drops)
    }

    /// Creates an amount from whole XRP.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    ///
    /// assert_eq!(XrpAmount::from_xrp(25).drops(), 25_000_000);
    /// ```
    #[inline]
    pub const fn from_xrp(xrp: u64) -> Self {
        XrpAmount(xrp.saturating_mul(DROPS_PER_XRP))
    }

    /// Creates an amount from hundredths of an XRP.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    ///
    /// assert_eq!(XrpAmount::from_cents(10).to_string(), "0.1");
    /// ```
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        XrpAmount(cents.saturating_mul(DROPS_PER_CENT))
    }

    /// Converts a floating-point XRP value to the nearest drop.
    ///
    /// Returns `None` for NaN, infinities, negative values and anything above
    /// the total XRP supply. This is the only place a float becomes money.
    ///
    /// Positive values below half a drop round to zero drops, so fee
    /// calculation treats them like no amount at all (zero breakdown) rather
    /// than as a fee-free tip.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    ///
    /// assert_eq!(XrpAmount::from_xrp_f64(0.1).unwrap().drops(), 100_000);
    /// assert!(XrpAmount::from_xrp_f64(f64::NAN).is_none());
    /// assert!(XrpAmount::from_xrp_f64(-1.0).is_none());
    /// assert!(XrpAmount::from_xrp_f64(0.0000001).unwrap().is_zero());
    /// ```
    pub fn from_xrp_f64(xrp: f64) -> Option<Self> {
        if !xrp.is_finite() || xrp < 0.0 {
            return None;
        }

        let drops = (xrp * DROPS_PER_XRP as f64).round();
        if drops > MAX_XRP_DROPS as f64 {
            return None;
        }

        Some(XrpAmount(drops as u64))
    }

    /// Parses form input the way a number field is coerced.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - Empty input is `None` (nothing typed yet)
    /// - Anything `f64` can't parse, or that `from_xrp_f64` rejects, is `None`
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    ///
    /// assert_eq!(XrpAmount::parse_xrp(" 2.5 ").unwrap().drops(), 2_500_000);
    /// assert!(XrpAmount::parse_xrp("").is_none());
    /// assert!(XrpAmount::parse_xrp("abc").is_none());
    /// ```
    pub fn parse_xrp(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        input.parse::<f64>().ok().and_then(Self::from_xrp_f64)
    }

    /// Returns the value in drops.
    #[inline]
    pub const fn drops(&self) -> u64 {
        self.0
    }

    /// Returns the value as floating-point XRP (for interop only).
    #[inline]
    pub fn to_xrp_f64(&self) -> f64 {
        self.0 as f64 / DROPS_PER_XRP as f64
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        XrpAmount(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Formats with a fixed number of decimals (at most 6), rounding half up.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    ///
    /// assert_eq!(XrpAmount::from_xrp(5).format_fixed(2), "5.00");
    /// assert_eq!(XrpAmount::from_drops(1_005_000).format_fixed(2), "1.01");
    /// assert_eq!(XrpAmount::from_drops(1_500_000).format_fixed(0), "2");
    /// ```
    pub fn format_fixed(&self, decimals: u32) -> String {
        let decimals = decimals.min(XRP_DECIMALS);
        let unit = 10u64.pow(XRP_DECIMALS - decimals);
        let scaled = self.0.saturating_add(unit / 2) / unit;

        if decimals == 0 {
            return scaled.to_string();
        }

        let base = 10u64.pow(decimals);
        format!(
            "{}.{:0width$}",
            scaled / base,
            scaled % base,
            width = decimals as usize
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shortest exact decimal form in XRP: `10`, `5.25`, `0.000001`.
///
/// This is the form wallets expect in `ripple:` URIs.
impl fmt::Display for XrpAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / DROPS_PER_XRP;
        let frac = self.0 % DROPS_PER_XRP;

        if frac == 0 {
            return write!(f, "{}", whole);
        }

        let frac = format!("{:06}", frac);
        write!(f, "{}.{}", whole, frac.trim_end_matches('0'))
    }
}

impl Add for XrpAmount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        XrpAmount(self.0.saturating_add(other.0))
    }
}

impl AddAssign for XrpAmount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
