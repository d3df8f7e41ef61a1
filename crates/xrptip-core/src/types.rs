//! # Domain Types
//!
//! Core value types used throughout xrptip.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    FeeRate      │   │  FeeBreakdown   │   │ PaymentRequest  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ppm (u32)      │   │  amount         │   │  destination    │       │
//! │  │  50000 = 5%     │   │  fee            │   │  amount         │       │
//! │  └─────────────────┘   │  total          │   │  tag (optional) │       │
//! │                        │  platform/      │   └─────────────────┘       │
//! │                        │  creator split  │                              │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  WalletTarget   │   │   WidgetSize    │                              │
//! │  │  Xaman          │   │  Small 280×80   │                              │
//! │  │  XamanSimple    │   │  Medium 350×100 │                              │
//! │  │  Plain          │   │  Large 450×120  │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these have identity or persistence: they are computed right
//! before rendering and thrown away.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::XrpAmount;
use crate::payment_uri::generate_xrp_payment_uri;
use crate::validation::{validate_destination_tag, validate_xrp_address, ValidationResult};

/// Parts-per-million denominator used by [`FeeRate`].
pub const PPM: u32 = 1_000_000;

// =============================================================================
// Fee Rate
// =============================================================================

/// Platform fee rate in parts per million.
///
/// ## Why PPM?
/// Operators configure the fee as a fraction (`0.05`). Holding it as an
/// integer keeps the fee math exact: 50,000 ppm = 5%, and 1 ppm is far finer
/// than any rate anyone will configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeeRate(u32);

impl FeeRate {
    /// Creates a rate from parts per million.
    #[inline]
    pub const fn from_ppm(ppm: u32) -> Self {
        FeeRate(ppm)
    }

    /// Creates a rate from a fraction in `[0, 1)`.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::types::FeeRate;
    ///
    /// assert_eq!(FeeRate::try_from_fraction(0.05).unwrap().ppm(), 50_000);
    /// assert!(FeeRate::try_from_fraction(1.0).is_err());
    /// assert!(FeeRate::try_from_fraction(-0.01).is_err());
    /// ```
    pub fn try_from_fraction(fraction: f64) -> ValidationResult<Self> {
        let out_of_range = || ValidationError::OutOfRange {
            field: "fee_percentage".to_string(),
            min: "0".to_string(),
            max: "1 (exclusive)".to_string(),
        };

        if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
            return Err(out_of_range());
        }

        // 0.9999996 rounds up to a full 100%
        let ppm = (fraction * PPM as f64).round() as u32;
        if ppm >= PPM {
            return Err(out_of_range());
        }

        Ok(FeeRate(ppm))
    }

    /// Returns the rate in parts per million.
    #[inline]
    pub const fn ppm(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (for display and config files only).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / PPM as f64
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Zero fee rate.
    #[inline]
    pub const fn zero() -> Self {
        FeeRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Fee Breakdown
// =============================================================================

/// Decomposition of a tip into what the supporter pays and where it goes.
///
/// ## Invariants
/// - `total == amount + fee`
/// - `platform_amount == fee`
/// - `creator_amount == amount`
///
/// ## Money Flow
/// ```text
/// Supporter pays `total` ──► Platform wallet
///                               ├──► `creator_amount` to the creator
///                               └──► `platform_amount` kept as fee
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// The creator-facing tip amount.
    pub amount: XrpAmount,
    /// Platform fee charged on top.
    pub fee: XrpAmount,
    /// What the supporter actually transfers.
    pub total: XrpAmount,
    /// Money destined for the platform (same as `fee`).
    pub platform_amount: XrpAmount,
    /// Money destined for the creator (same as `amount`).
    pub creator_amount: XrpAmount,
}

impl FeeBreakdown {
    /// The "no tip selected" breakdown.
    #[inline]
    pub const fn zero() -> Self {
        FeeBreakdown {
            amount: XrpAmount::zero(),
            fee: XrpAmount::zero(),
            total: XrpAmount::zero(),
            platform_amount: XrpAmount::zero(),
            creator_amount: XrpAmount::zero(),
        }
    }

    /// Builds a breakdown for `amount` plus `fee`, keeping the invariants.
    pub fn with_fee(amount: XrpAmount, fee: XrpAmount) -> Self {
        FeeBreakdown {
            amount,
            fee,
            total: amount + fee,
            platform_amount: fee,
            creator_amount: amount,
        }
    }

    /// Whether there is anything to pay. UI code branches on this.
    #[inline]
    pub const fn is_payable(&self) -> bool {
        self.total.is_positive()
    }

    /// Whether a platform fee applies.
    #[inline]
    pub const fn has_fee(&self) -> bool {
        self.fee.is_positive()
    }
}

/// A [`FeeBreakdown`] rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormattedFeeBreakdown {
    pub amount: String,
    pub fee: String,
    pub total: String,
    pub platform_amount: String,
    pub creator_amount: String,
    /// Configured rate, e.g. `"5.0%"`.
    pub fee_percentage: String,
}

// =============================================================================
// Payment Request
// =============================================================================

/// What a QR code or wallet deep link asks the supporter to pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Ledger address receiving the payment.
    pub destination_address: String,
    /// Amount to transfer (the breakdown's `total`).
    pub amount: XrpAmount,
    /// Optional destination tag.
    pub destination_tag: Option<String>,
}

impl PaymentRequest {
    /// Creates a validated payment request.
    ///
    /// The address and tag end up in a URI without escaping, so both are
    /// checked here. An empty tag is treated as no tag.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    /// use xrptip_core::types::PaymentRequest;
    ///
    /// let request = PaymentRequest::new(
    ///     "rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ",
    ///     XrpAmount::from_xrp(10),
    ///     Some("12345"),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     request.to_uri(),
    ///     "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?amount=10&dt=12345"
    /// );
    /// ```
    pub fn new(
        destination_address: &str,
        amount: XrpAmount,
        destination_tag: Option<&str>,
    ) -> CoreResult<Self> {
        let destination_address = destination_address.trim();
        validate_xrp_address(destination_address)?;

        let destination_tag = destination_tag
            .map(str::trim)
            .filter(|tag| !tag.is_empty());
        validate_destination_tag(destination_tag)?;

        Ok(PaymentRequest {
            destination_address: destination_address.to_string(),
            amount,
            destination_tag: destination_tag.map(str::to_string),
        })
    }

    /// Returns the `ripple:` URI for this request.
    pub fn to_uri(&self) -> String {
        generate_xrp_payment_uri(
            &self.destination_address,
            self.amount,
            self.destination_tag.as_deref(),
        )
    }
}

// =============================================================================
// Wallet Target
// =============================================================================

/// Which wallet a deep link is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WalletTarget {
    /// Xaman sign request (`xumm://`) with a JSON Payment transaction.
    #[default]
    Xaman,
    /// Xaman opened with the plain `ripple:` URI.
    XamanSimple,
    /// Any other wallet: the plain `ripple:` URI.
    Plain,
}

impl WalletTarget {
    /// Resolves a wallet name. Unknown names fall back to [`WalletTarget::Plain`].
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::types::WalletTarget;
    ///
    /// assert_eq!(WalletTarget::from_name("Xaman"), WalletTarget::Xaman);
    /// assert_eq!(WalletTarget::from_name("xamanSimple"), WalletTarget::XamanSimple);
    /// assert_eq!(WalletTarget::from_name("crossmark"), WalletTarget::Plain);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "xaman" | "xumm" => WalletTarget::Xaman,
            "xamansimple" | "xaman_simple" | "xaman-simple" => WalletTarget::XamanSimple,
            _ => WalletTarget::Plain,
        }
    }
}

// =============================================================================
// Widget Size
// =============================================================================

/// Size presets for the embeddable tip widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl WidgetSize {
    /// All sizes, in the order the picker shows them.
    pub const ALL: [WidgetSize; 3] = [WidgetSize::Small, WidgetSize::Medium, WidgetSize::Large];

    /// Width in pixels.
    pub const fn width(&self) -> u32 {
        match self {
            WidgetSize::Small => 280,
            WidgetSize::Medium => 350,
            WidgetSize::Large => 450,
        }
    }

    /// Height in pixels.
    pub const fn height(&self) -> u32 {
        match self {
            WidgetSize::Small => 80,
            WidgetSize::Medium => 100,
            WidgetSize::Large => 120,
        }
    }

    /// Resolves a size name (`small`, `medium`, `large`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "small" => Some(WidgetSize::Small),
            "medium" => Some(WidgetSize::Medium),
            "large" => Some(WidgetSize::Large),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
