//! # xrptip-core: Pure Tipping Logic for xrptip
//!
//! This crate is the **heart** of xrptip. It contains the fee policy and
//! payment-request logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          xrptip Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web client (React)                           │   │
//! │  │   Tip page ──► Fee breakdown ──► QR code ──► Wallet deep link   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ WASM / TS bindings                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ xrptip-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   fees    │  │payment_uri│  │  display  │  │ selection │  │   │
//! │  │   │ FeePolicy │  │  ripple:  │  │ "5.00 XRP"│  │  presets  │  │   │
//! │  │   │ FeeConfig │  │  xumm://  │  │   "5.0%"  │  │  custom   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        REST backend + XRP Ledger (external, not in this repo)   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `XrpAmount` in integer drops (no floating point!)
//! - [`types`] - Value types (FeeRate, FeeBreakdown, PaymentRequest, ...)
//! - [`fees`] - Fee policy and its configuration
//! - [`payment_uri`] - `ripple:` URIs and wallet deep links
//! - [`display`] - Display formatting
//! - [`selection`] - Tip amount selection
//! - [`widget`] - Widget embed snippets
//! - [`validation`] - Address, tag, username and config validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input and config = same output
//! 2. **Injected Config**: the fee policy owns its `FeeConfig`, nothing global
//! 3. **Integer Money**: all amounts are drops (u64)
//! 4. **Never Throw On Amounts**: bad amounts give the zero breakdown
//!
//! ## Example Usage
//!
//! ```rust
//! use xrptip_core::{FeePolicy, WalletTarget};
//! use xrptip_core::payment_uri::wallet_deep_link;
//!
//! let policy = FeePolicy::default();
//! let breakdown = policy.calculate_fees_str("5");
//!
//! let shown = policy.format(&breakdown);
//! assert_eq!(shown.total, "5.25 XRP");
//!
//! let request = policy.payment_request(&breakdown, None).unwrap();
//! assert_eq!(
//!     request.to_uri(),
//!     "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?amount=5.25"
//! );
//! assert!(wallet_deep_link(&request, WalletTarget::Xaman).unwrap().starts_with("xumm://"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod fees;
pub mod money;
pub mod payment_uri;
pub mod selection;
pub mod types;
pub mod validation;
pub mod widget;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use fees::{FeeConfig, FeePolicy};
pub use money::XrpAmount;
pub use selection::TipSelection;
pub use types::*;
pub use widget::WidgetEmbed;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Platform intermediary wallet used when no configuration overrides it.
pub const DEFAULT_PLATFORM_WALLET: &str = "rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ";

/// Display suffix for amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "XRP";

/// Preset tip buttons on the creator page, in whole XRP.
pub const PRESET_TIP_AMOUNTS_XRP: [u64; 4] = [1, 5, 10, 25];

/// Preset selected when the tip page opens.
pub const DEFAULT_TIP_XRP: u64 = 5;
