//! # Tip Amount Selection
//!
//! Resolves what the supporter wants to send from the tip page controls.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ 1 XRP ] [ 5 XRP ] [ 10 XRP ] [ 25 XRP ]   or   [ custom: ____ ]     │
//! │                │                                        │               │
//! │                ▼                                        ▼               │
//! │       select_preset(5)                      set_custom_amount("12")    │
//! │       (clears custom text)                  (overrides the preset)     │
//! │                \                                       /                │
//! │                 └──────────► amount_to_send() ◄───────┘                 │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                     FeePolicy ──► breakdown ──► QR / wallet link        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::fees::FeePolicy;
use crate::money::XrpAmount;
use crate::types::{FeeBreakdown, PaymentRequest};
use crate::{DEFAULT_TIP_XRP, PRESET_TIP_AMOUNTS_XRP};

/// State of the tip amount controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TipSelection {
    /// Preset chosen by the supporter, if any.
    pub selected_amount: Option<XrpAmount>,
    /// Raw text of the custom amount field.
    pub custom_amount: String,
}

impl Default for TipSelection {
    fn default() -> Self {
        TipSelection {
            selected_amount: Some(XrpAmount::from_xrp(DEFAULT_TIP_XRP)),
            custom_amount: String::new(),
        }
    }
}

impl TipSelection {
    /// The preset buttons, smallest first.
    pub fn presets() -> impl Iterator<Item = XrpAmount> {
        PRESET_TIP_AMOUNTS_XRP.iter().map(|xrp| XrpAmount::from_xrp(*xrp))
    }

    /// Picks a preset and clears any custom text.
    pub fn select_preset(&mut self, amount: XrpAmount) {
        self.selected_amount = Some(amount);
        self.custom_amount.clear();
    }

    /// Stores the custom field's text as typed.
    pub fn set_custom_amount(&mut self, text: impl Into<String>) {
        self.custom_amount = text.into();
    }

    /// Whether a preset button should render as active.
    pub fn is_preset_active(&self, amount: XrpAmount) -> bool {
        self.custom_amount.is_empty() && self.selected_amount == Some(amount)
    }

    /// The amount to send, if any.
    ///
    /// Non-empty custom text wins over the preset, even when it doesn't
    /// parse: "abc" in the field means nothing can be sent yet.
    ///
    /// ## Example
    /// ```rust
    /// use xrptip_core::money::XrpAmount;
    /// use xrptip_core::selection::TipSelection;
    ///
    /// let mut selection = TipSelection::default();
    /// assert_eq!(selection.amount_to_send(), Some(XrpAmount::from_xrp(5)));
    ///
    /// selection.set_custom_amount("12.5");
    /// assert_eq!(selection.amount_to_send(), Some(XrpAmount::from_cents(1250)));
    ///
    /// selection.set_custom_amount("abc");
    /// assert_eq!(selection.amount_to_send(), None);
    /// ```
    pub fn amount_to_send(&self) -> Option<XrpAmount> {
        let amount = if self.custom_amount.is_empty() {
            self.selected_amount
        } else {
            XrpAmount::parse_xrp(&self.custom_amount)
        };

        amount.filter(XrpAmount::is_positive)
    }

    /// Whether the "send" button is enabled.
    pub fn can_send(&self) -> bool {
        self.amount_to_send().is_some()
    }

    /// Fee breakdown for the current selection (zero when nothing to send).
    pub fn breakdown(&self, policy: &FeePolicy) -> FeeBreakdown {
        self.amount_to_send()
            .map(|amount| policy.calculate_for(amount))
            .unwrap_or_else(FeeBreakdown::zero)
    }

    /// Payment request for the current selection, routed to the platform
    /// wallet for the breakdown total.
    pub fn payment_request(
        &self,
        policy: &FeePolicy,
        destination_tag: Option<&str>,
    ) -> CoreResult<PaymentRequest> {
        let amount = self.amount_to_send().ok_or(CoreError::NoAmountSelected)?;
        let breakdown = policy.calculate_for(amount);
        policy.payment_request(&breakdown, destination_tag)
    }
}
