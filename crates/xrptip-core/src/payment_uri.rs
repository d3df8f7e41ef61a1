//! # Payment URIs and Wallet Links
//!
//! Encodes payment requests for QR codes and wallet deep links.
//!
//! ## Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ripple:<address>[?amount=<xrp>][&dt=<tag>]                             │
//! │    QR codes, "open in wallet" buttons, any XRPL wallet                  │
//! │                                                                         │
//! │  xumm://xumm.app/sign?tx=<encodeURIComponent(JSON Payment)>             │
//! │    Xaman sign request, amount in drops                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `ripple:` form interpolates address and tag as-is. Both are URL-safe
//! once they pass `validation`, which [`PaymentRequest::new`] enforces.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::error::CoreResult;
use crate::money::XrpAmount;
use crate::types::{PaymentRequest, WalletTarget};
use crate::validation::validate_destination_tag;

/// Characters JavaScript's `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const XAMAN_SIGN_URL: &str = "xumm://xumm.app/sign?tx=";

/// Builds a `ripple:` payment URI.
///
/// ## Rules
/// - `amount=` only when the amount is positive
/// - `dt=` only when the tag is non-empty
/// - No `?` when there are no parameters
///
/// ## Example
/// ```rust
/// use xrptip_core::money::XrpAmount;
/// use xrptip_core::payment_uri::generate_xrp_payment_uri;
///
/// let addr = "rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ";
/// assert_eq!(
///     generate_xrp_payment_uri(addr, XrpAmount::zero(), None),
///     format!("ripple:{}", addr)
/// );
/// assert_eq!(
///     generate_xrp_payment_uri(addr, XrpAmount::from_xrp(10), Some("12345")),
///     format!("ripple:{}?amount=10&dt=12345", addr)
/// );
/// ```
pub fn generate_xrp_payment_uri(
    address: &str,
    amount: XrpAmount,
    destination_tag: Option<&str>,
) -> String {
    let mut uri = format!("ripple:{}", address);
    let mut params = Vec::with_capacity(2);

    if amount.is_positive() {
        params.push(format!("amount={}", amount));
    }

    if let Some(tag) = destination_tag.filter(|tag| !tag.is_empty()) {
        params.push(format!("dt={}", tag));
    }

    if !params.is_empty() {
        uri.push('?');
        uri.push_str(&params.join("&"));
    }

    uri
}

/// Payment transaction as Xaman expects it in a sign request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct XamanPayment<'a> {
    transaction_type: &'static str,
    destination: &'a str,
    /// Drops, as a string.
    amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_tag: Option<u32>,
}

/// Builds the deep link that opens `target` with the payment pre-filled.
///
/// ## Example
/// ```rust
/// use xrptip_core::money::XrpAmount;
/// use xrptip_core::payment_uri::wallet_deep_link;
/// use xrptip_core::types::{PaymentRequest, WalletTarget};
///
/// let request = PaymentRequest::new(
///     "rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ",
///     XrpAmount::from_xrp(5),
///     None,
/// )
/// .unwrap();
///
/// let link = wallet_deep_link(&request, WalletTarget::Xaman).unwrap();
/// assert!(link.starts_with("xumm://xumm.app/sign?tx=%7B%22TransactionType%22"));
///
/// let plain = wallet_deep_link(&request, WalletTarget::Plain).unwrap();
/// assert_eq!(plain, request.to_uri());
/// ```
pub fn wallet_deep_link(request: &PaymentRequest, target: WalletTarget) -> CoreResult<String> {
    match target {
        WalletTarget::Xaman => xaman_sign_link(request),
        WalletTarget::XamanSimple | WalletTarget::Plain => Ok(request.to_uri()),
    }
}

fn xaman_sign_link(request: &PaymentRequest) -> CoreResult<String> {
    let destination_tag = match request.destination_tag.as_deref() {
        Some(tag) => {
            validate_destination_tag(Some(tag))?;
            tag.parse::<u32>().ok()
        }
        None => None,
    };

    let tx = XamanPayment {
        transaction_type: "Payment",
        destination: &request.destination_address,
        amount: request.amount.drops().to_string(),
        destination_tag,
    };

    let json = serde_json::to_string(&tx)?;
    Ok(format!(
        "{}{}",
        XAMAN_SIGN_URL,
        utf8_percent_encode(&json, URI_COMPONENT)
    ))
}

/// File name for a downloaded payment QR code.
///
/// ## Example
/// ```rust
/// use xrptip_core::money::XrpAmount;
/// use xrptip_core::payment_uri::qr_download_filename;
///
/// assert_eq!(
///     qr_download_filename("alice", XrpAmount::from_xrp(10)),
///     "xrptip-alice-10XRP.png"
/// );
/// ```
pub fn qr_download_filename(username: &str, amount: XrpAmount) -> String {
    format!("xrptip-{}-{}XRP.png", username, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    const ADDR: &str = "rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ";

    #[test]
    fn test_uri_without_params() {
        assert_eq!(
            generate_xrp_payment_uri(ADDR, XrpAmount::zero(), None),
            "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ"
        );
        assert_eq!(
            generate_xrp_payment_uri(ADDR, XrpAmount::zero(), Some("")),
            "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ"
        );
    }

    #[test]
    fn test_uri_with_amount_and_tag() {
        assert_eq!(
            generate_xrp_payment_uri(ADDR, XrpAmount::from_xrp(10), None),
            "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?amount=10"
        );
        assert_eq!(
            generate_xrp_payment_uri(ADDR, XrpAmount::from_xrp(10), Some("12345")),
            "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?amount=10&dt=12345"
        );
        // Tag without amount
        assert_eq!(
            generate_xrp_payment_uri(ADDR, XrpAmount::zero(), Some("7")),
            "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?dt=7"
        );
        assert_eq!(
            generate_xrp_payment_uri(ADDR, XrpAmount::from_drops(1_100_000), None),
            "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?amount=1.1"
        );
    }

    #[test]
    fn test_xaman_link_encodes_payment_json() {
        let request = PaymentRequest::new(ADDR, XrpAmount::from_xrp(5), None).unwrap();
        let link = wallet_deep_link(&request, WalletTarget::Xaman).unwrap();

        assert_eq!(
            link,
            "xumm://xumm.app/sign?tx=%7B%22TransactionType%22%3A%22Payment%22%2C\
             %22Destination%22%3A%22rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ%22%2C\
             %22Amount%22%3A%225000000%22%7D"
        );
    }

    #[test]
    fn test_xaman_link_carries_destination_tag() {
        let request = PaymentRequest::new(ADDR, XrpAmount::from_cents(525), Some("42")).unwrap();
        let link = wallet_deep_link(&request, WalletTarget::Xaman).unwrap();

        assert!(link.contains("%22Amount%22%3A%225250000%22"));
        assert!(link.ends_with("%22DestinationTag%22%3A42%7D"));
    }

    #[test]
    fn test_xaman_link_rejects_tampered_tag() {
        let mut request = PaymentRequest::new(ADDR, XrpAmount::from_xrp(1), None).unwrap();
        request.destination_tag = Some("1&dt=2".to_string());

        let err = wallet_deep_link(&request, WalletTarget::Xaman).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_simple_targets_use_ripple_uri() {
        let request = PaymentRequest::new(ADDR, XrpAmount::from_xrp(3), Some("9")).unwrap();
        let expected = "ripple:rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ?amount=3&dt=9";

        assert_eq!(wallet_deep_link(&request, WalletTarget::XamanSimple).unwrap(), expected);
        assert_eq!(wallet_deep_link(&request, WalletTarget::Plain).unwrap(), expected);
    }

    #[test]
    fn test_qr_download_filename() {
        assert_eq!(
            qr_download_filename("bob", XrpAmount::from_cents(250)),
            "xrptip-bob-2.5XRP.png"
        );
    }
}
