//! # Tip Quote
//!
//! Prints the fee breakdown and payment links for a tip amount as JSON.
//!
//! ## Usage
//! ```bash
//! # Quote a 5 XRP tip with the configured fees
//! cargo run -p xrptip-config --bin xrptip-quote -- 5
//!
//! # Use a specific config file and destination tag
//! cargo run -p xrptip-config --bin xrptip-quote -- --config ./xrptip.toml --tag 42 12.5
//!
//! # Plain ripple: link instead of a Xaman sign request
//! cargo run -p xrptip-config --bin xrptip-quote -- --wallet plain 25
//! ```
//!
//! Logs go to stderr (`RUST_LOG` filters them) so stdout stays parseable.

use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xrptip_config::TipConfig;
use xrptip_core::payment_uri::wallet_deep_link;
use xrptip_core::{FeeBreakdown, FormattedFeeBreakdown, PaymentRequest, WalletTarget};

/// What gets printed on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    input: String,
    breakdown: FeeBreakdown,
    formatted: FormattedFeeBreakdown,
    payment_uri: Option<String>,
    wallet_link: Option<String>,
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,xrptip_config=info,xrptip_quote=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("xrptip Tip Quote");
    println!();
    println!("Usage: xrptip-quote [OPTIONS] <AMOUNT>");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>    Config file (default: platform config dir)");
    println!("  -t, --tag <TAG>        Destination tag to attach");
    println!("  -w, --wallet <NAME>    xaman, xaman-simple or plain (default: xaman)");
    println!("      --to <ADDRESS>     Pay this address instead of the platform wallet");
    println!("  -h, --help             Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut tag: Option<String> = None;
    let mut wallet = WalletTarget::default();
    let mut destination: Option<String> = None;
    let mut amount: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--tag" | "-t" => {
                if i + 1 < args.len() {
                    tag = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--wallet" | "-w" => {
                if i + 1 < args.len() {
                    wallet = WalletTarget::from_name(&args[i + 1]);
                    i += 1;
                }
            }
            "--to" => {
                if i + 1 < args.len() {
                    destination = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                if amount.is_some() {
                    warn!(arg = %other, "Ignoring extra argument");
                } else {
                    amount = Some(other.to_string());
                }
            }
        }
        i += 1;
    }

    let Some(input) = amount else {
        print_help();
        return Err("missing <AMOUNT>".into());
    };

    let config = TipConfig::load(config_path)?;
    let policy = config.fee_policy()?;

    let breakdown = policy.calculate_fees_str(&input);
    info!(
        input = %input,
        amount = %breakdown.amount,
        fee = %breakdown.fee,
        total = %breakdown.total,
        "Calculated tip quote"
    );

    // Nothing to pay for a zero breakdown
    let request = if breakdown.is_payable() {
        Some(match &destination {
            Some(address) => PaymentRequest::new(address, breakdown.total, tag.as_deref())?,
            None => policy.payment_request(&breakdown, tag.as_deref())?,
        })
    } else {
        warn!(input = %input, "Amount is not payable");
        None
    };

    let wallet_link = request
        .as_ref()
        .map(|request| wallet_deep_link(request, wallet))
        .transpose()?;

    let quote = Quote {
        formatted: policy.format(&breakdown),
        payment_uri: request.as_ref().map(PaymentRequest::to_uri),
        wallet_link,
        breakdown,
        input,
    };

    println!("{}", serde_json::to_string_pretty(&quote)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
