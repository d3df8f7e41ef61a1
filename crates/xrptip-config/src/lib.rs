//! # xrptip-config: Configuration for xrptip
//!
//! Turns `xrptip.toml` plus `XRPTIP_*` environment variables into a
//! validated [`xrptip_core::FeePolicy`] and widget settings.
//!
//! ## Modules
//!
//! - [`config`] - `TipConfig` loading, saving and env overrides
//! - [`error`] - Configuration error types
//!
//! ## Example Usage
//!
//! ```rust
//! use xrptip_config::TipConfig;
//!
//! let config = TipConfig::from_toml_str("[fees]\nfee_percentage = 0.02\n").unwrap();
//! let policy = config.fee_policy().unwrap();
//!
//! let breakdown = policy.calculate_fees(100.0);
//! assert_eq!(policy.format(&breakdown).total, "102.00 XRP");
//! ```

pub mod config;
pub mod error;

pub use config::{DisplaySettings, FeeSettings, TipConfig, WidgetSettings};
pub use error::{ConfigError, ConfigResult};
