//! # Tip Configuration
//!
//! Loads the platform's fee economics and presentation settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     XRPTIP_FEE_PERCENTAGE=0.03                                         │
//! │     XRPTIP_PLATFORM_WALLET=r...                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/xrptip/xrptip.toml (Linux)                               │
//! │     ~/Library/Application Support/app.xrptip.xrptip/xrptip.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     5% fee, 0.1 XRP floor, fees from 1 XRP, no ceiling                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # xrptip.toml
//! [fees]
//! fee_percentage = 0.05
//! platform_wallet_address = "rNDoLghX4eCZj82RX8f6QdPGVFQC9bCiCZ"
//! min_amount_for_fees = 1.0
//! min_fee = 0.1
//! # max_fee = 2.0   # omit for no ceiling
//!
//! [display]
//! currency_symbol = "XRP"
//!
//! [widget]
//! origin = "https://xrptip.app"
//! default_size = "medium"
//! ```
//!
//! Amounts are written in XRP here and converted to drops once, when the
//! fee policy is built.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use xrptip_core::{
    FeeConfig, FeePolicy, FeeRate, WidgetEmbed, WidgetSize, XrpAmount, DEFAULT_CURRENCY_SYMBOL,
    DEFAULT_PLATFORM_WALLET,
};

use crate::error::{ConfigError, ConfigResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "xrptip.toml";

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "XRPTIP_";

// =============================================================================
// Fee Settings
// =============================================================================

/// Fee economics as operators write them (XRP, fractions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSettings {
    /// Fee as a fraction of the tip, in `[0, 1)`.
    #[serde(default = "default_fee_percentage")]
    pub fee_percentage: f64,

    /// Intermediary wallet all payments go to.
    #[serde(default = "default_platform_wallet")]
    pub platform_wallet_address: String,

    /// Tips below this many XRP pay no fee.
    #[serde(default = "default_min_amount_for_fees")]
    pub min_amount_for_fees: f64,

    /// Fee floor in XRP.
    #[serde(default = "default_min_fee")]
    pub min_fee: f64,

    /// Fee ceiling in XRP. Absent means none.
    #[serde(default)]
    pub max_fee: Option<f64>,
}

fn default_fee_percentage() -> f64 {
    0.05
}

fn default_platform_wallet() -> String {
    DEFAULT_PLATFORM_WALLET.to_string()
}

fn default_min_amount_for_fees() -> f64 {
    1.0
}

fn default_min_fee() -> f64 {
    0.1
}

impl Default for FeeSettings {
    fn default() -> Self {
        FeeSettings {
            fee_percentage: default_fee_percentage(),
            platform_wallet_address: default_platform_wallet(),
            min_amount_for_fees: default_min_amount_for_fees(),
            min_fee: default_min_fee(),
            max_fee: None,
        }
    }
}

/// Converts an XRP setting to drops, naming the field on failure.
fn xrp_setting(field: &str, value: f64) -> ConfigResult<XrpAmount> {
    XrpAmount::from_xrp_f64(value).ok_or_else(|| ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Display Settings
// =============================================================================

/// How amounts are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Suffix after every formatted amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Widget Settings
// =============================================================================

/// Where the web client is served, for embed snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Public origin of the web client.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Size preselected in the embed generator.
    #[serde(default)]
    pub default_size: WidgetSize,
}

fn default_origin() -> String {
    "https://xrptip.app".to_string()
}

impl Default for WidgetSettings {
    fn default() -> Self {
        WidgetSettings {
            origin: default_origin(),
            default_size: WidgetSize::default(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete xrptip configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipConfig {
    /// Fee economics.
    #[serde(default)]
    pub fees: FeeSettings,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Widget embed settings.
    #[serde(default)]
    pub widget: WidgetSettings,
}

impl TipConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (xrptip.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load xrptip config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document without touching the environment.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: TipConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`TipConfig::load`] with an injectable environment.
    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading xrptip config from file");
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "xrptip config saved");
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// Builds the fee policy once so every fee invariant is checked exactly
    /// as it will be enforced at runtime.
    pub fn validate(&self) -> ConfigResult<()> {
        self.fee_policy()?;

        let origin = self.widget.origin.trim();
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "Widget origin must start with http:// or https://, got: {}",
                origin
            )));
        }

        Ok(())
    }

    /// Converts the settings into the core fee configuration.
    pub fn fee_config(&self) -> ConfigResult<FeeConfig> {
        let fees = &self.fees;

        Ok(FeeConfig {
            fee_rate: FeeRate::try_from_fraction(fees.fee_percentage)?,
            platform_wallet_address: fees.platform_wallet_address.trim().to_string(),
            min_amount_for_fees: xrp_setting("min_amount_for_fees", fees.min_amount_for_fees)?,
            min_fee: xrp_setting("min_fee", fees.min_fee)?,
            max_fee: fees
                .max_fee
                .map(|max_fee| xrp_setting("max_fee", max_fee))
                .transpose()?,
            currency_symbol: self.display.currency_symbol.clone(),
        })
    }

    /// Builds the validated fee policy.
    pub fn fee_policy(&self) -> ConfigResult<FeePolicy> {
        Ok(FeePolicy::new(self.fee_config()?)?)
    }

    /// Builds the widget embed for a creator on the configured origin.
    pub fn widget_embed(&self, username: &str) -> ConfigResult<WidgetEmbed> {
        Ok(WidgetEmbed::new(&self.widget.origin, username)?)
    }

    /// Applies `XRPTIP_*` overrides from `lookup`.
    ///
    /// Unparseable numbers are logged and skipped so the file value stays.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = var("FEE_PERCENTAGE") {
            override_f64("FEE_PERCENTAGE", &value, &mut self.fees.fee_percentage);
        }

        if let Some(address) = var("PLATFORM_WALLET") {
            debug!(address = %address, "Overriding platform wallet from environment");
            self.fees.platform_wallet_address = address;
        }

        if let Some(value) = var("MIN_AMOUNT_FOR_FEES") {
            override_f64("MIN_AMOUNT_FOR_FEES", &value, &mut self.fees.min_amount_for_fees);
        }

        if let Some(value) = var("MIN_FEE") {
            override_f64("MIN_FEE", &value, &mut self.fees.min_fee);
        }

        // "none" or empty removes the ceiling
        if let Some(value) = var("MAX_FEE") {
            let value = value.trim();
            if value.is_empty() || value.eq_ignore_ascii_case("none") {
                debug!("Removing fee ceiling from environment");
                self.fees.max_fee = None;
            } else {
                match value.parse::<f64>() {
                    Ok(max_fee) => {
                        debug!(max_fee, "Overriding fee ceiling from environment");
                        self.fees.max_fee = Some(max_fee);
                    }
                    Err(_) => warn!(value = %value, "Ignoring unparseable XRPTIP_MAX_FEE"),
                }
            }
        }

        if let Some(symbol) = var("CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(origin) = var("WIDGET_ORIGIN") {
            debug!(origin = %origin, "Overriding widget origin from environment");
            self.widget.origin = origin;
        }

        if let Some(size) = var("WIDGET_SIZE") {
            match WidgetSize::from_name(&size) {
                Some(size) => self.widget.default_size = size,
                None => warn!(size = %size, "Unknown widget size in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "xrptip", "xrptip")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn override_f64(name: &str, value: &str, target: &mut f64) {
    match value.trim().parse::<f64>() {
        Ok(parsed) => {
            debug!(name, value = parsed, "Overriding fee setting from environment");
            *target = parsed;
        }
        Err(_) => warn!(name, value = %value, "Ignoring unparseable fee override"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
