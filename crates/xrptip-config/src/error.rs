//! # Config Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Config Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   File          │  │    Values       │  │     Economics           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Io             │  │  InvalidValue   │  │  Validation             │ │
//! │  │  Parse          │  │  InvalidUrl     │  │  (from xrptip-core)     │ │
//! │  │  Serialize      │  │                 │  │                         │ │
//! │  │  NoConfigPath   │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use xrptip_core::ValidationError;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    // =========================================================================
    // File Errors
    // =========================================================================
    /// Reading or writing the config file failed.
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file isn't valid TOML for `TipConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config couldn't be written back as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No explicit path and no platform config directory.
    #[error("No config path available")]
    NoConfigPath,

    // =========================================================================
    // Value Errors
    // =========================================================================
    /// A setting holds a value that can't become an XRP amount.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Widget origin isn't an http(s) URL.
    #[error("Invalid widget origin: {0}")]
    InvalidUrl(String),

    // =========================================================================
    // Economics Errors
    // =========================================================================
    /// The fee settings break a fee policy invariant.
    #[error("Invalid fee configuration: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidValue {
            field: "min_fee".to_string(),
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for min_fee: -1");

        let err: ConfigError = ValidationError::Required {
            field: "platform_wallet_address".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid fee configuration: platform_wallet_address is required"
        );
    }
}
