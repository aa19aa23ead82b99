//! Runtime configuration, read from the environment (and an optional `.env` file).
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CART_STORAGE_DIR` | `.storefront` |
//! | `CART_STORAGE_KEY` | `@imperio_bebidas:cart` |
//! | `CART_CHANNEL_CAPACITY` | `32` |
//! | `STORE_NAME` | `Império Bebidas` |
//! | `STORE_WHATSAPP` | `5518997340064` |
//! | `STORE_GREETING` | `Olá! Gostaria de fazer um pedido.` |

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_STORAGE_DIR: &str = ".storefront";
pub const DEFAULT_STORAGE_KEY: &str = "@imperio_bebidas:cart";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_STORE_NAME: &str = "Império Bebidas";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5518997340064";
pub const DEFAULT_GREETING: &str = "Olá! Gostaria de fazer um pedido.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Directory of the file-backed key-value store.
    pub storage_dir: PathBuf,
    /// Key the cart mirror is stored under.
    pub storage_key: String,
    /// Capacity of the cart actor's request channel.
    pub channel_capacity: usize,
    /// Store name printed at the top of every order message.
    pub store_name: String,
    /// Messaging number orders are sent to, digits only, with country code.
    pub whatsapp_number: String,
    /// Pre-filled text of the "talk to us" link.
    pub greeting: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            store_name: DEFAULT_STORE_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        let config = Self::from_lookup(|var| env::var(var).ok())?;
        tracing::info!(
            storage_dir = %config.storage_dir.display(),
            storage_key = %config.storage_key,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source; unset
    /// variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_capacity = match lookup("CART_CHANNEL_CAPACITY") {
            Some(raw) => {
                let capacity = raw.trim().parse::<usize>().map_err(|e| ConfigError::Invalid {
                    var: "CART_CHANNEL_CAPACITY",
                    reason: e.to_string(),
                })?;
                if capacity == 0 {
                    return Err(ConfigError::Invalid {
                        var: "CART_CHANNEL_CAPACITY",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                capacity
            }
            None => defaults.channel_capacity,
        };

        let whatsapp_number = lookup("STORE_WHATSAPP").unwrap_or(defaults.whatsapp_number);
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                var: "STORE_WHATSAPP",
                reason: format!("expected digits only, got '{whatsapp_number}'"),
            });
        }

        Ok(Self {
            storage_dir: lookup("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key: lookup("CART_STORAGE_KEY").unwrap_or(defaults.storage_key),
            channel_capacity,
            store_name: lookup("STORE_NAME").unwrap_or(defaults.store_name),
            whatsapp_number,
            greeting: lookup("STORE_GREETING").unwrap_or(defaults.greeting),
        })
    }
}
