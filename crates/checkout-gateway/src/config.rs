//! Gateway Configuration
//!
//! Server-side settings read from the environment. Nothing here is fatal at
//! startup: missing values are reported per request as configuration errors.

use std::str::FromStr;

use crate::error::{GatewayError, Result};
use crate::order::TokenLocator;

/// Crossmint API revision used for order creation
pub const API_VERSION: &str = "2022-06-09";

pub const API_KEY_VAR: &str = "CROSSMINT_SERVER_SIDE_API_KEY";
pub const ENV_VAR: &str = "CROSSMINT_ENV";
pub const BASE_URL_VAR: &str = "CROSSMINT_BASE_URL";
pub const CHAIN_ID_VAR: &str = "NEXT_PUBLIC_CHAIN_ID";
pub const ASSET_MINT_VAR: &str = "NEXT_PUBLIC_USDC_MINT";

/// Crossmint deployment target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossmintEnv {
    #[default]
    Staging,
    Production,
}

impl CrossmintEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrossmintEnv::Staging => "staging",
            CrossmintEnv::Production => "production",
        }
    }

    /// Host serving the order API for this environment.
    ///
    /// Production is served from `www.crossmint.com`; there is no
    /// `production.crossmint.com` host.
    pub fn base_url(&self) -> &'static str {
        match self {
            CrossmintEnv::Staging => "https://staging.crossmint.com",
            CrossmintEnv::Production => "https://www.crossmint.com",
        }
    }
}

impl FromStr for CrossmintEnv {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "staging" => Ok(CrossmintEnv::Staging),
            // `www` names the production host directly
            "production" | "www" => Ok(CrossmintEnv::Production),
            other => Err(GatewayError::Configuration(format!(
                "{ENV_VAR} must be 'staging' or 'production', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for CrossmintEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order gateway configuration
#[derive(Clone, Default)]
pub struct GatewayConfig {
    /// Server-side API secret, sent as `x-api-key`
    pub api_key: Option<String>,

    /// Deployment target
    pub env: CrossmintEnv,

    /// Overrides the environment host (local mocks, proxies)
    pub base_url: Option<String>,

    /// Chain identifier for the token locator
    pub chain_id: Option<String>,

    /// Stablecoin mint/address for the token locator
    pub asset_mint: Option<String>,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("env", &self.env)
            .field("base_url", &self.base_url)
            .field("chain_id", &self.chain_id)
            .field("asset_mint", &self.asset_mint)
            .finish()
    }
}

impl GatewayConfig {
    /// Read configuration from environment variables
    pub fn from_env() -> Self {
        let env = match non_empty_var(ENV_VAR) {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to staging");
                CrossmintEnv::Staging
            }),
            None => CrossmintEnv::Staging,
        };

        Self {
            api_key: non_empty_var(API_KEY_VAR),
            env,
            base_url: non_empty_var(BASE_URL_VAR),
            chain_id: non_empty_var(CHAIN_ID_VAR),
            asset_mint: non_empty_var(ASSET_MINT_VAR),
        }
    }

    /// Whether the API secret is present
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API secret, or a configuration error naming the missing variable
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Configuration(format!("{API_KEY_VAR} missing")))
    }

    /// Token locator for the configured chain and asset
    pub fn token_locator(&self) -> Result<TokenLocator> {
        let chain = self
            .chain_id
            .as_deref()
            .ok_or_else(|| GatewayError::Configuration(format!("{CHAIN_ID_VAR} missing")))?;
        let mint = self
            .asset_mint
            .as_deref()
            .ok_or_else(|| GatewayError::Configuration(format!("{ASSET_MINT_VAR} missing")))?;

        Ok(TokenLocator::single_asset(chain, mint))
    }

    /// Full URL of the order-creation endpoint
    pub fn orders_url(&self) -> String {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.env.base_url())
            .trim_end_matches('/');

        format!("{base}/api/{API_VERSION}/orders")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
