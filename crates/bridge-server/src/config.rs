//! Configuration for the bridge server.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Bridge server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Bridge routing configuration
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// SendGrid email delivery configuration
    #[serde(default)]
    pub sendgrid: SendGridConfig,

    /// Vonage SMS delivery configuration
    #[serde(default)]
    pub vonage: VonageConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Domain used for synthetic reply addresses
    #[serde(default)]
    pub email_domain: String,

    /// ISO region assumed for phone numbers without a country prefix
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Path to the address book file
    #[serde(default = "default_address_book_path")]
    pub address_book_path: PathBuf,

    /// Sender substituted when an email arrives through a forwarding alias
    #[serde(default)]
    pub forwarded_sender: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendGridConfig {
    /// SendGrid API key
    #[serde(default)]
    pub api_key: String,

    /// SendGrid API base URL
    #[serde(default = "default_sendgrid_api_url")]
    pub api_url: String,

    /// HTTP request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VonageConfig {
    /// Vonage API key
    #[serde(default)]
    pub api_key: String,

    /// Vonage API secret
    #[serde(default)]
    pub api_secret: String,

    /// Vonage API base URL
    #[serde(default = "default_vonage_api_url")]
    pub api_url: String,

    /// HTTP request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            email_domain: String::new(),
            default_region: default_region(),
            address_book_path: default_address_book_path(),
            forwarded_sender: None,
        }
    }
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_sendgrid_api_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for VonageConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            api_url: default_vonage_api_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_region() -> String {
    "US".into()
}

fn default_address_book_path() -> PathBuf {
    PathBuf::from("address-book.cfg")
}

fn default_sendgrid_api_url() -> String {
    "https://api.sendgrid.com".into()
}

fn default_vonage_api_url() -> String {
    "https://rest.nexmo.com".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Names of required settings that are still unset.
    ///
    /// The server starts regardless so the problem is visible on the
    /// status route rather than in a crash loop.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.bridge.email_domain.is_empty() {
            missing.push("BRIDGE__EMAIL_DOMAIN");
        }
        if self.sendgrid.api_key.is_empty() {
            missing.push("SENDGRID__API_KEY");
        }
        if self.vonage.api_key.is_empty() {
            missing.push("VONAGE__API_KEY");
        }
        if self.vonage.api_secret.is_empty() {
            missing.push("VONAGE__API_SECRET");
        }
        missing
    }
}
