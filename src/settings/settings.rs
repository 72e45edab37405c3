use anyhow::{Result, anyhow};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub auth: Auth,
    pub http: Http,
    pub log: Log,
    pub provider: Provider,
}

#[derive(Debug, Deserialize)]
pub struct Auth {
    pub backend: String, // "fake" or "real"
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

/// Identity-provider connection. `base_url`, `service_role_key` and
/// `anon_key` have no defaults: a missing value fails startup rather
/// than surfacing per-request.
#[derive(Deserialize)]
pub struct Provider {
    pub base_url: String,
    /// Privileged key, used only for directory scanning.
    pub service_role_key: String,
    /// Public key, used only for password verification.
    pub anon_key: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_page_size() -> u32 {
    200
}

fn default_max_pages() -> u32 {
    50
}

fn default_request_timeout_secs() -> u64 {
    10
}

// Settings are logged at startup; keep the keys out of that.
impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("base_url", &self.base_url)
            .field("service_role_key", &"<redacted>")
            .field("anon_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// File settings with an environment overlay, so the provider keys can
/// come from e.g. `ANTEROOM__PROVIDER__SERVICE_ROLE_KEY` instead of
/// living in the TOML file.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .add_source(
            Environment::with_prefix("ANTEROOM")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
