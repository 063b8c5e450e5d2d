//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by `main`, the HTTP server and handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Public base URL of the storefront, used to build checkout return URLs.
    pub site_url: String,
    /// Shared secret for the admin API. Admin routes reject everything when unset.
    #[serde(default)]
    pub admin_token: Option<String>,
    /// Payment provider key; checkout is unavailable without it.
    #[serde(default)]
    pub payment_api_key: Option<String>,
}

impl ServerConfig {
    /// The admin token, treating an empty value as unset.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref().filter(|token| !token.is_empty())
    }
}
