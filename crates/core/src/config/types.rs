use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub wiki: WikiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Open the user's browser on the served page after startup
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
    /// Delay before the browser is opened, in milliseconds
    #[serde(default = "default_browser_delay_ms")]
    pub browser_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: default_open_browser(),
            browser_delay_ms: default_browser_delay_ms(),
        }
    }
}

impl ServerConfig {
    /// URL a local browser should use to reach the server.
    pub fn local_url(&self) -> String {
        let host = if self.host.is_unspecified() {
            "localhost".to_string()
        } else {
            match self.host {
                IpAddr::V4(v4) => v4.to_string(),
                IpAddr::V6(v6) => format!("[{}]", v6),
            }
        };
        format!("http://{}:{}", host, self.port)
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    3000
}

fn default_open_browser() -> bool {
    true
}

fn default_browser_delay_ms() -> u64 {
    2000
}

/// Upstream wiki (MediaWiki) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikiConfig {
    /// Wiki origin, e.g. "https://bulbapedia.bulbagarden.net"
    #[serde(default = "default_wiki_base_url")]
    pub base_url: String,
    /// Path of the MediaWiki API endpoint
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Path prefix for article pages
    #[serde(default = "default_page_path")]
    pub page_path: String,
    /// Request timeout in seconds. Unset means the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// User-Agent sent to the wiki
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: default_wiki_base_url(),
            api_path: default_api_path(),
            page_path: default_page_path(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl WikiConfig {
    /// Full URL of the MediaWiki API endpoint.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.api_path)
    }

    /// Prefix that article titles are appended to.
    pub fn page_url_prefix(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.page_path)
    }
}

fn default_wiki_base_url() -> String {
    "https://bulbapedia.bulbagarden.net".to_string()
}

fn default_api_path() -> String {
    "/w/api.php".to_string()
}

fn default_page_path() -> String {
    "/wiki/".to_string()
}

fn default_user_agent() -> String {
    format!("cardscout/{}", env!("CARGO_PKG_VERSION"))
}
