//! Main page route resolution.
//!
//! The installer UI is either served through the integration host on port
//! 9090, under a fixed sub-path, or by a standalone development server at the
//! root. Which one applies is decided from the configured base URL's port.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::config::{EnvConfig, BASE_URL_VAR};
use crate::error::InvalidConfigurationError;

/// Base URL used when `BASE_URL` is not configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9090";

/// Port (in its string form) that selects the embedded-host path.
pub const EMBEDDED_HOST_PORT: &str = "9090";

/// Entry page path when served through the integration host.
pub const EMBEDDED_HOST_PATH: &str = "/cockpit/@localhost/d-installer/index.html";

/// Entry page path when served by a standalone server.
pub const STANDALONE_ROOT_PATH: &str = "/";

/// Where the installer's entry page is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainPage {
    EmbeddedHost,
    StandaloneRoot,
}

impl MainPage {
    pub fn as_str(self) -> &'static str {
        match self {
            MainPage::EmbeddedHost => EMBEDDED_HOST_PATH,
            MainPage::StandaloneRoot => STANDALONE_ROOT_PATH,
        }
    }
}

impl fmt::Display for MainPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for MainPage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The configured base URL string, or [`DEFAULT_BASE_URL`] when unset.
pub fn base_url_value(config: &EnvConfig) -> &str {
    config.get(BASE_URL_VAR).unwrap_or(DEFAULT_BASE_URL)
}

/// Parses the configured base URL.
pub fn base_url(config: &EnvConfig) -> Result<Url, InvalidConfigurationError> {
    let raw = base_url_value(config);
    Url::parse(raw).map_err(|e| InvalidConfigurationError::new(raw, e))
}

/// Explicit port of `url` as a string; empty when none is given.
///
/// A port equal to the scheme's default is dropped by the parser, so
/// `http://host:80` yields an empty string too.
fn port_string(url: &Url) -> String {
    url.port().map(|p| p.to_string()).unwrap_or_default()
}

/// Decides the main page from an already-parsed base URL.
pub fn main_page_for(url: &Url) -> MainPage {
    if port_string(url) == EMBEDDED_HOST_PORT {
        MainPage::EmbeddedHost
    } else {
        MainPage::StandaloneRoot
    }
}

/// Resolves the path at which the installer's entry page is served.
///
/// Only the declared port of `BASE_URL` matters: exactly `9090` selects the
/// embedded-host path, anything else (including no explicit port) the root.
pub fn resolve_main_page_path(config: &EnvConfig) -> Result<MainPage, InvalidConfigurationError> {
    let url = base_url(config)?;
    let page = main_page_for(&url);
    tracing::debug!(base_url = %url, path = page.as_str(), "resolved main page");
    Ok(page)
}

/// Absolute URL of the main page: the base URL with its path swapped for the
/// resolved one. Query and fragment are dropped.
pub fn main_page_url(config: &EnvConfig) -> Result<Url, InvalidConfigurationError> {
    Ok(main_page_url_for(&base_url(config)?))
}

/// [`main_page_url`] for an already-parsed base URL.
pub fn main_page_url_for(base: &Url) -> Url {
    let mut url = base.clone();
    url.set_path(main_page_for(base).as_str());
    url.set_query(None);
    url.set_fragment(None);
    url
}
