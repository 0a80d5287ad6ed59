//! Local vs. remote connection detection.
//!
//! The installer should behave the same regardless of where it is reached
//! from; this is only meant for the few places that must differ (e.g.
//! offering to change the keyboard layout of the local console).

use url::Url;

use crate::config::{EnvConfig, LOCAL_CONNECTION_VAR};
use crate::error::InvalidConfigurationError;
use crate::route;

/// Whether `location` is reached through the loopback device.
///
/// `LOCAL_CONNECTION=1` forces `true`, which is handy for development.
pub fn local_connection(config: &EnvConfig, location: &Url) -> bool {
    if config.get(LOCAL_CONNECTION_VAR) == Some("1") {
        return true;
    }

    match location.host_str() {
        Some(host) => host == "localhost" || host.starts_with("127."),
        None => false,
    }
}

/// [`local_connection`] applied to the configured base URL.
pub fn local_connection_for_base_url(config: &EnvConfig) -> Result<bool, InvalidConfigurationError> {
    let url = route::base_url(config)?;
    Ok(local_connection(config, &url))
}
