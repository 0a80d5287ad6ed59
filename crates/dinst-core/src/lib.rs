pub mod config;
pub mod connection;
pub mod error;
pub mod logging;
pub mod route;

pub use config::{EnvConfig, BASE_URL_VAR, LOCAL_CONNECTION_VAR};
pub use error::InvalidConfigurationError;
pub use route::{main_page_url, resolve_main_page_path, MainPage};
