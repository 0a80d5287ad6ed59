//! Error type for route resolution.

/// The configured base URL could not be parsed.
///
/// A malformed base URL is a misconfiguration: callers should surface it as a
/// startup failure instead of retrying, since the input is static.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid base URL {value:?}")]
pub struct InvalidConfigurationError {
    /// The raw value that failed to parse.
    pub value: String,
    #[source]
    pub source: url::ParseError,
}

impl InvalidConfigurationError {
    pub(crate) fn new(value: &str, source: url::ParseError) -> Self {
        Self {
            value: value.to_string(),
            source,
        }
    }
}
