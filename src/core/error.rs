use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// [`InjectorClient::load_url`](crate::InjectorClient::load_url) collapses every
/// variant into `None`; [`try_load_url`](crate::InjectorClient::try_load_url)
/// hands them back so callers can tell the failures apart.
#[derive(Debug, Error)]
pub enum InjectError {
    /// An error occurred during an HTTP request or while building the client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The URL parsed, but its scheme is not `http` or `https`.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// A caller-supplied request header had an invalid name or value.
    #[error("Invalid request header: {name}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The redirect chain grew past the configured limit.
    #[error("Too many redirects ({max}) while fetching {url}")]
    TooManyRedirects {
        /// The configured hop limit.
        max: usize,
        /// The URL that was requested.
        url: String,
    },

    /// A script had to be injected but no injection config was ever supplied.
    #[error("injection config must be set")]
    MissingConfig,

    /// The injection config JSON could not be decoded.
    #[error("Invalid injection config: {0}")]
    Config(#[from] serde_json::Error),
}
