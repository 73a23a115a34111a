//! Centralized constants for request defaults and response normalization.

/// Default mobile web-view UA so servers hand back the page a phone would get.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Linux; Android 14; Mobile) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Mobile Safari/537.36"
);

/// MIME type reported when there is no content type, or no `;`-delimited type part.
pub(crate) const DEFAULT_MIME_TYPE: &str = "text/html";

/// Charset reported when the content type has no usable `charset` parameter.
pub(crate) const DEFAULT_CHARSET: &str = "utf-8";

/// Redirect hops followed before giving up.
pub(crate) const DEFAULT_MAX_REDIRECTS: usize = 20;

/// Opening half of the tag wrapped around the script blob.
pub(crate) const SCRIPT_TAG_OPEN: &str = "<script type=\"text/javascript\">";

/// Closing half of the tag wrapped around the script blob.
pub(crate) const SCRIPT_TAG_CLOSE: &str = "</script>";
