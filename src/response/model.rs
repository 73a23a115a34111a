use serde::Serialize;

/// A fetched page after injection, plus the response metadata a web view needs
/// to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    /// The page with the script spliced in.
    ///
    /// `None` for non-2xx responses and when the body could not be read.
    pub body: Option<String>,
    /// Status code of the final response.
    pub status: u16,
    /// URL of the final response, after any redirects.
    pub final_url: String,
    /// MIME type, `text/html` unless the content type says otherwise.
    pub mime_type: String,
    /// Charset, `utf-8` unless the content type says otherwise.
    pub charset: String,
    /// Whether the response before the final one was a redirect.
    pub was_redirect: bool,
}
