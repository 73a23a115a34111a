use crate::core::client::constants::{DEFAULT_CHARSET, DEFAULT_MIME_TYPE};
use reqwest::header::{CONTENT_TYPE, HeaderMap};

/// MIME type and charset pulled out of a `Content-Type` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    raw: Option<String>,
    mime_type: String,
    charset: String,
}

impl Default for ContentType {
    /// What a response without a `Content-Type` header is treated as.
    fn default() -> Self {
        Self {
            raw: None,
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

impl ContentType {
    /// Tokenizes a header value: the type is whatever precedes the first `;`,
    /// parameters are `key=value` pairs after it.
    ///
    /// A value without `;` (or with nothing before it) reports `text/html`.
    /// A missing or empty `charset` parameter reports `utf-8`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (mime, params) = match raw.split_once(';') {
            Some((mime, params)) => (mime.trim(), Some(params)),
            None => ("", None),
        };

        let mime_type = if mime.is_empty() { DEFAULT_MIME_TYPE } else { mime };
        let charset = params.and_then(charset_param).unwrap_or(DEFAULT_CHARSET);

        Self {
            raw: Some(raw.to_string()),
            mime_type: mime_type.to_string(),
            charset: charset.to_string(),
        }
    }

    /// Reads `Content-Type` from `headers`, falling back to [`ContentType::default`]
    /// when it is absent, empty, or not valid text.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        content_type_header(headers).map_or_else(Self::default, Self::parse)
    }

    /// The header value this was parsed from, trimmed. `None` for the default.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }
}

/// The trimmed `Content-Type` value. Header names are matched case-insensitively.
pub fn content_type_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CONTENT_TYPE)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// First usable `charset=` parameter, cut down to its leading `[A-Za-z0-9-]` run.
fn charset_param(params: &str) -> Option<&str> {
    params.split(';').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"');
        let end = value
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(value.len());
        let value = &value[..end];
        (!value.is_empty()).then_some(value)
    })
}
