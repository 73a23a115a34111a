//! Fetch → normalize → inject.

use crate::core::{InjectError, InjectorClient, debug_enabled};
use crate::response::{ContentType, FetchResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use url::Url;

/// Runs [`try_load_url`] and turns any failure into `None` after logging it.
pub async fn load_url(
    client: &InjectorClient,
    url: &str,
    headers: &HashMap<String, String>,
) -> Option<FetchResult> {
    match try_load_url(client, url, headers).await {
        Ok(result) => Some(result),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(url, error = %e, "request failed");
            if debug_enabled() {
                eprintln!("JSINJECT_DEBUG: request to {url} failed: {e}");
            }
            None
        }
    }
}

/// Fetches `url` with `headers`, injects the configured script into the body,
/// and reports the final response's metadata.
///
/// The script is resolved as soon as a response arrives, so a client without an
/// injection config fails for every page, with or without a body.
/// Only 2xx bodies are read. A body that fails to read is reported as `None`
/// rather than as an error.
///
/// # Errors
///
/// See [`InjectorClient::try_load_url`].
pub async fn try_load_url(
    client: &InjectorClient,
    url: &str,
    headers: &HashMap<String, String>,
) -> Result<FetchResult, InjectError> {
    let url = parse_url(url)?;
    let headers = build_headers(headers)?;

    let fetched = client.send_following_redirects(url, headers).await?;
    let was_redirect = fetched.was_redirect();
    let resp = fetched.response;

    let status = resp.status();
    let final_url = resp.url().clone();
    let content_type = ContentType::from_headers(resp.headers());
    let tag = client.script_tag()?;

    let body = if status.is_success() {
        read_body(resp, &final_url).await
    } else {
        None
    };
    let body = match body {
        Some(html) => Some(inject(&html, &tag, &final_url)),
        None => None,
    };

    Ok(FetchResult {
        body,
        status: status.as_u16(),
        final_url: final_url.to_string(),
        mime_type: content_type.mime_type().to_string(),
        charset: content_type.charset().to_string(),
        was_redirect,
    })
}

/// Rejects anything that is not an absolute http(s) URL before touching the network.
fn parse_url(raw: &str) -> Result<Url, InjectError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(InjectError::UnsupportedScheme(other.to_string())),
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap, InjectError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || InjectError::InvalidHeader { name: name.clone() };
        let key = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let val = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.append(key, val);
    }
    Ok(map)
}

async fn read_body(resp: reqwest::Response, url: &Url) -> Option<String> {
    match resp.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(url = %url, error = %e, "failed to read response body");
            if debug_enabled() {
                eprintln!("JSINJECT_DEBUG: failed to read body of {url}: {e}");
            }
            None
        }
    }
}

fn inject(html: &str, tag: &str, _url: &Url) -> String {
    let injected = crate::inject::inject_script(html, tag);

    #[cfg(feature = "debug-dumps")]
    {
        if debug_enabled() {
            let name = crate::inject::debug::dump_name(_url);
            if let Err(e) = crate::inject::debug::debug_dump_injection(&name, html, &injected) {
                eprintln!("JSINJECT_DEBUG: failed to dump injection for {_url}: {e}");
            }
        }
    }

    injected
}
