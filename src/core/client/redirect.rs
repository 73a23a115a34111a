//! Hop-by-hop redirect following.
//!
//! The underlying `reqwest::Client` is built with redirects disabled so the
//! chain stays visible: we need to know what the response before the final
//! one looked like.

use crate::core::InjectError;
use reqwest::header::{AUTHORIZATION, HeaderMap, LOCATION};
use reqwest::{Response, StatusCode};
use url::Url;

/// The final response of a request plus what we saw on the way there.
pub(crate) struct Fetched {
    pub(crate) response: Response,
    /// Status of the response immediately before `response`, if any hop was followed.
    pub(crate) prior_status: Option<StatusCode>,
}

impl Fetched {
    pub(crate) fn was_redirect(&self) -> bool {
        self.prior_status.is_some_and(|s| s.is_redirection())
    }
}

fn follows(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MULTIPLE_CHOICES
            | StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// Resolves the `Location` header against the URL that produced it.
fn redirect_target(resp: &Response, current: &Url) -> Option<Url> {
    let location = resp.headers().get(LOCATION)?.to_str().ok()?;
    let next = current.join(location).ok()?;
    matches!(next.scheme(), "http" | "https").then_some(next)
}

impl super::InjectorClient {
    pub(crate) async fn send_following_redirects(
        &self,
        url: Url,
        headers: HeaderMap,
    ) -> Result<Fetched, InjectError> {
        let max = self.max_redirects();
        let mut headers = headers;
        let mut current = url.clone();
        let mut prior_status = None;
        let mut hops = 0usize;

        loop {
            let resp = self
                .http()
                .get(current.clone())
                .headers(headers.clone())
                .send()
                .await?;
            let status = resp.status();

            if max == 0 || !follows(status) {
                return Ok(Fetched {
                    response: resp,
                    prior_status,
                });
            }
            let Some(next) = redirect_target(&resp, &current) else {
                return Ok(Fetched {
                    response: resp,
                    prior_status,
                });
            };

            hops += 1;
            if hops > max {
                return Err(InjectError::TooManyRedirects {
                    max,
                    url: url.to_string(),
                });
            }

            if next.host_str() != current.host_str()
                || next.port_or_known_default() != current.port_or_known_default()
            {
                headers.remove(AUTHORIZATION);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(from = %current, to = %next, status = status.as_u16(), "following redirect");

            prior_status = Some(status);
            current = next;
        }
    }
}
