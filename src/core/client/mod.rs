//! Public client surface + builder.
//! Internals are split into `redirect` (hop-by-hop following) and `constants` (UA + defaults).

pub(crate) mod constants;
mod redirect;

use crate::core::InjectError;
use crate::script::{
    DirResourceLoader, InjectionConfig, MapResourceLoader, ResourceLoader, ScriptAssembler,
};
use constants::{DEFAULT_MAX_REDIRECTS, USER_AGENT};
use reqwest::Client;
use reqwest::cookie::Jar;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Fetches pages and splices the configured script into them.
///
/// Cloning is cheap: clones share the HTTP connection pool, the cookie jar,
/// and the memoized script blob.
#[derive(Debug, Clone)]
pub struct InjectorClient {
    http: Client,
    assembler: Arc<ScriptAssembler>,
    max_redirects: usize,
}

impl InjectorClient {
    /// Create a new builder.
    pub fn builder() -> InjectorClientBuilder {
        InjectorClientBuilder::default()
    }

    /// Fetches `url` and returns the page with the script injected, or `None`
    /// if the request could not be completed.
    ///
    /// Failures are logged (see [`try_load_url`](Self::try_load_url) for the typed error).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, headers)))]
    pub async fn load_url(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Option<crate::FetchResult> {
        crate::fetch::load_url(self, url, headers).await
    }

    /// Fetches `url` and returns the page with the script injected.
    ///
    /// # Errors
    ///
    /// Returns `InjectError` if the URL is malformed or not http(s), a header is invalid,
    /// the request fails, the redirect limit is exceeded, or no injection config was supplied.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, headers), err))]
    pub async fn try_load_url(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<crate::FetchResult, InjectError> {
        crate::fetch::try_load_url(self, url, headers).await
    }

    /// Injects the configured script into `html` without any network I/O.
    ///
    /// Empty input is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InjectError::MissingConfig` if no config was supplied, whatever `html` holds.
    pub fn inject_js(&self, html: &str) -> Result<String, InjectError> {
        let tag = self.script_tag()?;
        Ok(crate::inject::inject_script(html, &tag))
    }

    pub(crate) fn script_tag(&self) -> Result<String, InjectError> {
        self.assembler.script_tag()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct InjectorClientBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    max_redirects: Option<usize>,
    cookie_jar: Option<Arc<Jar>>,

    config: Option<InjectionConfig>,
    config_json: Option<String>,
    resource_loader: Option<Arc<dyn ResourceLoader>>,
}

impl InjectorClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Maximum redirect hops to follow. `0` returns the first response as-is. Default: 20.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = Some(max);
        self
    }

    /// Share a cookie jar with the host (e.g. the web view's own jar).
    /// If not set, the client keeps a private jar.
    pub fn cookie_jar(mut self, jar: Arc<Jar>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// The scripts to inject, in order.
    pub fn config(mut self, config: InjectionConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The scripts to inject, as a JSON array of `[kind, value]` pairs.
    /// Decoded in [`build`](Self::build); takes precedence over [`config`](Self::config).
    pub fn config_json(mut self, json: impl Into<String>) -> Self {
        self.config_json = Some(json.into());
        self
    }

    /// Where `file` entries are resolved. Default: an empty [`MapResourceLoader`].
    pub fn resource_loader(mut self, loader: Arc<dyn ResourceLoader>) -> Self {
        self.resource_loader = Some(loader);
        self
    }

    /// Resolve `file` entries from a directory on disk.
    pub fn resource_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.resource_loader(Arc::new(DirResourceLoader::new(dir)))
    }

    pub fn build(self) -> Result<InjectorClient, InjectError> {
        let config = match self.config_json {
            Some(json) => Some(InjectionConfig::from_json(&json)?),
            None => self.config,
        };
        let loader: Arc<dyn ResourceLoader> = match self.resource_loader {
            Some(loader) => loader,
            None => Arc::new(MapResourceLoader::default()),
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .redirect(reqwest::redirect::Policy::none());

        httpb = match self.cookie_jar {
            Some(jar) => httpb.cookie_provider(jar),
            None => httpb.cookie_store(true),
        };
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(InjectorClient {
            http,
            assembler: Arc::new(ScriptAssembler::new(config, loader)),
            max_redirects: self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS),
        })
    }
}
