//! jsinject-rs: fetch a page and bootstrap your own JavaScript into it.
//!
//! The client fetches a URL, splices a `<script>` tag built from the configured
//! fragments in front of the first `<script>`, IE conditional comment, or
//! `</head>` in the HTML, and reports the response metadata a web view needs to
//! render the result (status, final URL, MIME type, charset, redirect flag).
//!
//! ```no_run
//! use jsinject_rs::{InjectionConfig, InjectorClient};
//! use std::collections::HashMap;
//!
//! # async fn run() -> Result<(), jsinject_rs::InjectError> {
//! let client = InjectorClient::builder()
//!     .config(InjectionConfig::from_pairs([("string", "window.injected = true;")]))
//!     .build()?;
//!
//! if let Some(page) = client.load_url("https://example.com/", &HashMap::new()).await {
//!     println!("{} {} ({})", page.status, page.final_url, page.mime_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod fetch;
pub mod inject;
pub mod response;
pub mod script;

pub use crate::core::{InjectError, InjectorClient, InjectorClientBuilder};
pub use inject::{inject_script, injection_point};
pub use response::{ContentType, FetchResult};
pub use script::{
    DirResourceLoader, InjectionConfig, MapResourceLoader, ResourceLoader, ScriptAssembler,
    ScriptSource,
};

/// Re-exported so hosts can share a cookie jar without depending on `reqwest` directly.
pub use reqwest::cookie::Jar as CookieJar;
