#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use jsinject_rs::{InjectionConfig, InjectorClient};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const PAGE: &str = "<html><head></head><body></body></html>";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn scripts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scripts")
}

pub fn inline(script: &str) -> InjectionConfig {
    InjectionConfig::from_pairs([("string", script)])
}

pub fn client_with(config: InjectionConfig) -> InjectorClient {
    InjectorClient::builder().config(config).build().unwrap()
}

pub fn no_headers() -> HashMap<String, String> {
    HashMap::new()
}

pub fn tag(script: &str) -> String {
    format!("<script type=\"text/javascript\">{script}</script>")
}

pub fn mock_page<'a>(server: &'a MockServer, path: &'a str, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}
