use crate::common::scripts_dir;
use jsinject_rs::{DirResourceLoader, InjectionConfig, InjectorClient, ResourceLoader};

#[test]
fn dir_loader_resolves_exact_name_and_js_extension() {
    let loader = DirResourceLoader::new(scripts_dir());
    assert_eq!(
        loader.load("bootstrap").as_deref(),
        Some(&b"console.log(\"bootstrap\");\n"[..])
    );
    assert_eq!(
        loader.load("provider").as_deref(),
        Some(&b"window.ethereum = window.ethereum || {};\n"[..])
    );
}

#[test]
fn dir_loader_reports_missing_files_as_none() {
    let loader = DirResourceLoader::new(scripts_dir());
    assert!(loader.load("nope").is_none());
}

#[test]
fn dir_loader_rejects_names_that_leave_the_root() {
    let loader = DirResourceLoader::new(scripts_dir().join("nested-root"));
    assert!(loader.load("../provider").is_none());
    assert!(loader.load("../provider.js").is_none());
    assert!(loader.load("/etc/hostname").is_none());
    assert!(loader.load("").is_none());
    assert!(loader.load("..").is_none());
}

#[test]
fn client_reads_files_from_resource_dir() {
    let client = InjectorClient::builder()
        .config(InjectionConfig::from_pairs([
            ("file", "provider"),
            ("file", "absent"),
            ("string", "start();"),
        ]))
        .resource_dir(scripts_dir())
        .build()
        .unwrap();

    let out = client.inject_js("<html><head></head></html>").unwrap();
    assert_eq!(
        out,
        "<html><head><script type=\"text/javascript\">window.ethereum = window.ethereum || {};\nstart();</script></head></html>"
    );
}
