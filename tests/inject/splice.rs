use crate::common::{PAGE, client_with, inline, tag};
use jsinject_rs::{InjectError, InjectorClient, inject_script};

#[test]
fn injects_console_log_before_head_close() {
    let client = client_with(inline("console.log(1)"));
    let out = client.inject_js(PAGE).unwrap();
    assert_eq!(
        out,
        "<html><head><script type=\"text/javascript\">console.log(1)</script></head><body></body></html>"
    );
}

#[test]
fn injects_immediately_before_first_script() {
    let html = "<head><meta charset=\"utf-8\"><script src=\"app.js\"></script></head>";
    let out = inject_script(html, "<X>");
    assert_eq!(
        out,
        "<head><meta charset=\"utf-8\"><X><script src=\"app.js\"></script></head>"
    );
}

#[test]
fn html_without_markers_is_returned_unchanged() {
    let html = "<p>just a fragment</p>";
    assert_eq!(inject_script(html, "<X>"), html);

    let client = client_with(inline("ignored()"));
    assert_eq!(client.inject_js(html).unwrap(), html);
}

#[test]
fn injecting_twice_inserts_two_tags() {
    let client = client_with(inline("boot()"));
    let once = client.inject_js(PAGE).unwrap();
    let twice = client.inject_js(&once).unwrap();

    assert_eq!(twice.matches(&tag("boot()")).count(), 2);
    assert!(twice.starts_with(&format!("<html><head>{}{}", tag("boot()"), tag("boot()"))));
}

#[test]
fn empty_html_is_returned_empty() {
    let client = client_with(inline("boot()"));
    assert_eq!(client.inject_js("").unwrap(), "");
}

#[test]
fn missing_config_is_an_error_even_for_empty_html() {
    let client = InjectorClient::builder().build().unwrap();
    let err = client.inject_js("").unwrap_err();
    assert!(matches!(err, InjectError::MissingConfig), "got {err:?}");
}

#[test]
fn missing_config_is_an_error_for_real_pages() {
    let client = InjectorClient::builder().build().unwrap();
    let err = client.inject_js(PAGE).unwrap_err();
    assert!(matches!(err, InjectError::MissingConfig), "got {err:?}");
}
