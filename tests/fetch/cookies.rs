use crate::common::{PAGE, client_with, inline, no_headers, setup_server};
use httpmock::Method::GET;
use jsinject_rs::{CookieJar, InjectorClient};
use std::sync::Arc;
use url::Url;

#[tokio::test]
async fn cookies_set_during_redirect_are_sent_on_next_hop() {
    let server = setup_server();
    let login = server.mock(|when, then| {
        when.method(GET).path("/login");
        then.status(302)
            .header("set-cookie", "session=abc; Path=/")
            .header("location", "/home");
    });
    let home = server.mock(|when, then| {
        when.method(GET).path("/home").header("cookie", "session=abc");
        then.status(200).header("content-type", "text/html").body(PAGE);
    });

    let client = client_with(inline("c()"));
    let res = client
        .try_load_url(&format!("{}/login", server.base_url()), &no_headers())
        .await
        .unwrap();
    login.assert();
    home.assert();
    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn host_supplied_jar_is_used() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/account").header("cookie", "token=xyz");
        then.status(200).header("content-type", "text/html").body(PAGE);
    });

    let base = Url::parse(&server.base_url()).unwrap();
    let jar = Arc::new(CookieJar::default());
    jar.add_cookie_str("token=xyz; Path=/", &base);

    let client = InjectorClient::builder()
        .config(inline("c()"))
        .cookie_jar(jar)
        .build()
        .unwrap();
    let res = client
        .try_load_url(&format!("{}/account", server.base_url()), &no_headers())
        .await
        .unwrap();
    mock.assert();
    assert_eq!(res.status, 200);
}
