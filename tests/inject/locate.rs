use jsinject_rs::injection_point;

#[test]
fn script_before_head_close_wins() {
    let html = "<html><head><script src=\"a.js\"></script></head></html>";
    assert_eq!(injection_point(html), html.find("<script"));
}

#[test]
fn falls_back_to_head_close() {
    let html = "<html><head><title>x</title></head><body></body></html>";
    assert_eq!(injection_point(html), html.find("</head"));
}

#[test]
fn ie_conditional_before_script_wins() {
    let html = "<head><!--[if lt IE 9]><p>old</p><![endif]--><script></script></head>";
    assert_eq!(injection_point(html), Some(6));
}

#[test]
fn script_before_ie_conditional_wins() {
    let html = "<head><script></script><!--[if IE]><![endif]--></head>";
    assert_eq!(injection_point(html), Some(6));
}

#[test]
fn ie_conditional_alone_is_used() {
    let html = "<body><!--[if IE]>legacy<![endif]--></body>";
    assert_eq!(injection_point(html), Some(6));
}

#[test]
fn markers_match_regardless_of_case() {
    assert_eq!(injection_point("<HEAD><SCRIPT></SCRIPT>"), Some(6));
    assert_eq!(injection_point("<Head></HeAd>"), Some(6));
    assert_eq!(injection_point("<p><!--[IF IE]><![endif]-->"), Some(3));
}

#[test]
fn none_when_no_marker_present() {
    assert_eq!(injection_point("<html><body>plain</body></html>"), None);
    assert_eq!(injection_point(""), None);
    assert_eq!(injection_point("<scrip"), None);
}

#[test]
fn offset_is_a_byte_offset_after_multibyte_text() {
    let html = "<title>héllo wörld</title></head>";
    let pos = injection_point(html).unwrap();
    assert!(html.is_char_boundary(pos));
    assert!(html[pos..].starts_with("</head>"));
}

#[test]
fn marker_inside_comment_is_still_matched() {
    // Text heuristic: a `<script` mentioned in a comment counts.
    let html = "<!-- see <script> below --><head></head>";
    assert_eq!(injection_point(html), Some(9));
}
