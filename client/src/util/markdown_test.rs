use super::*;

#[test]
fn renders_basic_formatting() {
    let html = render_markdown_html("Run the **sauté** station.\n\n- Prep\n- Close");
    assert!(html.contains("<strong>sauté</strong>"));
    assert!(html.contains("<li>Prep</li>"));
    assert!(html.contains("<li>Close</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("Hello <script>alert(1)</script> world\n\n<div onclick=\"x()\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("Hello"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn script_link_destinations_are_neutralized() {
    let html = render_markdown_html("[apply](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript"), "{html}");
    assert!(html.contains("<a href=\"#\">apply</a>"), "{html}");

    let sneaky = render_markdown_html("[a](JavaScript:x) [c](vbscript:x)");
    assert!(!sneaky.to_ascii_lowercase().contains("script:"), "{sneaky}");
}

#[test]
fn data_image_sources_are_neutralized() {
    let html = render_markdown_html("![logo](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("data:"), "{html}");
    assert!(html.contains("src=\"#\""), "{html}");
}

#[test]
fn web_mail_and_relative_destinations_are_kept() {
    let html = render_markdown_html(
        "[site](https://osteria.example/menu) [mail](mailto:jobs@osteria.example) [about](/about) [q](menu?a=b:c)",
    );
    assert!(html.contains("href=\"https://osteria.example/menu\""), "{html}");
    assert!(html.contains("href=\"mailto:jobs@osteria.example\""), "{html}");
    assert!(html.contains("href=\"/about\""), "{html}");
    assert!(html.contains("href=\"menu?a=b:c\""), "{html}");
}

#[test]
fn safe_url_checks_scheme_only() {
    assert!(is_safe_url("http://a"));
    assert!(is_safe_url("HTTPS://a"));
    assert!(is_safe_url("#section"));
    assert!(is_safe_url("images/kitchen.jpg"));
    assert!(!is_safe_url(" javascript:x"));
    assert!(!is_safe_url("java\tscript:x"));
    assert!(!is_safe_url("file:///etc/passwd"));
}
