use super::*;

#[test]
fn is_image_type_accepts_image_mimes() {
    assert!(is_image_type("image/png"));
    assert!(is_image_type("IMAGE/JPEG"));
    assert!(is_image_type(" image/svg+xml"));
}

#[test]
fn is_image_type_rejects_others() {
    assert!(!is_image_type("application/pdf"));
    assert!(!is_image_type(""));
    assert!(!is_image_type("text/image"));
}

#[test]
fn is_inline_detects_data_urls() {
    assert!(is_inline("data:image/png;base64,AAAA"));
    assert!(!is_inline("https://cdn.example/a.png"));
}
