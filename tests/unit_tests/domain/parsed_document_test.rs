use schemapdf::domain::{DocumentContent, PageImage};

#[test]
fn given_png_bytes_when_building_data_uri_then_uses_base64_png_prefix() {
    let page = PageImage::new(1, b"abc".to_vec());
    assert_eq!(page.to_data_uri(), "data:image/png;base64,YWJj");
}

#[test]
fn given_content_variants_when_naming_then_returns_kind() {
    assert_eq!(DocumentContent::Text("x".to_string()).kind(), "text");
    assert_eq!(DocumentContent::Pages(Vec::new()).kind(), "pages");
}
