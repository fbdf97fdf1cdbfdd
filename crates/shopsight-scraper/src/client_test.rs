use super::*;

#[test]
fn store_root_strips_path_and_query() {
    let root = store_root("https://shop.example/collections/all?sort=price").unwrap();
    assert_eq!(root.as_str(), "https://shop.example/");
}

#[test]
fn store_root_keeps_non_default_port() {
    let root = store_root("http://127.0.0.1:8080/pages/about").unwrap();
    assert_eq!(root.as_str(), "http://127.0.0.1:8080/");
}

#[test]
fn store_root_is_idempotent() {
    let once = store_root("https://shop.example").unwrap();
    let twice = store_root(once.as_str()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn store_root_rejects_relative_url() {
    let err = store_root("shop.example/products").unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidStoreUrl { .. }));
}

#[test]
fn store_root_rejects_hostless_url() {
    let err = store_root("mailto:hello@shop.example").unwrap_err();
    assert!(
        matches!(err, ScrapeError::InvalidStoreUrl { ref reason, .. } if reason.contains("no host"))
    );
}
