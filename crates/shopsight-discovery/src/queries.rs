//! Search-query construction, biased toward the target platform.

/// Queries to run, in order. With a known brand name three variants are
/// used; otherwise two built from the bare host (minus any `www.` prefix).
pub(crate) fn build_queries(brand_name: Option<&str>, host: &str) -> Vec<String> {
    match brand_name {
        Some(name) if !name.trim().is_empty() => {
            let name = name.trim();
            vec![
                format!("{name} shopify"),
                format!("{name} competitors shopify"),
                format!("{name} similar brands shopify"),
            ]
        }
        _ => {
            let bare = host.strip_prefix("www.").unwrap_or(host);
            vec![
                format!("{bare} competitors shopify"),
                format!("{bare} similar brands shopify"),
            ]
        }
    }
}
