//! Search-results parsing: every external anchor, normalized to a site root.
//!
//! DuckDuckGo's HTML surface wraps result links in a redirect of the form
//! `//duckduckgo.com/l/?uddg=<urlencoded target>&rut=...`; those are
//! unwrapped to the real target before normalization.

use scraper::{Html, Selector};
use url::Url;

/// Extracts candidate site roots from a results page, in document order.
///
/// Duplicates are NOT removed here; the caller dedupes across queries.
pub(crate) fn extract_candidate_roots(html: &str) -> Vec<Url> {
    let doc = Html::parse_document(html);
    let anchor_sel = Selector::parse("a[href]").expect("valid anchor selector");

    doc.select(&anchor_sel)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(resolve_target)
        .filter_map(|target| site_root(&target))
        .collect()
}

/// Resolves an anchor href to the real target URL.
///
/// Protocol-relative hrefs are assumed https. Redirect-wrapper links are
/// unwrapped via their `uddg` parameter. Relative and non-http(s) links
/// yield `None`.
fn resolve_target(href: &str) -> Option<Url> {
    let full = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_owned()
    };

    let parsed = Url::parse(&full).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        let target = parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())?;
        return Url::parse(&target)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"));
    }

    Some(parsed)
}

/// Scheme+host root with trailing slash, or `None` for hostless URLs.
fn site_root(url: &Url) -> Option<Url> {
    let origin = url.origin();
    if !origin.is_tuple() {
        return None;
    }
    Url::parse(&format!("{}/", origin.ascii_serialization())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_roots_in_document_order() {
        let html = concat!(
            r#"<a href="https://shop-a.example/products/thing">A</a>"#,
            r#"<a href="https://shop-b.example/">B</a>"#,
        );
        let roots: Vec<_> = extract_candidate_roots(html)
            .iter()
            .map(Url::to_string)
            .collect();
        assert_eq!(roots, vec!["https://shop-a.example/", "https://shop-b.example/"]);
    }

    #[test]
    fn unwraps_duckduckgo_redirect_links() {
        let html = r#"<a href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fshop-c.example%2Fcollections%2Fall&rut=abc">C</a>"#;
        let roots = extract_candidate_roots(html);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].as_str(), "https://shop-c.example/");
    }

    #[test]
    fn skips_relative_and_non_http_links() {
        let html = concat!(
            r#"<a href="/settings">settings</a>"#,
            r#"<a href="mailto:ops@ddg.example">mail</a>"#,
            r#"<a href="javascript:void(0)">js</a>"#,
        );
        assert!(extract_candidate_roots(html).is_empty());
    }

    #[test]
    fn keeps_duplicates_for_caller_to_dedupe() {
        let html = concat!(
            r#"<a href="https://shop-a.example/one">1</a>"#,
            r#"<a href="https://shop-a.example/two">2</a>"#,
        );
        assert_eq!(extract_candidate_roots(html).len(), 2);
    }
}
