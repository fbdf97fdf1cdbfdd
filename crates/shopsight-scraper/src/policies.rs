//! Policy-page extraction.
//!
//! Unlike the other probes, every policy kind is fetched independently and
//! all resolving pages are collected — a store may publish any subset.

use scraper::Html;
use url::Url;

use shopsight_core::{Policy, PolicyKind};

use crate::client::StorefrontClient;
use crate::text::{document_text, text_excerpt};

/// Characters kept from the normalized policy page text.
const EXCERPT_CHARS: usize = 800;

pub async fn fetch_policies(client: &StorefrontClient, base: &Url) -> Vec<Policy> {
    let mut out = Vec::new();

    for kind in PolicyKind::all() {
        let Ok(url) = base.join(kind.path()) else {
            continue;
        };
        match client.get_text(url.clone()).await {
            Ok(body) => {
                out.push(Policy {
                    kind,
                    url: Some(url.to_string()),
                    text_excerpt: Some(page_excerpt(&body)),
                });
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "policy page absent");
            }
        }
    }

    out
}

fn page_excerpt(html: &str) -> String {
    let doc = Html::parse_document(html);
    text_excerpt(&document_text(&doc), EXCERPT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_excerpt_normalizes_and_truncates() {
        let html = format!(
            "<html><body><h1>Refunds</h1><p>{}</p></body></html>",
            "word ".repeat(400)
        );
        let excerpt = page_excerpt(&html);
        assert!(excerpt.starts_with("Refunds word"));
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS);
    }
}
