//! FAQ extraction.
//!
//! Probes the conventional help-page paths in order; the first page that
//! yields any items wins outright and no further paths are tried. Within a
//! page, structured JSON-LD `FAQPage` data is read first, then
//! `<details><summary>` disclosure widgets; both may contribute.

use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

use shopsight_core::FaqItem;

use crate::client::StorefrontClient;
use crate::text::collapse_whitespace;

const FAQ_PATHS: &[&str] = &["/pages/faq", "/pages/faqs", "/pages/help", "/pages/support"];

pub async fn fetch_faqs(client: &StorefrontClient, base: &Url) -> Vec<FaqItem> {
    for path in FAQ_PATHS {
        let Ok(url) = base.join(path) else {
            continue;
        };
        match client.get_text(url.clone()).await {
            Ok(body) => {
                let items = parse_faq_page(&body, url.as_str());
                if !items.is_empty() {
                    return items;
                }
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "faq path did not resolve");
            }
        }
    }
    Vec::new()
}

pub(crate) fn parse_faq_page(html: &str, page_url: &str) -> Vec<FaqItem> {
    let doc = Html::parse_document(html);
    let mut items = json_ld_faqs(&doc, page_url);
    items.extend(disclosure_faqs(&doc, page_url));
    items
}

/// Items from `application/ld+json` script blocks whose top-level object is
/// a `FAQPage` node.
fn json_ld_faqs(doc: &Html, page_url: &str) -> Vec<FaqItem> {
    let script_sel =
        Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid json-ld selector");
    let mut items = Vec::new();

    for script in doc.select(&script_sel) {
        let raw = script.text().collect::<String>();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            continue;
        };
        let Some(map) = value.as_object() else {
            continue;
        };
        if map.get("@type").and_then(Value::as_str) != Some("FAQPage") {
            continue;
        }

        let entities = map
            .get("mainEntity")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for entity in entities {
            let question = entity
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default();
            let answer = entity
                .get("acceptedAnswer")
                .and_then(|a| a.get("text"))
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default();

            if !question.is_empty() && !answer.is_empty() {
                items.push(FaqItem {
                    question: question.to_owned(),
                    answer: answer.to_owned(),
                    url: Some(page_url.to_owned()),
                });
            }
        }
    }

    items
}

/// Items from `<details>` disclosure widgets: the `<summary>` is the
/// question, the whole element's text is the answer.
fn disclosure_faqs(doc: &Html, page_url: &str) -> Vec<FaqItem> {
    let details_sel = Selector::parse("details").expect("valid details selector");
    let summary_sel = Selector::parse("summary").expect("valid summary selector");
    let mut items = Vec::new();

    for details in doc.select(&details_sel) {
        let question = details
            .select(&summary_sel)
            .next()
            .map(|s| collapse_whitespace(&s.text().collect::<Vec<_>>().join(" ")))
            .unwrap_or_default();
        let answer = collapse_whitespace(&details.text().collect::<Vec<_>>().join(" "));

        if !question.is_empty() && !answer.is_empty() {
            items.push(FaqItem {
                question,
                answer,
                url: Some(page_url.to_owned()),
            });
        }
    }

    items
}
