//! Contact-page extraction: emails, phone numbers, and the page itself.
//!
//! The first resolving contact path wins. Matches come from regex scans of
//! the page text plus `mailto:` and `tel:` anchors; the result lists are
//! sorted and deduplicated, and empty lists collapse to absence.

use std::collections::BTreeSet;

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use shopsight_core::ContactInfo;

use crate::client::StorefrontClient;
use crate::probe::first_page;
use crate::text::document_text;

const CONTACT_PATHS: &[&str] = &["/pages/contact", "/pages/contact-us", "/contact"];

pub async fn fetch_contact(client: &StorefrontClient, base: &Url) -> ContactInfo {
    match first_page(client, base, CONTACT_PATHS).await {
        Some(page) => parse_contact_page(&page.body, page.url.as_str()),
        None => ContactInfo::default(),
    }
}

pub(crate) fn parse_contact_page(html: &str, page_url: &str) -> ContactInfo {
    let email_re =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex");
    let phone_re = Regex::new(r"\+?\d[\d\-\s()]{6,}\d").expect("valid phone regex");

    let doc = Html::parse_document(html);
    let page_text = document_text(&doc);

    // BTreeSet gives sorted + deduplicated output in one pass.
    let mut emails: BTreeSet<String> = email_re
        .find_iter(&page_text)
        .map(|m| m.as_str().to_owned())
        .collect();
    let mut phones: BTreeSet<String> = phone_re
        .find_iter(&page_text)
        .map(|m| m.as_str().trim().to_owned())
        .collect();

    let anchor_sel =
        Selector::parse(r#"a[href^="mailto:"], a[href^="tel:"]"#).expect("valid contact selector");
    for anchor in doc.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if let Some(address) = href.strip_prefix("mailto:") {
            let address = address.trim();
            if !address.is_empty() {
                emails.insert(address.to_owned());
            }
        } else if let Some(number) = href.strip_prefix("tel:") {
            let number = number.trim();
            if !number.is_empty() {
                phones.insert(number.to_owned());
            }
        }
    }

    ContactInfo {
        emails: non_empty(emails),
        phones: non_empty(phones),
        contact_page: Some(page_url.to_owned()),
    }
}

/// Empty sets collapse to `None`; the API never reports an empty list.
fn non_empty(set: BTreeSet<String>) -> Option<Vec<String>> {
    if set.is_empty() {
        None
    } else {
        Some(set.into_iter().collect())
    }
}
