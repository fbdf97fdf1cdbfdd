//! Home-page scrapers: brand name, hero products, social links.
//!
//! All three read the same fetched document, so the page is parsed once in
//! [`parse_home`]. Parsing is synchronous and the `scraper::Html` document
//! never crosses an await point (it is not `Send`).

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use shopsight_core::{Product, SocialLinks};

use crate::text::collapse_whitespace;

/// Hero extraction stops after this many distinct product links.
const HERO_LIMIT: usize = 8;

/// Link-host fragment to platform slot. First URL per platform wins.
const SOCIAL_DOMAINS: &[(&str, &str)] = &[
    ("instagram.com", "instagram"),
    ("facebook.com", "facebook"),
    ("x.com", "twitter"),
    ("twitter.com", "twitter"),
    ("tiktok.com", "tiktok"),
    ("youtube.com", "youtube"),
    ("youtu.be", "youtube"),
    ("pinterest.com", "pinterest"),
    ("linkedin.com", "linkedin"),
];

/// Everything extracted from a storefront home page.
#[derive(Debug, Default)]
pub struct HomePage {
    pub brand_name: Option<String>,
    pub hero_products: Vec<Product>,
    pub social: SocialLinks,
}

/// Parses a home-page document and runs all home-page scrapers over it.
#[must_use]
pub fn parse_home(html: &str, base: &Url) -> HomePage {
    let doc = Html::parse_document(html);
    HomePage {
        brand_name: brand_name(&doc),
        hero_products: hero_products(&doc, base),
        social: social_links(&doc),
    }
}

/// Brand name from the `<title>` element, truncated at the first `|`
/// (storefronts commonly suffix the title with a tagline), falling back to
/// the `og:site_name` meta tag.
fn brand_name(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").expect("valid title selector");
    if let Some(el) = doc.select(&title_sel).next() {
        let text = el.text().collect::<String>();
        if !text.trim().is_empty() {
            let name = text.split('|').next().unwrap_or("").trim().to_owned();
            if !name.is_empty() {
                return Some(name);
            }
        }
    }

    let meta_sel =
        Selector::parse(r#"meta[property="og:site_name"]"#).expect("valid og:site_name selector");
    doc.select(&meta_sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Anchors whose target contains the product-path marker, in document order.
///
/// Title preference: anchor `title` attribute, then visible anchor text,
/// then a nested image's `alt`. Deduplicated by absolute URL, capped at
/// [`HERO_LIMIT`].
fn hero_products(doc: &Html, base: &Url) -> Vec<Product> {
    let anchor_sel = Selector::parse(r#"a[href*="/products/"]"#).expect("valid hero selector");
    let img_sel = Selector::parse("img").expect("valid img selector");

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for anchor in doc.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(url) = base.join(href) else {
            continue;
        };
        let url = url.to_string();
        if seen.contains(&url) {
            continue;
        }

        let mut title = anchor
            .value()
            .attr("title")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| collapse_whitespace(&anchor.text().collect::<Vec<_>>().join(" ")));

        if title.is_empty() {
            title = anchor
                .select(&img_sel)
                .next()
                .and_then(|img| img.value().attr("alt"))
                .map(str::trim)
                .unwrap_or("")
                .to_owned();
        }

        if title.is_empty() {
            continue;
        }

        seen.insert(url.clone());
        out.push(Product {
            title,
            url: Some(url),
            price: None,
            image: None,
        });

        if out.len() >= HERO_LIMIT {
            break;
        }
    }

    out
}

/// Scans every anchor on the page and fills platform slots by link host.
///
/// Unmatched hosts are ignored; an already-filled slot is never overwritten,
/// so the first URL in document order wins.
fn social_links(doc: &Html) -> SocialLinks {
    let anchor_sel = Selector::parse("a[href]").expect("valid anchor selector");
    let mut social = SocialLinks::default();

    for anchor in doc.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(platform) = classify_social(href) else {
            continue;
        };
        let slot = platform_slot(&mut social, platform);
        if slot.is_none() {
            *slot = Some(href.to_owned());
        }
    }

    social
}

/// Maps a link to a platform key by matching its host against
/// [`SOCIAL_DOMAINS`]. Relative and unparseable links never match. Hosts
/// match exactly or as a subdomain; `box.com` is not `x.com`.
fn classify_social(href: &str) -> Option<&'static str> {
    let host = Url::parse(href).ok()?.host_str()?.to_ascii_lowercase();
    SOCIAL_DOMAINS
        .iter()
        .find(|(domain, _)| {
            host == *domain || host.strip_suffix(domain).is_some_and(|p| p.ends_with('.'))
        })
        .map(|(_, platform)| *platform)
}

fn platform_slot<'a>(social: &'a mut SocialLinks, platform: &str) -> &'a mut Option<String> {
    match platform {
        "instagram" => &mut social.instagram,
        "facebook" => &mut social.facebook,
        "twitter" => &mut social.twitter,
        "tiktok" => &mut social.tiktok,
        "youtube" => &mut social.youtube,
        "pinterest" => &mut social.pinterest,
        _ => &mut social.linkedin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://shop.example/").unwrap()
    }

    #[test]
    fn brand_name_truncates_title_at_pipe() {
        let page = parse_home(
            "<html><head><title> Acme Soap | Handmade goods </title></head></html>",
            &base(),
        );
        assert_eq!(page.brand_name.as_deref(), Some("Acme Soap"));
    }

    #[test]
    fn brand_name_falls_back_to_og_site_name() {
        let html = r#"<html><head><meta property="og:site_name" content="Acme Soap"></head></html>"#;
        let page = parse_home(html, &base());
        assert_eq!(page.brand_name.as_deref(), Some("Acme Soap"));
    }

    #[test]
    fn brand_name_absent_when_neither_source_present() {
        let page = parse_home("<html><body><p>hi</p></body></html>", &base());
        assert!(page.brand_name.is_none());
    }

    #[test]
    fn hero_products_prefer_title_attribute() {
        let html = r#"<a href="/products/bar" title="Lavender Bar">ignored text</a>"#;
        let page = parse_home(html, &base());
        assert_eq!(page.hero_products.len(), 1);
        assert_eq!(page.hero_products[0].title, "Lavender Bar");
        assert_eq!(
            page.hero_products[0].url.as_deref(),
            Some("https://shop.example/products/bar")
        );
    }

    #[test]
    fn hero_products_fall_back_to_text_then_img_alt() {
        let html = concat!(
            r#"<a href="/products/a">Visible Name</a>"#,
            r#"<a href="/products/b"><img alt="Alt Name"></a>"#,
            r#"<a href="/products/c"><img></a>"#,
        );
        let page = parse_home(html, &base());
        let titles: Vec<_> = page.hero_products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Visible Name", "Alt Name"]);
    }

    #[test]
    fn hero_products_dedupe_by_absolute_url() {
        let html = concat!(
            r#"<a href="/products/same" title="First">x</a>"#,
            r#"<a href="https://shop.example/products/same" title="Second">y</a>"#,
        );
        let page = parse_home(html, &base());
        assert_eq!(page.hero_products.len(), 1);
        assert_eq!(page.hero_products[0].title, "First");
    }

    #[test]
    fn hero_products_cap_at_eight() {
        let mut html = String::new();
        for i in 0..12 {
            html.push_str(&format!(r#"<a href="/products/p{i}" title="P{i}">x</a>"#));
        }
        let page = parse_home(&html, &base());
        assert_eq!(page.hero_products.len(), 8);
    }

    #[test]
    fn social_links_first_match_per_platform_wins() {
        let html = concat!(
            r#"<a href="https://instagram.com/first">a</a>"#,
            r#"<a href="https://www.instagram.com/second">b</a>"#,
            r#"<a href="https://x.com/acme">c</a>"#,
        );
        let page = parse_home(html, &base());
        assert_eq!(
            page.social.instagram.as_deref(),
            Some("https://instagram.com/first")
        );
        assert_eq!(page.social.twitter.as_deref(), Some("https://x.com/acme"));
    }

    #[test]
    fn social_links_empty_when_no_match() {
        let html = r#"<a href="https://shop.example/pages/about">About</a>"#;
        let page = parse_home(html, &base());
        assert!(page.social.is_empty());
    }

    #[test]
    fn classify_social_ignores_relative_links() {
        assert!(classify_social("/pages/instagram").is_none());
    }

    #[test]
    fn classify_social_matches_youtube_short_host() {
        assert_eq!(classify_social("https://youtu.be/abc123"), Some("youtube"));
    }

    #[test]
    fn classify_social_rejects_suffix_lookalike_host() {
        assert!(classify_social("https://box.com/share/1").is_none());
    }
}
