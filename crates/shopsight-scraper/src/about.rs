//! About-page extraction: first resolving path yields a text excerpt.

use scraper::Html;
use url::Url;

use crate::client::StorefrontClient;
use crate::probe::first_page;
use crate::text::{document_text, text_excerpt};

const ABOUT_PATHS: &[&str] = &["/pages/about", "/pages/our-story", "/pages/about-us"];

/// About text keeps more context than a policy excerpt.
const EXCERPT_CHARS: usize = 1200;

pub async fn fetch_about(client: &StorefrontClient, base: &Url) -> Option<String> {
    let page = first_page(client, base, ABOUT_PATHS).await?;
    let doc = Html::parse_document(&page.body);
    Some(text_excerpt(&document_text(&doc), EXCERPT_CHARS))
}
