//! Domain model for scraped storefront intel.
//!
//! Everything here is assembled once per inbound request and serialized
//! straight to the API response. Fields that a storefront may simply not
//! expose are `Option`; list-shaped fields that distinguish "nothing found"
//! from "page absent" use `Option<Vec<_>>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single product, either from the home-page hero section or the catalog feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    /// First variant's price. Absent when the storefront reports a
    /// non-numeric value.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The fixed set of policy pages a storefront conventionally publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Privacy,
    Refund,
    Return,
    Shipping,
    Terms,
}

impl PolicyKind {
    /// Conventional storefront path for this policy page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            PolicyKind::Privacy => "/policies/privacy-policy",
            PolicyKind::Refund => "/policies/refund-policy",
            PolicyKind::Return => "/policies/return-policy",
            PolicyKind::Shipping => "/policies/shipping-policy",
            PolicyKind::Terms => "/policies/terms-of-service",
        }
    }

    /// All policy kinds in probe order.
    #[must_use]
    pub fn all() -> [PolicyKind; 5] {
        [
            PolicyKind::Privacy,
            PolicyKind::Refund,
            PolicyKind::Return,
            PolicyKind::Shipping,
            PolicyKind::Terms,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub kind: PolicyKind,
    #[serde(default)]
    pub url: Option<String>,
    /// First ~800 characters of the normalized page text.
    #[serde(default)]
    pub text_excerpt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    /// Page the item was scraped from.
    #[serde(default)]
    pub url: Option<String>,
}

/// Social profile links found on the home page, one slot per platform.
///
/// A fixed-key struct rather than a map so the platform set is a
/// compile-time contract. First match per platform wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub pinterest: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instagram.is_none()
            && self.facebook.is_none()
            && self.twitter.is_none()
            && self.tiktok.is_none()
            && self.youtube.is_none()
            && self.pinterest.is_none()
            && self.linkedin.is_none()
    }
}

/// Contact details from the first resolving contact page.
///
/// `emails` and `phones` are sorted and deduplicated; when nothing matched
/// they are `None`, never an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub emails: Option<Vec<String>>,
    #[serde(default)]
    pub phones: Option<Vec<String>>,
    #[serde(default)]
    pub contact_page: Option<String>,
}

/// Conventional storefront links with a fixed slot per concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportantLinks {
    #[serde(default)]
    pub order_tracking: Option<String>,
    #[serde(default)]
    pub contact_us: Option<String>,
    #[serde(default)]
    pub blogs: Option<String>,
}

/// Aggregate record for one storefront: everything scraped in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandContext {
    pub store_url: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    pub hero_products: Vec<Product>,
    pub catalog: Vec<Product>,
    pub policies: Vec<Policy>,
    pub faqs: Vec<FaqItem>,
    pub social: SocialLinks,
    pub contact: ContactInfo,
    #[serde(default)]
    pub about_text: Option<String>,
    pub important_links: ImportantLinks,
    /// UTC timestamp of the aggregation pass, RFC 3339 with `Z` suffix.
    pub fetched_at: DateTime<Utc>,
}

impl BrandContext {
    /// The sole validity gate: a context describes a real storefront only
    /// when the catalog or the hero-product list is non-empty.
    #[must_use]
    pub fn has_storefront_signal(&self) -> bool {
        !self.catalog.is_empty() || !self.hero_products.is_empty()
    }
}

/// Response shape for competitor discovery: the queried brand plus every
/// validated competitor context, in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorReport {
    pub brand: BrandContext,
    pub competitors: Vec<BrandContext>,
}
