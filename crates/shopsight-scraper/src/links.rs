//! Important-links extraction: order tracking, contact page, blog.
//!
//! Each slot has an ordered list of conventional paths; the first path that
//! resolves fills the slot and later candidates for it are not fetched.

use url::Url;

use shopsight_core::ImportantLinks;

use crate::client::StorefrontClient;

#[derive(Clone, Copy)]
enum LinkSlot {
    OrderTracking,
    ContactUs,
    Blogs,
}

const LINK_PROBES: &[(&str, LinkSlot)] = &[
    ("/pages/track", LinkSlot::OrderTracking),
    ("/pages/track-order", LinkSlot::OrderTracking),
    ("/pages/order-tracking", LinkSlot::OrderTracking),
    ("/pages/contact", LinkSlot::ContactUs),
    ("/blogs/news", LinkSlot::Blogs),
    ("/blogs", LinkSlot::Blogs),
];

pub async fn fetch_important_links(client: &StorefrontClient, base: &Url) -> ImportantLinks {
    let mut links = ImportantLinks::default();

    for (path, slot) in LINK_PROBES {
        if slot_of(&mut links, *slot).is_some() {
            continue;
        }
        let Ok(url) = base.join(path) else {
            continue;
        };
        match client.get_text(url.clone()).await {
            Ok(_) => *slot_of(&mut links, *slot) = Some(url.to_string()),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "important-link path did not resolve");
            }
        }
    }

    links
}

fn slot_of(links: &mut ImportantLinks, slot: LinkSlot) -> &mut Option<String> {
    match slot {
        LinkSlot::OrderTracking => &mut links.order_tracking,
        LinkSlot::ContactUs => &mut links.contact_us,
        LinkSlot::Blogs => &mut links.blogs,
    }
}
