//! Short-circuiting ordered-candidate probe.
//!
//! Several scrapers share the same shape: try a fixed list of conventional
//! paths in order and take the first page that resolves. This helper owns
//! the fetch-and-fall-through loop; failures are logged at debug and mean
//! "try the next candidate".

use url::Url;

use crate::client::StorefrontClient;

pub(crate) struct FetchedPage {
    pub url: Url,
    pub body: String,
}

/// Returns the first path in `paths` that resolves to a page, or `None`
/// when every candidate fails.
pub(crate) async fn first_page(
    client: &StorefrontClient,
    base: &Url,
    paths: &[&str],
) -> Option<FetchedPage> {
    for path in paths {
        let Ok(url) = base.join(path) else {
            continue;
        };
        match client.get_text(url.clone()).await {
            Ok(body) => return Some(FetchedPage { url, body }),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "probe path did not resolve");
            }
        }
    }
    None
}
