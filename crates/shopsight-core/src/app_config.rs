use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Total request timeout applied to every outbound storefront fetch.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Page size for the `products.json` catalog endpoint.
    pub catalog_page_size: u32,
    /// Hard ceiling on catalog pages fetched per store. The upstream size is
    /// not trusted; hitting the ceiling returns a partial catalog.
    pub catalog_max_pages: usize,
    /// Candidate hosts gathered per requested competitor before validation.
    pub discovery_candidate_factor: usize,
    /// HTML search-results endpoint scraped during competitor discovery.
    /// Swappable because the markup of any one engine can break at any time.
    pub search_base_url: String,
}
