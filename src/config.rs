use std::time::Duration;

use clap::Args;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1/housings";
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const DEFAULT_PAGE_WINDOW: i64 = 7;

/// Settings for talking to the catalog service and laying out result pages.
///
/// The page size is fixed per deployment; it is never taken from the URL.
#[derive(Debug, Clone, Args)]
pub struct CatalogConfig {
    /// Housing endpoint of the catalog service
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Items requested per page
    #[arg(long, env = "CATALOG_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: i64,

    /// Number of page links shown around the current page
    #[arg(long, env = "CATALOG_PAGE_WINDOW", default_value_t = DEFAULT_PAGE_WINDOW)]
    pub page_window: i64,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, env = "CATALOG_USER_AGENT", default_value = concat!("housing-catalog/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_PAGE_WINDOW,
            timeout_secs: 30,
            user_agent: concat!("housing-catalog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
