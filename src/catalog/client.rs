use crate::catalog::error::CatalogError;
use crate::catalog::request::RequestDescriptor;
use crate::catalog::traits::CatalogSource;
use crate::config::CatalogConfig;
use crate::models::{HousingDto, PagedResult};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Catalog service reached over HTTP
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_page(
        &self,
        request: &RequestDescriptor,
    ) -> Result<PagedResult<HousingDto>, CatalogError> {
        let url = request.to_url(&self.base_url)?;

        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog returned status: {}", status);
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await?;
            return Err(CatalogError::upstream(
                status.as_u16(),
                content_type.as_deref(),
                body,
            ));
        }

        let page: PagedResult<HousingDto> = response.json().await?;

        info!(
            "Fetched {} of {} housings (page {})",
            page.items.len(),
            page.total,
            page.page
        );

        Ok(page)
    }

    fn source_name(&self) -> &'static str {
        "Housing catalog"
    }
}
