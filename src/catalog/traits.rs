use crate::catalog::error::CatalogError;
use crate::catalog::request::RequestDescriptor;
use crate::models::{HousingDto, PagedResult};
use async_trait::async_trait;

/// A backend that answers paged housing queries
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of housings for `request`
    async fn fetch_page(
        &self,
        request: &RequestDescriptor,
    ) -> Result<PagedResult<HousingDto>, CatalogError>;

    fn source_name(&self) -> &'static str;
}
