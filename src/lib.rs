//! Browse a paged housing catalog whose filters, sort order and page live
//! entirely in the URL query-string.

pub mod catalog;
pub mod config;
pub mod models;
pub mod pagination;
pub mod query;
pub mod render;

pub use catalog::{build, CatalogError, CatalogSource, HttpCatalogClient, RequestDescriptor};
pub use config::CatalogConfig;
pub use models::{HousingDto, PagedResult};
pub use pagination::{compute, nav_items, NavItem, PageWindow};
pub use query::{FilterKey, FilterState, PageQuery, SortBy, SortDirection};
