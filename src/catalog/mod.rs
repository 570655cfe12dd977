pub mod client;
pub mod error;
pub mod request;
pub mod traits;

pub use client::HttpCatalogClient;
pub use error::{CatalogError, UpstreamBody};
pub use request::{build, RequestDescriptor};
pub use traits::CatalogSource;
