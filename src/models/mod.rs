use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pagination::{compute, PageWindow};

/// A single housing record as returned by the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HousingDto {
    pub rental_object_id: String,
    pub address: String,
    pub name: String,
    pub housing_type: String,
    pub city: String,
    pub district: String,
    /// Sent as a decimal string by the service
    pub area_sqm: String,
    pub price_per_month: i64,
    pub is_available: bool,
    pub available_from_date: Option<NaiveDate>,
}

/// One page of results from the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
    pub has_next: bool,
}

impl<T> PagedResult<T> {
    /// Number of pages implied by `total` and `size`, never less than one.
    pub fn page_count(&self) -> i64 {
        if self.size <= 0 || self.total <= 0 {
            return 1;
        }
        let pages = self.total / self.size + i64::from(self.total % self.size != 0);
        pages.max(1)
    }

    pub fn window(&self, window_size: i64) -> PageWindow {
        compute(self.page, self.page_count(), window_size)
    }
}
