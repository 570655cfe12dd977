use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keys::FilterKey;

/// Field the catalog is sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    AvailableFromDate,
    PricePerMonth,
    AreaSqm,
    City,
    District,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::AvailableFromDate,
        SortBy::PricePerMonth,
        SortBy::AreaSqm,
        SortBy::City,
        SortBy::District,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::AvailableFromDate => "availableFromDate",
            SortBy::PricePerMonth => "pricePerMonth",
            SortBy::AreaSqm => "areaSqm",
            SortBy::City => "city",
            SortBy::District => "district",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} value: {value}")]
pub struct InvalidValue {
    pub field: &'static str,
    pub value: String,
}

impl FromStr for SortBy {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortBy::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidValue {
                field: "sortBy",
                value: s.to_string(),
            })
    }
}

impl FromStr for SortDirection {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(InvalidValue {
                field: "sortDirection",
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed filter and sort state carried in the query-string.
///
/// `None` means the key is absent from the query-string. Text values are
/// trimmed and never empty; numbers are always finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Minimum monthly rent, whole currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price_per_month: Option<i64>,
    /// Maximum monthly rent, whole currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price_per_month: Option<i64>,
    /// Minimum living area in square meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_area_sqm: Option<f64>,
    /// Maximum living area in square meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_area_sqm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

impl FilterState {
    /// Effective sort field, falling back to the default when absent
    pub fn sort_by(&self) -> SortBy {
        self.sort_by.unwrap_or_default()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction.unwrap_or_default()
    }

    /// Canonical string form of `key`, or `None` when the field is absent.
    pub fn get(&self, key: FilterKey) -> Option<String> {
        match key {
            FilterKey::RentalObjectId => self.rental_object_id.clone(),
            FilterKey::Address => self.address.clone(),
            FilterKey::Name => self.name.clone(),
            FilterKey::HousingType => self.housing_type.clone(),
            FilterKey::City => self.city.clone(),
            FilterKey::District => self.district.clone(),
            FilterKey::MinPricePerMonth => self.min_price_per_month.map(|v| v.to_string()),
            FilterKey::MaxPricePerMonth => self.max_price_per_month.map(|v| v.to_string()),
            FilterKey::MinAreaSqm => self.min_area_sqm.map(format_decimal),
            FilterKey::MaxAreaSqm => self.max_area_sqm.map(format_decimal),
            FilterKey::SortBy => self.sort_by.map(|v| v.as_str().to_string()),
            FilterKey::SortDirection => self.sort_direction.map(|v| v.as_str().to_string()),
        }
    }

    /// Store a raw value for `key`; invalid or blank values leave the field absent.
    pub(crate) fn set_raw(&mut self, key: FilterKey, raw: &str) {
        let text = non_empty(raw);
        match key {
            FilterKey::RentalObjectId => self.rental_object_id = text,
            FilterKey::Address => self.address = text,
            FilterKey::Name => self.name = text,
            FilterKey::HousingType => self.housing_type = text,
            FilterKey::City => self.city = text,
            FilterKey::District => self.district = text,
            FilterKey::MinPricePerMonth => self.min_price_per_month = parse_integer(raw),
            FilterKey::MaxPricePerMonth => self.max_price_per_month = parse_integer(raw),
            FilterKey::MinAreaSqm => self.min_area_sqm = parse_decimal(raw),
            FilterKey::MaxAreaSqm => self.max_area_sqm = parse_decimal(raw),
            FilterKey::SortBy => self.sort_by = raw.parse().ok(),
            FilterKey::SortDirection => self.sort_direction = raw.parse().ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Zero-based page index carried next to the filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: i64,
}

pub(crate) fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a finite number. Blank, malformed, and infinite/NaN input all give `None`.
pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub(crate) fn parse_integer(raw: &str) -> Option<i64> {
    parse_finite(raw).map(|n| n.trunc() as i64)
}

pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    // -0 normalizes to 0
    parse_finite(raw).map(|n| if n == 0.0 { 0.0 } else { n })
}

pub(crate) fn format_decimal(value: f64) -> String {
    value.to_string()
}
