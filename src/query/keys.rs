use std::fmt;
use std::str::FromStr;

pub const PAGE_KEY: &str = "page";
pub const SIZE_KEY: &str = "size";

/// How a filter key's raw value is validated and normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Finite number, truncated toward zero
    Integer,
    /// Finite number, fractions kept
    Decimal,
    SortBy,
    SortDirection,
}

/// Query-string keys that may be forwarded to the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    RentalObjectId,
    Address,
    Name,
    HousingType,
    City,
    District,
    MinPricePerMonth,
    MaxPricePerMonth,
    MinAreaSqm,
    MaxAreaSqm,
    SortBy,
    SortDirection,
}

/// The allow-list, in the order parameters are written to outbound requests.
pub const ALLOWED_QUERY_KEYS: [FilterKey; 12] = [
    FilterKey::RentalObjectId,
    FilterKey::Address,
    FilterKey::Name,
    FilterKey::HousingType,
    FilterKey::City,
    FilterKey::District,
    FilterKey::MinPricePerMonth,
    FilterKey::MaxPricePerMonth,
    FilterKey::MinAreaSqm,
    FilterKey::MaxAreaSqm,
    FilterKey::SortBy,
    FilterKey::SortDirection,
];

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::RentalObjectId => "rentalObjectId",
            FilterKey::Address => "address",
            FilterKey::Name => "name",
            FilterKey::HousingType => "housingType",
            FilterKey::City => "city",
            FilterKey::District => "district",
            FilterKey::MinPricePerMonth => "minPricePerMonth",
            FilterKey::MaxPricePerMonth => "maxPricePerMonth",
            FilterKey::MinAreaSqm => "minAreaSqm",
            FilterKey::MaxAreaSqm => "maxAreaSqm",
            FilterKey::SortBy => "sortBy",
            FilterKey::SortDirection => "sortDirection",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FilterKey::MinPricePerMonth | FilterKey::MaxPricePerMonth => FieldKind::Integer,
            FilterKey::MinAreaSqm | FilterKey::MaxAreaSqm => FieldKind::Decimal,
            FilterKey::SortBy => FieldKind::SortBy,
            FilterKey::SortDirection => FieldKind::SortDirection,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter key: {0}")]
pub struct UnknownKey(pub String);

impl FromStr for FilterKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALLOWED_QUERY_KEYS
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}
