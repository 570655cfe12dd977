//! Conversion between the URL query-string and [`FilterState`].
//!
//! The query-string is the only durable copy of the filters, sort order and
//! page. Everything here is a pure function of its arguments. Unrecognized
//! keys pass through edits untouched but are never decoded into the state.

use tracing::debug;
use url::form_urlencoded;

use super::keys::{FieldKind, FilterKey, ALLOWED_QUERY_KEYS, PAGE_KEY};
use super::types::{
    format_decimal, parse_decimal, parse_integer, FilterState, PageQuery, SortBy, SortDirection,
};

type Pairs = Vec<(String, String)>;

fn parse_pairs(query: &str) -> Pairs {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Set `key` to `value`, replacing the first occurrence in place and
/// dropping any repeats. Appends when the key is missing.
fn set_pair(pairs: &mut Pairs, key: &str, value: String) {
    let mut value = Some(value);
    pairs.retain_mut(|(k, v)| {
        if k != key {
            return true;
        }
        match value.take() {
            Some(next) => {
                *v = next;
                true
            }
            None => false,
        }
    });
    if let Some(value) = value {
        pairs.push((key.to_string(), value));
    }
}

fn remove_pair(pairs: &mut Pairs, key: &str) {
    pairs.retain(|(k, _)| k != key);
}

/// Read the filter state out of a query-string.
///
/// Blank values, malformed numbers and unknown sort values are dropped
/// without error.
pub fn decode(query: &str) -> FilterState {
    let pairs = parse_pairs(query);
    let mut state = FilterState::default();

    for key in ALLOWED_QUERY_KEYS {
        let Some(raw) = first(&pairs, key.as_str()) else {
            continue;
        };
        state.set_raw(key, raw);
        if state.get(key).is_none() && !raw.trim().is_empty() {
            debug!(key = %key, value = raw, "dropping invalid filter value");
        }
    }

    state
}

/// Canonical query-string for `state`. Absent fields are omitted.
pub fn serialize(state: &FilterState) -> String {
    let pairs: Pairs = ALLOWED_QUERY_KEYS
        .iter()
        .filter_map(|key| state.get(*key).map(|v| (key.as_str().to_string(), v)))
        .collect();
    encode_pairs(&pairs)
}

/// Read the page index; missing or malformed input is page 0, negatives clamp to 0.
pub fn decode_page(query: &str) -> PageQuery {
    let pairs = parse_pairs(query);
    let page = match first(&pairs, PAGE_KEY) {
        None => 0,
        // an empty value reads as 0, like any blank numeric string
        Some(raw) if raw.trim().is_empty() => 0,
        Some(raw) => parse_integer(raw).unwrap_or(0),
    };
    PageQuery { page: page.max(0) }
}

/// Canonical form of `raw` for `key`, or `None` when it does not validate.
fn normalize(key: FilterKey, trimmed: &str) -> Option<String> {
    match key.kind() {
        FieldKind::Text => Some(trimmed.to_string()),
        FieldKind::Integer => parse_integer(trimmed).map(|n| n.to_string()),
        FieldKind::Decimal => parse_decimal(trimmed).map(format_decimal),
        FieldKind::SortBy => trimmed
            .parse::<SortBy>()
            .ok()
            .map(|v| v.as_str().to_string()),
        FieldKind::SortDirection => trimmed
            .parse::<SortDirection>()
            .ok()
            .map(|v| v.as_str().to_string()),
    }
}

/// Apply a single filter edit to `current` and return the next query-string.
///
/// A blank value removes the key. A value that fails validation leaves the
/// key as it was. In every case the `page` key is removed, so any edit lands
/// on the first page. Other keys are preserved.
pub fn set_field(current: &str, key: FilterKey, raw_value: &str) -> String {
    let mut pairs = parse_pairs(current);
    let trimmed = raw_value.trim();

    if trimmed.is_empty() {
        remove_pair(&mut pairs, key.as_str());
    } else {
        match normalize(key, trimmed) {
            Some(value) => set_pair(&mut pairs, key.as_str(), value),
            None => debug!(key = %key, value = raw_value, "ignoring invalid filter edit"),
        }
    }

    remove_pair(&mut pairs, PAGE_KEY);
    encode_pairs(&pairs)
}

/// Query-string with every filter, sort and page key cleared.
pub fn reset() -> String {
    String::new()
}

/// `query` pointed at `page`, keeping every other key. Page 0 is written as
/// an absent key.
pub fn with_page(query: &str, page: i64) -> String {
    let mut pairs = parse_pairs(query);
    if page <= 0 {
        remove_pair(&mut pairs, PAGE_KEY);
    } else {
        set_pair(&mut pairs, PAGE_KEY, page.to_string());
    }
    encode_pairs(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_key(query: &str, key: &str) -> bool {
        parse_pairs(query).iter().any(|(k, _)| k == key)
    }

    fn value_of(query: &str, key: &str) -> Option<String> {
        first(&parse_pairs(query), key).map(str::to_string)
    }

    #[test]
    fn decode_drops_malformed_numbers() {
        let state = decode("city=Trondheim&minPricePerMonth=abc");
        assert_eq!(
            state,
            FilterState {
                city: Some("Trondheim".to_string()),
                ..FilterState::default()
            }
        );
        assert_eq!(state.sort_by(), SortBy::AvailableFromDate);
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn decode_reads_every_field() {
        let state = decode(
            "?rentalObjectId=BER10-101&address=Berghusvegen+1&name=Hybel&housingType=Dorm\
             &city=Gj%C3%B8vik&district=Kallerud&minPricePerMonth=5000&maxPricePerMonth=12000.9\
             &minAreaSqm=15.5&maxAreaSqm=50&sortBy=pricePerMonth&sortDirection=desc",
        );
        assert_eq!(state.rental_object_id.as_deref(), Some("BER10-101"));
        assert_eq!(state.address.as_deref(), Some("Berghusvegen 1"));
        assert_eq!(state.city.as_deref(), Some("Gjøvik"));
        assert_eq!(state.min_price_per_month, Some(5000));
        assert_eq!(state.max_price_per_month, Some(12000));
        assert_eq!(state.min_area_sqm, Some(15.5));
        assert_eq!(state.max_area_sqm, Some(50.0));
        assert_eq!(state.sort_by(), SortBy::PricePerMonth);
        assert_eq!(state.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn decode_treats_blank_as_absent() {
        let state = decode("city=&district=%20%20&sortBy=&sortDirection=");
        assert!(state.is_empty());
    }

    #[test]
    fn decode_ignores_unknown_keys_and_unknown_sort() {
        let state = decode("lang=nb&size=500&sortBy=rooms");
        assert!(state.is_empty());
        assert_eq!(state.sort_by(), SortBy::AvailableFromDate);
    }

    #[test]
    fn decode_uses_first_of_repeated_keys() {
        assert_eq!(decode("city=Oslo&city=Bergen").city.as_deref(), Some("Oslo"));
    }

    #[test]
    fn serialize_round_trips() {
        for query in [
            "",
            "city=Trondheim&minPricePerMonth=abc",
            "city=%20Oslo%20&maxAreaSqm=40.25&sortDirection=DESC",
            "maxPricePerMonth=9999.99&minAreaSqm=-0&sortBy=city&district=Moholt",
            "name=a+b&address=&housingType=Dorm&minPricePerMonth=1e3",
        ] {
            let once = decode(query);
            assert_eq!(decode(&serialize(&once)), once, "query: {query}");
        }
    }

    #[test]
    fn serialize_is_canonical() {
        let state = decode("sortDirection=DESC&city=+Oslo+&minAreaSqm=15.0&page=3&lang=nb");
        assert_eq!(serialize(&state), "city=Oslo&minAreaSqm=15&sortDirection=desc");
    }

    #[test]
    fn page_defaults_and_clamps() {
        assert_eq!(decode_page("").page, 0);
        assert_eq!(decode_page("page=").page, 0);
        assert_eq!(decode_page("page=abc").page, 0);
        assert_eq!(decode_page("page=-4").page, 0);
        assert_eq!(decode_page("page=3.8").page, 3);
        assert_eq!(decode_page("?city=Oslo&page=12").page, 12);
    }

    #[test]
    fn set_field_resets_page() {
        let next = set_field("page=3&city=Oslo", FilterKey::District, "Moholt");
        assert_eq!(value_of(&next, "district").as_deref(), Some("Moholt"));
        assert_eq!(value_of(&next, "city").as_deref(), Some("Oslo"));
        assert!(!has_key(&next, "page"));
    }

    #[test]
    fn set_field_trims() {
        let next = set_field("", FilterKey::City, "  Trondheim  ");
        assert_eq!(next, "city=Trondheim");
    }

    #[test]
    fn set_field_blank_removes_key() {
        for blank in ["", "   ", "\t"] {
            let next = set_field("city=Oslo&district=Moholt&page=2", FilterKey::City, blank);
            assert_eq!(next, "district=Moholt");
        }
    }

    #[test]
    fn set_field_invalid_number_is_noop_but_resets_page() {
        let next = set_field("minPricePerMonth=4000&page=5", FilterKey::MinPricePerMonth, "abc");
        assert_eq!(next, "minPricePerMonth=4000");

        let next = set_field("city=Oslo", FilterKey::MaxAreaSqm, "lots");
        assert_eq!(next, "city=Oslo");
    }

    #[test]
    fn set_field_truncates_price_and_keeps_area_fraction() {
        let next = set_field("", FilterKey::MaxPricePerMonth, "8500.75");
        assert_eq!(next, "maxPricePerMonth=8500");

        let next = set_field("", FilterKey::MinAreaSqm, " 17.5 ");
        assert_eq!(next, "minAreaSqm=17.5");
    }

    #[test]
    fn set_field_canonicalizes_sort() {
        assert_eq!(set_field("", FilterKey::SortBy, "AreaSqm"), "sortBy=areaSqm");
        assert_eq!(set_field("sortBy=city", FilterKey::SortBy, "rooms"), "sortBy=city");
    }

    #[test]
    fn set_field_replaces_in_place_and_keeps_unknown_keys() {
        let next = set_field("lang=nb&city=Oslo&city=Bergen&page=1", FilterKey::City, "Trondheim");
        assert_eq!(next, "lang=nb&city=Trondheim");
    }

    #[test]
    fn reset_is_empty() {
        assert_eq!(reset(), "");
        assert!(decode(&reset()).is_empty());
        assert_eq!(decode_page(&reset()).page, 0);
    }

    #[test]
    fn with_page_sets_or_removes() {
        assert_eq!(with_page("city=Oslo", 2), "city=Oslo&page=2");
        assert_eq!(with_page("page=4&city=Oslo", 5), "page=5&city=Oslo");
        assert_eq!(with_page("page=4&city=Oslo", 0), "city=Oslo");
    }
}
