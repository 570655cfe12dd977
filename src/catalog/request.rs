use url::Url;

use crate::query::{decode, decode_page, FilterKey, ALLOWED_QUERY_KEYS, PAGE_KEY, SIZE_KEY};

/// Parameters for one page request to the catalog service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub page: i64,
    pub size: i64,
    /// Allow-listed filters in allow-list order, canonical values only
    pub filters: Vec<(FilterKey, String)>,
}

impl RequestDescriptor {
    /// `page`, `size`, then the filters
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (PAGE_KEY, self.page.to_string()),
            (SIZE_KEY, self.size.to_string()),
        ];
        pairs.extend(self.filters.iter().map(|(key, value)| (key.as_str(), value.clone())));
        pairs
    }

    /// Full request URL against `base_url`, replacing any query it carried.
    pub fn to_url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(base_url)?;
        url.set_query(None);
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        Ok(url)
    }
}

/// Turn the incoming query-string into a catalog request.
///
/// Only allow-listed keys that decode to a valid value are forwarded; `page`
/// falls back to 0 and `size` is always `page_size`.
pub fn build(query: &str, page_size: i64) -> RequestDescriptor {
    let state = decode(query);
    let page = decode_page(query).page;

    let filters = ALLOWED_QUERY_KEYS
        .iter()
        .filter_map(|key| state.get(*key).map(|value| (*key, value)))
        .collect();

    RequestDescriptor {
        page,
        size: page_size,
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let request = build("", 20);
        assert_eq!(request, RequestDescriptor { page: 0, size: 20, filters: vec![] });
    }

    #[test]
    fn forwards_only_allow_listed_keys() {
        let request = build("lang=nb&city=Oslo&utm_source=mail&district=Moholt&page=2", 20);
        assert_eq!(request.page, 2);
        assert_eq!(
            request.filters,
            vec![
                (FilterKey::City, "Oslo".to_string()),
                (FilterKey::District, "Moholt".to_string()),
            ]
        );
    }

    #[test]
    fn size_is_not_taken_from_query() {
        assert_eq!(build("size=500", 20).size, 20);
    }

    #[test]
    fn malformed_values_are_not_forwarded() {
        let request = build("minPricePerMonth=abc&maxAreaSqm=&sortBy=rooms&page=-3", 20);
        assert_eq!(request.page, 0);
        assert!(request.filters.is_empty());
    }

    #[test]
    fn defaults_are_not_forwarded_when_absent() {
        let pairs = build("city=Oslo", 20).query_pairs();
        assert!(!pairs.iter().any(|(k, _)| *k == "sortBy" || *k == "sortDirection"));
    }

    #[test]
    fn key_order_does_not_matter() {
        assert_eq!(
            build("sortBy=city&city=Oslo&page=1", 20),
            build("page=1&city=Oslo&sortBy=city", 20)
        );
    }

    #[test]
    fn url_replaces_base_query() {
        let request = build("city=Gj%C3%B8vik&minPricePerMonth=5000", 20);
        let url = request
            .to_url("http://localhost:8080/api/v1/housings?stale=1")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/housings?page=0&size=20&city=Gj%C3%B8vik&minPricePerMonth=5000"
        );
    }

    #[test]
    fn bad_base_url_is_an_error() {
        assert!(build("", 20).to_url("not a url").is_err());
    }
}
