use serde::Serialize;

use super::window::PageWindow;
use crate::query::with_page;

/// One element of the rendered pagination bar.
///
/// Page numbers are zero-based; `label` is what the user sees (one-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavItem {
    Prev { href: Option<String> },
    Page { page: i64, label: String, href: Option<String> },
    Ellipsis,
    Next { href: Option<String> },
}

impl NavItem {
    fn page(page: i64, current: i64, query: &str) -> Self {
        let href = (page != current).then(|| link(query, page));
        NavItem::Page {
            page,
            label: (page + 1).to_string(),
            href,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, NavItem::Page { href: None, .. })
    }
}

fn link(query: &str, page: i64) -> String {
    let next = with_page(query, page);
    if next.is_empty() {
        "?".to_string()
    } else {
        format!("?{next}")
    }
}

/// Build the pagination bar for `window`.
///
/// `has_next` comes from the service response, not from the window, so Next
/// follows whatever the service says even when the window disagrees at the
/// last page. Links keep every other key of `query`.
pub fn nav_items(window: &PageWindow, has_next: bool, query: &str) -> Vec<NavItem> {
    let mut items = Vec::new();

    items.push(NavItem::Prev {
        href: window.has_prev().then(|| link(query, window.current - 1)),
    });

    if window.truncated_left() {
        items.push(NavItem::page(0, window.current, query));
        items.push(NavItem::Ellipsis);
    }

    for page in window.pages() {
        items.push(NavItem::page(page, window.current, query));
    }

    if window.truncated_right() {
        items.push(NavItem::Ellipsis);
        items.push(NavItem::page(window.page_count - 1, window.current, query));
    }

    items.push(NavItem::Next {
        href: has_next.then(|| link(query, window.current + 1)),
    });

    items
}
