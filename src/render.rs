//! Plain-text rendering of a result page for the terminal.

use crate::models::{HousingDto, PagedResult};
use crate::pagination::{nav_items, NavItem, PageWindow};

pub fn summary(page: &PagedResult<HousingDto>, window: &PageWindow) -> String {
    format!(
        "Page {} of {} ({} total)",
        window.current + 1,
        window.page_count,
        page.total
    )
}

pub fn housing(index: usize, h: &HousingDto) -> String {
    let mut out = format!(
        "{}. {} ({} kr/mnd)\n   {} · {}, {}\n   {} m², {}",
        index,
        h.name,
        h.price_per_month,
        h.housing_type,
        h.district,
        h.city,
        h.area_sqm,
        h.address,
    );
    if let Some(date) = h.available_from_date.filter(|_| h.is_available) {
        out.push_str(&format!("\n   Available from {}", date));
    }
    out.push_str(&format!("\n   ID: {}", h.rental_object_id));
    out
}

/// Single-line pagination bar, e.g. `‹ 1 … 3 4 5 [6] 7 8 9 … 20 ›`.
/// Disabled Prev/Next are shown in parentheses.
pub fn nav_line(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            NavItem::Prev { href: Some(_) } => "‹".to_string(),
            NavItem::Prev { href: None } => "(‹)".to_string(),
            NavItem::Next { href: Some(_) } => "›".to_string(),
            NavItem::Next { href: None } => "(›)".to_string(),
            NavItem::Ellipsis => "…".to_string(),
            NavItem::Page { label, href: None, .. } => format!("[{label}]"),
            NavItem::Page { label, .. } => label.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything printed for one result page.
pub fn page(result: &PagedResult<HousingDto>, window_size: i64, query: &str) -> String {
    let window = result.window(window_size);
    let mut out = vec![summary(result, &window), String::new()];

    if result.items.is_empty() {
        out.push("No results.".to_string());
    } else {
        let offset = (window.current * result.size.max(0)) as usize;
        for (i, h) in result.items.iter().enumerate() {
            out.push(housing(offset + i + 1, h));
            out.push(String::new());
        }
    }

    out.push(nav_line(&nav_items(&window, result.has_next, query)));
    out.join("\n")
}
