use serde::Serialize;

/// The bounded run of page indices shown as links, centered on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: i64,
    pub start: i64,
    pub end: i64,
    pub page_count: i64,
}

impl PageWindow {
    /// A "1 …" group goes before the window
    pub fn truncated_left(&self) -> bool {
        self.start > 0
    }

    /// A "… last" group goes after the window
    pub fn truncated_right(&self) -> bool {
        self.end < self.page_count - 1
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn pages(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

/// Compute the page window for `current_page` out of `page_count` pages.
///
/// Inputs are clamped rather than rejected: a non-positive page count is one
/// page, the current page is pulled into range, and the window is at least one
/// page wide. With an even window the extra page lands right of `current`.
pub fn compute(current_page: i64, page_count: i64, window_size: i64) -> PageWindow {
    let safe_count = page_count.max(1);
    let safe_current = current_page.clamp(0, safe_count - 1);

    let size = window_size.max(1);
    let half = size / 2;

    let start = (safe_current - half).min(safe_count - size).max(0);
    let end = (safe_count - 1).min(start + size - 1);

    PageWindow {
        current: safe_current,
        start,
        end,
        page_count: safe_count,
    }
}
