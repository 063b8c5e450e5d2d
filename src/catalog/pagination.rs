use serde::Serialize;

/// Page/limit pair of a listing request, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: usize,
    pub limit: usize,
}

impl PageWindow {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Number of rows preceding this page.
    pub fn skip(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` rows; zero when there are none.
    ///
    /// The requested page is never clamped to this value.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

/// Pages kept on each end of the pager.
const EDGE_PAGES: usize = 2;
/// Pages shown before the current one.
const PAGES_BEFORE: usize = 2;
/// Pages shown after the current one.
const PAGES_AFTER: usize = 4;

/// Page links for a pager around `current_page`: both edges and a window
/// around the current page, with `None` marking each skipped run.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let runs = [
        (1, EDGE_PAGES.min(total_pages)),
        (
            current_page.saturating_sub(PAGES_BEFORE).max(1),
            current_page.saturating_add(PAGES_AFTER).min(total_pages),
        ),
        (total_pages.saturating_sub(EDGE_PAGES) + 1, total_pages),
    ];

    let mut links = Vec::new();
    let mut shown = 0;
    for (start, end) in runs {
        let start = start.max(shown + 1);
        if start > end {
            continue;
        }
        if start > shown + 1 {
            links.push(None);
        }
        links.extend((start..=end).map(Some));
        shown = end;
    }
    links
}
