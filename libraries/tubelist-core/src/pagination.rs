//! Page slicing for playlist views

use serde::Serialize;

/// Tracks shown per playlist page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// A bounded slice of an ordered sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested (after normalisation)
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Parse a raw `page` query parameter. Missing, unparsable, and values below
/// 1 all mean the first page.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map_or(1, normalize_page)
}

/// Clamp a page number to the first page when it is below 1
pub fn normalize_page(page: i64) -> usize {
    if page < 1 {
        1
    } else {
        usize::try_from(page).unwrap_or(usize::MAX)
    }
}

/// Slice `items` into 1-based page `page` of `page_size` entries.
///
/// Page 0 is treated as page 1. Pages past the end yield an empty `items`,
/// never an error.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);

    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}
