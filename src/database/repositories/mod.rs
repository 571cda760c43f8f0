// Explicit query functions per entity, returning plain data records.
// Handlers never build SQL themselves; everything goes through here.

pub mod blog_posts;
pub mod comments;
pub mod projects;
pub mod users;

use serde::Serialize;

/// One page of an offset-paginated listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: i64) -> Self {
        let page = page.max(1);
        let total_pages = if total <= 0 {
            0
        } else {
            ((total + per_page as i64 - 1) / per_page as i64) as u32
        };

        Self {
            has_prev: page > 1,
            has_next: (page as i64) * (per_page as i64) < total,
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

/// Row offset for a 1-based page number. Pages below 1 clamp to the first.
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    (page.max(1) as i64 - 1) * per_page as i64
}
