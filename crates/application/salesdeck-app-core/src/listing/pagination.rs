//! Page navigation rules. All bounds come from the last fetched metadata.

use salesdeck_core::Pagination;

/// Page before `current`, or `None` on the first page.
pub fn prev_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

/// Page after `current`, or `None` on the last page.
pub fn next_page(current: u32, meta: &Pagination) -> Option<u32> {
    (current < meta.pages).then(|| current + 1)
}
