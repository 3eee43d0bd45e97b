//! Central configuration constants for the content API and listing behaviour.

/// Base URL of the content API when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Environment variable that overrides the content API base URL.
pub const API_URL_ENV: &str = "SALESDECK_API_URL";

/// Items requested per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Featured courses shown on the landing page.
pub const FEATURED_COURSES_LIMIT: u32 = 5;

/// Latest articles shown on the landing page.
pub const LATEST_ARTICLES_LIMIT: u32 = 3;

/// Smallest page size accepted from settings or flags.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size accepted from settings or flags.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Quiet period before a typed search query is committed (milliseconds).
pub const SEARCH_QUIET_PERIOD_MS: u64 = 500;

/// Course levels offered as filters. Fixed client-side, independent of backend data.
pub const COURSE_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Convenience function to clamp a page size into allowed range.
pub fn clamp_page_size(v: u32) -> u32 {
    v.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}
