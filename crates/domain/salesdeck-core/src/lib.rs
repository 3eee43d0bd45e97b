use serde::{Deserialize, Serialize};

pub mod content;
pub mod filters;
mod lenient;
pub mod locale;

pub use content::{Article, Category, Course};
pub use filters::{Level, ListQuery, ListingFilters, ParseLevelError};
pub use locale::{Audience, Locale, ParseLocaleError};

/// The two browsable collections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Courses,
    Articles,
}

impl ContentKind {
    /// Collection segment of the REST API. Articles are served as "blogs".
    pub fn collection(self) -> &'static str {
        match self {
            ContentKind::Courses => "courses",
            ContentKind::Articles => "blogs",
        }
    }

    /// Only course listings can be filtered by level.
    pub fn supports_level(self) -> bool {
        matches!(self, ContentKind::Courses)
    }
}

/// Pagination block returned by every list endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub pages: u32,
    pub limit: u32,
}

impl Pagination {
    /// Placeholder used when no list has been fetched yet (or the first fetch failed).
    pub fn empty(limit: u32) -> Self {
        Self {
            total: 0,
            page: 1,
            pages: 1,
            limit,
        }
    }

    /// Dense page-number list `1..=pages`. No windowing.
    pub fn page_numbers(&self) -> Vec<u32> {
        (1..=self.pages).collect()
    }
}

/// `{ status, results, pagination, data }` envelope of the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: u64,
    pub pagination: Pagination,
    /// Items that failed to parse are skipped instead of failing the page.
    #[serde(
        default = "Vec::new",
        deserialize_with = "lenient::vec",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn empty(limit: u32) -> Self {
        Self {
            status: "success".to_string(),
            results: 0,
            pagination: Pagination::empty(limit),
            data: Vec::new(),
        }
    }
}

/// `{ status, data }` envelope of the detail and category endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub status: String,
    pub data: T,
}
