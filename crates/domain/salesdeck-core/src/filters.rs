use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::locale::Audience;

/// Course difficulty tier. Closed set defined client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}' (expected Beginner, Intermediate or Advanced)")]
pub struct ParseLevelError(pub String);

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Exact string sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active query dimensions of a listing plus the current page.
///
/// `category` and `search` use the empty string as their "unset" value.
/// `search` here is always the committed (debounced) query, never raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilters {
    pub page: u32,
    pub category: String,
    pub level: Option<Level>,
    pub search: String,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            page: 1,
            category: String::new(),
            level: None,
            search: String::new(),
        }
    }
}

impl ListingFilters {
    pub fn is_filtered(&self) -> bool {
        !self.category.is_empty() || self.level.is_some() || !self.search.is_empty()
    }

    /// Builds the outbound query for these filters.
    pub fn to_query(&self, limit: u32, audience: Audience) -> ListQuery {
        ListQuery {
            page: self.page,
            limit,
            search: non_empty(&self.search),
            category: non_empty(&self.category),
            level: self.level,
            audience,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parameter set of one list request. Unset dimensions are `None` and never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<Level>,
    pub audience: Audience,
}

impl ListQuery {
    /// Query-string pairs in the order the backend documents them.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            out.push(("search", search.clone()));
        }
        if let Some(category) = &self.category {
            out.push(("category", category.clone()));
        }
        if let Some(level) = self.level {
            out.push(("level", level.as_str().to_string()));
        }
        out.push(("audience", self.audience.as_str().to_string()));
        out
    }

    /// Same query with the level dimension removed (article listings have none).
    pub fn without_level(mut self) -> Self {
        self.level = None;
        self
    }
}
