//! Landing page blocks: featured courses and latest articles.

use salesdeck_config::{FEATURED_COURSES_LIMIT, LATEST_ARTICLES_LIMIT};
use salesdeck_core::{Article, Course, ListEnvelope, ListingFilters, Locale};
use salesdeck_infra::{ApiClient, ApiError};
use tracing::error;

/// Content of the landing page for one locale. A block whose fetch failed is
/// empty; the failure is only logged.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingBlocks {
    pub locale: Locale,
    pub courses: Vec<Course>,
    pub articles: Vec<Article>,
}

impl LandingBlocks {
    /// Whether the blocks were fetched for another locale and must be reloaded.
    pub fn is_stale(&self, locale: Locale) -> bool {
        self.locale != locale
    }
}

fn or_empty<T>(block: &str, result: Result<ListEnvelope<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(env) => env.data,
        Err(e) => {
            error!("Error fetching {block}: {e}");
            Vec::new()
        }
    }
}

/// Fetches both blocks concurrently, scoped to the audience of `locale`.
pub async fn landing_blocks(api: &ApiClient, locale: Locale) -> LandingBlocks {
    let audience = locale.audience();
    let courses = ListingFilters::default().to_query(FEATURED_COURSES_LIMIT, audience);
    let articles = ListingFilters::default().to_query(LATEST_ARTICLES_LIMIT, audience);

    let (courses, articles) =
        tokio::join!(api.list_courses(&courses), api.list_articles(&articles));

    LandingBlocks {
        locale,
        courses: or_empty("featured courses", courses),
        articles: or_empty("latest articles", articles),
    }
}
