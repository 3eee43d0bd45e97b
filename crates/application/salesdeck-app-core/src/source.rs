use std::marker::PhantomData;

use salesdeck_core::{
    Article, Audience, ContentKind, Course, ListEnvelope, ListQuery, ListingFilters,
};
use salesdeck_infra::ApiClient;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::ports::ListingSource;

/// Listing pages served by the REST API.
pub struct HttpListingSource<T> {
    api: ApiClient,
    kind: ContentKind,
    _item: PhantomData<fn() -> T>,
}

impl HttpListingSource<Course> {
    pub fn courses(api: ApiClient) -> Self {
        Self {
            api,
            kind: ContentKind::Courses,
            _item: PhantomData,
        }
    }
}

impl HttpListingSource<Article> {
    pub fn articles(api: ApiClient) -> Self {
        Self {
            api,
            kind: ContentKind::Articles,
            _item: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<T> ListingSource for HttpListingSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Item = T;

    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn fetch_page(&self, query: ListQuery) -> anyhow::Result<ListEnvelope<T>> {
        Ok(self.api.list(self.kind, &query).await?)
    }
}

/// Fetches the unfiltered first page a listing is mounted with.
///
/// A failure is logged and replaced by an empty page, so the listing still
/// mounts and its own first fetch gets another chance.
pub async fn initial_page<S: ListingSource>(
    source: &S,
    limit: u32,
    audience: Audience,
) -> ListEnvelope<S::Item> {
    let query = ListingFilters::default().to_query(limit, audience);
    match source.fetch_page(query).await {
        Ok(env) => env,
        Err(e) => {
            error!("Error fetching initial {}: {e:#}", source.kind().collection());
            ListEnvelope::empty(limit)
        }
    }
}
