use salesdeck_core::{ContentKind, ListEnvelope, ListQuery, Locale};

/// Where one listing gets its pages from.
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    fn kind(&self) -> ContentKind;

    async fn fetch_page(&self, query: ListQuery) -> anyhow::Result<ListEnvelope<Self::Item>>;
}

/// Durable storage of the user's language choice.
pub trait PreferenceStore: Send + Sync + 'static {
    fn load_preferred_language(&self) -> anyhow::Result<Option<String>>;
    fn save_preferred_language(&self, tag: &str) -> anyhow::Result<()>;
}

/// Routing layer that renders content for a locale.
pub trait RoutingPort: Send + Sync + 'static {
    fn set_locale(&self, locale: Locale) -> anyhow::Result<()>;
}
