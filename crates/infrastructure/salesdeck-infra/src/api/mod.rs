//! Typed client for the content REST API.

use reqwest::{Client, Response, Url};
use salesdeck_core::{
    Article, Audience, Category, ContentKind, Course, DataEnvelope, ListEnvelope, ListQuery,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod error;

pub use error::{ApiError, ApiErrorKind};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

/// Normalize the API base so every endpoint resolves *below* it.
/// `http://host/api` and `http://host/api/` are equivalent.
pub(crate) fn normalize_api_base(base_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl {
            url: base_url.to_string(),
            reason: "not a base url".into(),
        });
    }

    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url.set_query(None);

    Ok(url)
}

impl ApiClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client,
            base: normalize_api_base(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base.to_string(),
                reason: "cannot mutate url segments".into(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// `GET /courses` or `GET /blogs`, paginated and filtered.
    pub async fn list<T: DeserializeOwned>(
        &self,
        kind: ContentKind,
        query: &ListQuery,
    ) -> Result<ListEnvelope<T>, ApiError> {
        let query = if kind.supports_level() {
            query.clone()
        } else {
            query.clone().without_level()
        };
        let url = self.endpoint(&[kind.collection()])?;
        self.get_json(url, &query.pairs()).await
    }

    pub async fn list_courses(&self, query: &ListQuery) -> Result<ListEnvelope<Course>, ApiError> {
        self.list(ContentKind::Courses, query).await
    }

    pub async fn list_articles(
        &self,
        query: &ListQuery,
    ) -> Result<ListEnvelope<Article>, ApiError> {
        self.list(ContentKind::Articles, query).await
    }

    async fn detail<T: DeserializeOwned>(
        &self,
        kind: ContentKind,
        id: &str,
        audience: Audience,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(&[kind.collection(), id])?;
        let env: DataEnvelope<T> = self
            .get_json(url, &[("audience", audience.as_str().to_string())])
            .await?;
        Ok(env.data)
    }

    pub async fn course(&self, id: &str, audience: Audience) -> Result<Course, ApiError> {
        self.detail(ContentKind::Courses, id, audience).await
    }

    pub async fn article(&self, id: &str, audience: Audience) -> Result<Article, ApiError> {
        self.detail(ContentKind::Articles, id, audience).await
    }

    /// `GET /{collection}/get/categories`. Not audience-scoped.
    pub async fn categories(&self, kind: ContentKind) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint(&[kind.collection(), "get", "categories"])?;
        let env: DataEnvelope<Vec<Category>> = self.get_json(url, &[]).await?;
        Ok(env.data)
    }

    /// `POST /users/register`. Returns the raw response body on success.
    pub async fn register(&self, req: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&["users", "register"])?;
        debug!("POST {url}");
        let resp = self
            .client
            .post(url.clone())
            .json(req)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::decode(url, resp).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("GET {url} {query:?}");
        let resp = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::decode(url, resp).await
    }

    async fn decode<T: DeserializeOwned>(url: Url, resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty());
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
