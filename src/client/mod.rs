//! Content fetcher for the Strapi REST API
//!
//! Each call is a single best-effort GET: no retries, no timeout policy and
//! no caching. Failures come back as [`FetchError`] and the caller decides
//! which page state they map to.

mod error;

pub use error::FetchError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::content::strapi::{CategoryAttributes, Envelope, PostAttributes, Record};
use crate::content::{Category, Post};
use crate::helpers::encode_segment;

/// Decoded body of a post request
#[derive(Debug, Clone)]
pub enum PostPayload {
    /// Item endpoint result
    One(Post),
    /// Collection endpoint result
    Many(Vec<Post>),
}

/// Reads posts and categories from the CMS
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: Client,
    api: ApiConfig,
}

impl ContentClient {
    /// Create a client for the given API settings
    pub fn new(api: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            api,
        }
    }

    /// Endpoint for one post (`slug` present) or for the listing
    pub fn posts_url(&self, slug: Option<&str>) -> String {
        match slug {
            Some(slug) => format!("{}/posts/{}", self.api.base(), encode_segment(slug)),
            None => format!("{}/posts", self.api.base()),
        }
    }

    pub fn categories_url(&self) -> String {
        format!("{}/categories", self.api.base())
    }

    /// Fetch one post by slug, or every post when `slug` is `None`
    pub async fn fetch(&self, slug: Option<&str>) -> Result<PostPayload, FetchError> {
        let url = self.posts_url(slug);
        let mut query = vec![("populate", self.api.populate.as_str())];

        match slug {
            Some(_) => {
                let envelope: Envelope<Record<PostAttributes>> = self.get(&url, &query).await?;
                let record = envelope.data.ok_or(FetchError::Missing { url })?;
                Ok(PostPayload::One(record.into()))
            }
            None => {
                if self.api.published_only {
                    query.push(("status", "published"));
                }
                let envelope: Envelope<Vec<Record<PostAttributes>>> =
                    self.get(&url, &query).await?;
                let posts = envelope
                    .data
                    .unwrap_or_default()
                    .into_iter()
                    .map(Post::from)
                    .collect();
                Ok(PostPayload::Many(posts))
            }
        }
    }

    /// Fetch every post
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        match self.fetch(None).await? {
            PostPayload::Many(posts) => Ok(posts),
            PostPayload::One(post) => Ok(vec![post]),
        }
    }

    /// Fetch a single post by slug
    pub async fn fetch_post(&self, slug: &str) -> Result<Post, FetchError> {
        match self.fetch(Some(slug)).await? {
            PostPayload::One(post) => Ok(post),
            PostPayload::Many(posts) => {
                posts
                    .into_iter()
                    .next()
                    .ok_or_else(|| FetchError::Missing {
                        url: self.posts_url(Some(slug)),
                    })
            }
        }
    }

    /// Fetch every category
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = self.categories_url();
        let query = [("populate", self.api.populate.as_str())];
        let envelope: Envelope<Vec<Record<CategoryAttributes>>> = self.get(&url, &query).await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn post_record(id: u64, slug: &str) -> Value {
        json!({
            "id": id,
            "attributes": {
                "title": format!("Post {}", id),
                "slug": slug,
                "summary": "summary",
                "content": "<p>body</p>",
                "publishedAt": "2023-05-10T00:00:00Z",
                "category": { "data": { "id": 1, "attributes": { "name": "android" } } }
            }
        })
    }

    /// Serve `router` on an ephemeral port and return a client pointed at it
    async fn serve(router: Router) -> ContentClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let api = ApiConfig {
            strapi_url: format!("http://{}", addr),
            ..ApiConfig::default()
        };
        ContentClient::new(api)
    }

    #[test]
    fn test_endpoint_urls() {
        let client = ContentClient::new(ApiConfig::default());
        assert_eq!(client.posts_url(None), "http://localhost:1337/v1/posts");
        assert_eq!(
            client.posts_url(Some("kotlin-flows")),
            "http://localhost:1337/v1/posts/kotlin-flows"
        );
        assert_eq!(
            client.posts_url(Some("a/b")),
            "http://localhost:1337/v1/posts/a%2Fb"
        );
        assert_eq!(
            client.categories_url(),
            "http://localhost:1337/v1/categories"
        );
    }

    #[tokio::test]
    async fn test_fetch_listing_sends_query() {
        let router = Router::new().route(
            "/v1/posts",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("populate").map(String::as_str), Some("deep"));
                assert_eq!(params.get("status").map(String::as_str), Some("published"));
                Json(json!({ "data": [post_record(1, "one"), post_record(2, "two")] }))
            }),
        );
        let client = serve(router).await;

        let posts = client.fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].slug, "two");
        assert_eq!(posts[0].category_name(), Some("android"));
    }

    #[tokio::test]
    async fn test_fetch_listing_keeps_posts_beside_null_record() {
        let router = Router::new().route(
            "/v1/posts",
            get(|| async {
                Json(json!({ "data": [
                    post_record(1, "good"),
                    { "id": 2, "attributes": { "title": null, "slug": "draft" } }
                ] }))
            }),
        );
        let client = serve(router).await;

        let posts = client.fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Post 1");
        assert_eq!(posts[0].slug, "good");
        assert_eq!(posts[1].title, "");
    }

    #[tokio::test]
    async fn test_fetch_single_post() {
        let router = Router::new().route(
            "/v1/posts/:slug",
            get(|Path(slug): Path<String>| async move {
                Json(json!({ "data": post_record(9, &slug) }))
            }),
        );
        let client = serve(router).await;

        match client.fetch(Some("kotlin-flows")).await.unwrap() {
            PostPayload::One(post) => {
                assert_eq!(post.id, 9);
                assert_eq!(post.slug, "kotlin-flows");
            }
            other => panic!("expected a single post, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_null_record_is_missing() {
        let router = Router::new().route(
            "/v1/posts/:slug",
            get(|| async { Json(json!({ "data": null })) }),
        );
        let client = serve(router).await;

        let err = client.fetch_post("gone").await.unwrap_err();
        assert!(matches!(err, FetchError::Missing { .. }));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/v1/posts",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "data": [], "error": { "status": 500 } })),
                )
            }),
        );
        let client = serve(router).await;

        let err = client.fetch_posts().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.url().ends_with("/v1/posts"));
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let router = Router::new().route("/v1/categories", get(|| async { "<html>oops</html>" }));
        let client = serve(router).await;

        let err = client.fetch_categories().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let router = Router::new().route(
            "/v1/categories",
            get(|| async {
                Json(json!({ "data": [
                    { "id": 1, "attributes": { "name": "android" } },
                    { "id": 2, "attributes": { "name": "iOS" } }
                ] }))
            }),
        );
        let client = serve(router).await;

        let categories = client.fetch_categories().await.unwrap();
        assert_eq!(
            categories,
            vec![Category::new(1, "android"), Category::new(2, "iOS")]
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = ApiConfig {
            strapi_url: format!("http://{}", addr),
            ..ApiConfig::default()
        };
        let err = ContentClient::new(api).fetch_posts().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
