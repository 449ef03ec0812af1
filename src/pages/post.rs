//! Single post page

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use super::{PageStatus, SiteMeta};
use crate::client::{ContentClient, FetchError};
use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, Post, PostView, ViewBuilder};
use crate::helpers;

#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub site: SiteMeta,
    pub status: PageStatus,
    /// Present only when `status` is `Success`
    pub post: Option<PostView>,
    /// Shown instead of the post
    pub message: Option<String>,
}

/// Build the detail page from a fetch result
pub fn build_post_page(
    config: &SiteConfig,
    slug: &str,
    result: Result<Post, FetchError>,
    markdown: &MarkdownRenderer,
) -> Result<PostPage> {
    let status = PageStatus::classify(&result, &config.status);
    let path = helpers::encode_segment(slug);

    let (post, message) = match result {
        Ok(post) => {
            let views = ViewBuilder::new(config)?;
            (Some(views.full(&post, markdown)), None)
        }
        Err(e) => {
            warn!("Post {:?} unavailable ({:?}): {}", slug, status, e);
            let message = match status {
                PageStatus::ServerError => config.messages.server_error.clone(),
                _ => config.messages.no_posts.clone(),
            };
            (None, Some(message))
        }
    };

    let mut site = SiteMeta::new(config, &path);
    if let Some(view) = &post {
        site.title = format!("{} | {}", view.title, config.title);
        if !view.summary.is_empty() {
            site.description = view.summary.clone();
        }
        site.image = view.image_url.clone();
    }

    Ok(PostPage {
        site,
        status,
        post,
        message,
    })
}

/// Fetch one post and build its page
pub async fn load_post_page(
    client: &ContentClient,
    config: &SiteConfig,
    slug: &str,
    markdown: &MarkdownRenderer,
) -> Result<PostPage> {
    let result = client.fetch_post(slug).await;
    build_post_page(config, slug, result, markdown)
}
