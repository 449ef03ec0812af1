//! Display-ready post data
//!
//! A [`PostView`] is a [`Post`] with its derived fields computed: resolved
//! media URLs, formatted publication date and reading time. Views are built
//! per render and never stored.

use anyhow::Result;
use chrono_tz::Tz;
use serde::Serialize;

use super::{MarkdownRenderer, Post};
use crate::config::SiteConfig;
use crate::helpers::{self, ReadingTime};

/// Template-facing projection of a post
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub slug: String,
    /// Link to the detail page
    pub path: String,
    pub summary: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: String,
    pub author_name: Option<String>,
    pub author_image_url: Option<String>,
    pub author_image_alt: String,
    /// Formatted publication date ("May 10, 2023")
    pub published_on: Option<String>,
    /// Machine-readable publication date for `<time datetime>`
    pub published_iso: Option<String>,
    pub reading_time: Option<ReadingTime>,
    /// Rendered body, only filled for the detail page
    pub content_html: Option<String>,
}

/// Builds [`PostView`]s against one configuration
pub struct ViewBuilder<'a> {
    config: &'a SiteConfig,
    tz: Tz,
}

impl<'a> ViewBuilder<'a> {
    pub fn new(config: &'a SiteConfig) -> Result<Self> {
        Ok(Self {
            config,
            tz: config.tz()?,
        })
    }

    /// Derive the listing fields of a post
    pub fn summary(&self, post: &Post) -> PostView {
        let api = &self.config.api;

        let image_url = post
            .image
            .as_ref()
            .map(|m| helpers::media_url(api, &m.url));
        let image_alt = post
            .image
            .as_ref()
            .and_then(|m| m.alternative_text.clone())
            .unwrap_or_else(|| post.title.clone());

        let author = post.author.as_ref().filter(|a| !a.name.is_empty());
        let author_image = post.author.as_ref().and_then(|a| a.image.as_ref());

        let published_iso = post
            .published_at
            .as_deref()
            .and_then(helpers::parse_timestamp)
            .map(|d| helpers::date_xml(&d.with_timezone(&self.tz)));

        PostView {
            title: post.title.clone(),
            slug: post.slug.clone(),
            path: helpers::post_path(self.config, &post.slug),
            summary: post.summary.clone(),
            category: post.category_name().map(str::to_string),
            image_url,
            image_alt,
            author_name: author.map(|a| a.name.clone()),
            author_image_url: author_image.map(|m| helpers::media_url(api, &m.url)),
            author_image_alt: author_image
                .and_then(|m| m.alternative_text.clone())
                .or_else(|| author.map(|a| a.name.clone()))
                .unwrap_or_default(),
            published_on: helpers::format_published(post.published_at.as_deref(), &self.tz),
            published_iso,
            reading_time: helpers::reading_time(post.content.as_deref(), api.words_per_minute),
            content_html: None,
        }
    }

    /// Derive every field, including the rendered body
    pub fn full(&self, post: &Post, markdown: &MarkdownRenderer) -> PostView {
        let mut view = self.summary(post);
        view.content_html = post.content.as_deref().map(|c| markdown.render(c));
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, Category, Media};

    fn sample_post() -> Post {
        let mut post = Post::new(1, "Kotlin Flows", "kotlin-flows");
        post.summary = "Cold streams".to_string();
        post.content = Some("# Flows\n\nA *cold* stream.".to_string());
        post.published_at = Some("2023-05-10T00:00:00Z".to_string());
        post.image = Some(Media {
            url: "/uploads/flow.png".to_string(),
            alternative_text: None,
        });
        post.author = Some(Author {
            name: "Radhika".to_string(),
            image: Some(Media {
                url: "https://cdn.example.com/r.png".to_string(),
                alternative_text: Some("Radhika S.".to_string()),
            }),
        });
        post.category = Some(Category::new(3, "android"));
        post
    }

    #[test]
    fn test_summary_view() {
        let config = SiteConfig::default();
        let builder = ViewBuilder::new(&config).unwrap();
        let view = builder.summary(&sample_post());

        assert_eq!(view.path, "/kotlin-flows");
        assert_eq!(
            view.image_url.as_deref(),
            Some("http://localhost:1337/uploads/flow.png")
        );
        assert_eq!(view.image_alt, "Kotlin Flows");
        assert_eq!(view.author_name.as_deref(), Some("Radhika"));
        assert_eq!(
            view.author_image_url.as_deref(),
            Some("https://cdn.example.com/r.png")
        );
        assert_eq!(view.author_image_alt, "Radhika S.");
        assert_eq!(view.published_on.as_deref(), Some("May 10, 2023"));
        assert_eq!(view.published_iso.as_deref(), Some("2023-05-10T00:00:00+00:00"));
        assert_eq!(view.reading_time.map(|r| r.minutes), Some(1));
        assert_eq!(view.category.as_deref(), Some("android"));
        assert!(view.content_html.is_none());
    }

    #[test]
    fn test_full_view_renders_body() {
        let config = SiteConfig::default();
        let builder = ViewBuilder::new(&config).unwrap();
        let view = builder.full(&sample_post(), &MarkdownRenderer::new());
        assert!(view.content_html.unwrap().contains("<em>cold</em>"));
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let config = SiteConfig::default();
        let builder = ViewBuilder::new(&config).unwrap();
        let view = builder.summary(&Post::new(2, "Bare", "bare"));

        assert!(view.image_url.is_none());
        assert!(view.author_name.is_none());
        assert!(view.author_image_url.is_none());
        assert!(view.published_on.is_none());
        assert!(view.reading_time.is_none());
        assert!(view.category.is_none());
    }
}
