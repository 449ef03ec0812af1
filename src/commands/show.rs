//! Show a single post

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::helpers::strip_tags;
use crate::pages::{self, PageStatus};
use crate::Blog;

/// Print a post with its derived fields
pub async fn run(blog: &Blog, slug: &str) -> Result<()> {
    let client = blog.client();
    let markdown = MarkdownRenderer::new();
    let page = pages::load_post_page(&client, &blog.config, slug, &markdown).await?;

    let post = match (page.status, page.post) {
        (PageStatus::Success, Some(post)) => post,
        (PageStatus::NotFound, _) => anyhow::bail!("Post not found: {}", slug),
        _ => anyhow::bail!("Failed to fetch post {} from {}", slug, blog.config.api.base()),
    };

    println!("{}", post.title);
    println!("  slug:      {}", post.slug);
    if let Some(category) = &post.category {
        println!("  category:  {}", category);
    }
    if let Some(author) = &post.author_name {
        println!("  author:    {}", author);
    }
    if let Some(date) = &post.published_on {
        println!("  published: {}", date);
    }
    if let Some(reading_time) = post.reading_time {
        println!("  reading:   {}", reading_time);
    }
    if let Some(image) = &post.image_url {
        println!("  image:     {}", image);
    }
    if !post.summary.is_empty() {
        println!();
        println!("{}", post.summary);
    }
    if let Some(html) = &post.content_html {
        println!();
        println!("{}", strip_tags(html).trim());
    }

    Ok(())
}
