//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::pages::{self, ListingQuery, ListingState};
use crate::Blog;

/// Options of `strapi-blog list`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// post or category
    pub content_type: String,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// List site content by type
pub async fn run(blog: &Blog, options: &ListOptions) -> Result<()> {
    let client = blog.client();

    match options.content_type.as_str() {
        "post" | "posts" => {
            let query = ListingQuery {
                category: options.category.clone(),
                q: options.search.clone(),
            };
            let page = pages::load_listing(&client, &blog.config, &query).await?;

            match page.state {
                ListingState::Posts { posts } => {
                    println!("Posts ({}):", posts.len());
                    for post in posts {
                        println!(
                            "  {} - {} [{}]{}",
                            post.published_on.as_deref().unwrap_or("undated"),
                            post.title,
                            post.slug,
                            post.reading_time
                                .map(|r| format!(" ({})", r))
                                .unwrap_or_default()
                        );
                    }
                }
                ListingState::Empty { message } => println!("{}", message),
                ListingState::ServerError { .. } => {
                    anyhow::bail!("Failed to fetch posts from {}", blog.config.api.base());
                }
            }
        }
        "category" | "categories" => {
            let categories = client.fetch_categories().await?;
            let posts = client.fetch_posts().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to fetch posts, counts unavailable: {}", e);
                Vec::new()
            });

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for post in &posts {
                if let Some(name) = post.category_name() {
                    *counts.entry(name).or_insert(0) += 1;
                }
            }

            println!("Categories ({}):", categories.len());
            for category in &categories {
                println!(
                    "  {} ({})",
                    category.name,
                    counts.get(category.name.as_str()).copied().unwrap_or(0)
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                options.content_type
            );
        }
    }

    Ok(())
}
