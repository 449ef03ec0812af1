//! Post and Category models

use serde::{Deserialize, Serialize};

/// A blog post as served by the CMS
///
/// Posts are read-only snapshots; nothing here is written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// CMS record id
    pub id: u64,

    /// Post title
    pub title: String,

    /// Slug (URL-friendly unique name)
    pub slug: String,

    /// Short teaser shown on the listing
    pub summary: String,

    /// Body as stored in the CMS (Markdown, possibly with inline HTML)
    pub content: Option<String>,

    /// Raw publication timestamp
    pub published_at: Option<String>,

    /// Cover image
    pub image: Option<Media>,

    pub author: Option<Author>,

    /// At most one category
    pub category: Option<Category>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: u64, title: &str, slug: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            summary: String::new(),
            content: None,
            published_at: None,
            image: None,
            author: None,
            category: None,
        }
    }

    /// Name of the post's category, if any
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// An uploaded media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Absolute URL or a path relative to the CMS origin
    pub url: String,
    pub alternative_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub image: Option<Media>,
}

/// A category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

impl Category {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}
