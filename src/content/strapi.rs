//! Strapi response envelopes
//!
//! Every Strapi payload wraps its records in `{ "data": ... }`, every record
//! carries its fields under `attributes`, and relations are themselves
//! envelopes. These types only exist to be decoded and converted into the
//! flat models in [`super::post`].

use serde::Deserialize;

use super::post::{Author, Category, Media, Post};

/// Top-level `{ "data": ... }` wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// A single `{ "id", "attributes" }` record
#[derive(Debug, Clone, Deserialize)]
pub struct Record<A> {
    pub id: u64,
    pub attributes: A,
}

/// A nested relation; `data` is `null` when nothing is linked
#[derive(Debug, Clone, Deserialize)]
pub struct Relation<A> {
    pub data: Option<Record<A>>,
}

impl<A> Relation<A> {
    fn into_attributes(self) -> Option<(u64, A)> {
        self.data.map(|r| (r.id, r.attributes))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Editorial publication date
    #[serde(default)]
    pub published_on: Option<String>,
    /// Strapi's own publication timestamp
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub image: Option<Relation<MediaAttributes>>,
    #[serde(default)]
    pub author: Option<Relation<AuthorAttributes>>,
    #[serde(default)]
    pub category: Option<Relation<CategoryAttributes>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttributes {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "alternativeText")]
    pub alternative_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub image: Option<Relation<MediaAttributes>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryAttributes {
    #[serde(default)]
    pub name: Option<String>,
}

fn media(relation: Option<Relation<MediaAttributes>>) -> Option<Media> {
    let (_, attrs) = relation?.into_attributes()?;
    Some(Media {
        url: attrs.url.filter(|u| !u.is_empty())?,
        alternative_text: attrs.alternative_text.filter(|s| !s.is_empty()),
    })
}

impl From<Record<CategoryAttributes>> for Category {
    fn from(record: Record<CategoryAttributes>) -> Self {
        Category {
            id: record.id,
            name: record.attributes.name.unwrap_or_default(),
        }
    }
}

impl From<Record<PostAttributes>> for Post {
    fn from(record: Record<PostAttributes>) -> Self {
        let attrs = record.attributes;

        let author = attrs
            .author
            .and_then(Relation::into_attributes)
            .map(|(_, a)| Author {
                name: a.name.or(a.username).unwrap_or_default(),
                image: media(a.image),
            });

        let category = attrs
            .category
            .and_then(Relation::into_attributes)
            .map(|(id, c)| Category {
                id,
                name: c.name.unwrap_or_default(),
            });

        Post {
            id: record.id,
            title: attrs.title.unwrap_or_default(),
            slug: attrs.slug.unwrap_or_default(),
            summary: attrs.summary.unwrap_or_default(),
            content: attrs.content,
            published_at: attrs.published_on.or(attrs.published_at),
            image: media(attrs.image),
            author,
            category,
        }
    }
}
