//! Page models
//!
//! Each page is built in two steps: an async `load_*` that performs the
//! fetches, and a synchronous `build_*` that turns their results into a
//! serialisable model for the templates.

mod listing;
mod post;
mod status;

pub use listing::{build_listing, load_listing, CategoryTab, ListingPage, ListingQuery, ListingState};
pub use post::{build_post_page, load_post_page, PostPage};
pub use status::PageStatus;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::helpers;

/// SEO and header metadata shared by every page
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub title: String,
    pub site_title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub canonical: String,
    pub home: String,
    pub image: Option<String>,
}

impl SiteMeta {
    pub fn new(config: &SiteConfig, path: &str) -> Self {
        Self {
            title: config.title.clone(),
            site_title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            canonical: helpers::full_url_for(config, path),
            home: helpers::url_for(config, ""),
            image: None,
        }
    }
}
