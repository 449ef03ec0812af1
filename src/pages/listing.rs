//! The searchable post listing

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{PageStatus, SiteMeta};
use crate::client::{ContentClient, FetchError};
use crate::config::SiteConfig;
use crate::content::{Category, Post, PostView, ViewBuilder};
use crate::helpers;
use crate::search::{displayed_posts, CategorySelection, ALL_CATEGORIES};

/// Listing UI state carried in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    /// Selected category tab; absent means `all`
    pub category: Option<String>,
    /// Search keyword
    pub q: Option<String>,
}

impl ListingQuery {
    pub fn selection(&self) -> CategorySelection {
        self.category
            .as_deref()
            .map(CategorySelection::parse)
            .unwrap_or_default()
    }

    pub fn keyword(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// One category tab
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTab {
    pub name: String,
    /// Link selecting this tab, keeping the current keyword
    pub path: String,
    pub active: bool,
}

/// What the listing body shows
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingState {
    Posts { posts: Vec<PostView> },
    Empty { message: String },
    ServerError { message: String },
}

/// Everything the listing template needs
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub site: SiteMeta,
    pub status: PageStatus,
    pub tabs: Vec<CategoryTab>,
    /// 0 for `all`, `i + 1` for the i-th fetched category
    pub active_index: Option<usize>,
    pub category: String,
    pub keyword: String,
    /// Number of displayed posts
    pub count: usize,
    /// Lay the first card out full width
    pub featured: bool,
    pub state: ListingState,
}

impl ListingPage {
    pub fn posts(&self) -> &[PostView] {
        match &self.state {
            ListingState::Posts { posts } => posts,
            _ => &[],
        }
    }
}

/// Build the listing from fetch results
///
/// A failed post fetch always renders the server-error state, whatever the
/// filters would have produced.
pub fn build_listing(
    config: &SiteConfig,
    posts: Result<Vec<Post>, FetchError>,
    categories: &[Category],
    query: &ListingQuery,
) -> Result<ListingPage> {
    let status = PageStatus::classify(&posts, &config.status);
    if let Err(e) = &posts {
        warn!("Post listing unavailable ({:?}): {}", status, e);
    }
    let posts = posts.unwrap_or_default();

    let selection = query.selection();
    let keyword = query.keyword().to_string();

    let displayed = displayed_posts(&posts, &selection, &keyword);
    debug!(
        "Displaying {} of {} posts (category={:?}, keyword={:?})",
        displayed.len(),
        posts.len(),
        selection.name(),
        keyword
    );

    let state = match status {
        PageStatus::ServerError => ListingState::ServerError {
            message: config.messages.server_error.clone(),
        },
        _ if displayed.is_empty() => ListingState::Empty {
            message: config.messages.no_posts.clone(),
        },
        _ => {
            let views = ViewBuilder::new(config)?;
            ListingState::Posts {
                posts: displayed.iter().map(|p| views.summary(p)).collect(),
            }
        }
    };

    let names = std::iter::once(ALL_CATEGORIES).chain(categories.iter().map(|c| c.name.as_str()));
    let tabs: Vec<CategoryTab> = names
        .map(|name| {
            let param = (name != ALL_CATEGORIES).then_some(name);
            CategoryTab {
                name: name.to_string(),
                path: helpers::listing_path(config, param, &keyword),
                active: name == selection.name(),
            }
        })
        .collect();
    let active_index = tabs.iter().position(|t| t.active);

    let count = match &state {
        ListingState::Posts { posts } => posts.len(),
        _ => 0,
    };

    Ok(ListingPage {
        site: SiteMeta::new(config, "/"),
        status,
        tabs,
        active_index,
        category: selection.name().to_string(),
        keyword,
        count,
        featured: count % 3 == 1,
        state,
    })
}

/// Fetch posts and categories, then build the listing
///
/// A failed category fetch only costs the tabs; it is logged and ignored.
pub async fn load_listing(
    client: &ContentClient,
    config: &SiteConfig,
    query: &ListingQuery,
) -> Result<ListingPage> {
    let posts = client.fetch_posts().await;

    let categories = client.fetch_categories().await.unwrap_or_else(|e| {
        warn!("Failed to fetch categories: {}", e);
        Vec::new()
    });

    build_listing(config, posts, &categories, query)
}
