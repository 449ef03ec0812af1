//! Category filtering and keyword ranking over fetched posts
//!
//! Everything here is a pure function of its inputs. What a reader sees is
//! always `displayed_posts(all, category, keyword)`: the category subset of
//! the last fetch, then ranked by the keyword within that subset.

mod weight;

pub use weight::{calculate_weight, FieldWeights};

use serde::{Deserialize, Serialize};

use crate::content::Post;

/// Name of the tab that selects every post
pub const ALL_CATEGORIES: &str = "all";

/// The selected category tab
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategorySelection {
    #[default]
    All,
    /// Exact, case-sensitive category name
    Named(String),
}

impl CategorySelection {
    /// Interpret a tab label; the sentinel `all` selects everything
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    /// Whether `post` belongs to this selection
    ///
    /// Posts without a category only match `All`.
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => post.category_name() == Some(name.as_str()),
        }
    }
}

/// A post paired with its relevance to the current keyword
#[derive(Debug, Clone, Copy)]
pub struct SearchResult<'a> {
    pub post: &'a Post,
    pub weight: u32,
}

/// Keep the posts of the selected category, in their original order
pub fn filter_by_category<'a>(posts: &'a [Post], selection: &CategorySelection) -> Vec<&'a Post> {
    posts.iter().filter(|p| selection.matches(p)).collect()
}

/// Rank `candidates` against `keyword`
///
/// Posts with zero weight are dropped; the rest are ordered by descending
/// weight. The sort is stable, so equal weights keep their input order.
pub fn search_posts<'a>(
    candidates: &[&'a Post],
    keyword: &str,
    weights: &FieldWeights,
) -> Vec<&'a Post> {
    let mut results: Vec<SearchResult<'a>> = candidates
        .iter()
        .map(|&post| SearchResult {
            post,
            weight: calculate_weight(post, keyword, weights),
        })
        .filter(|r| r.weight > 0)
        .collect();

    results.sort_by(|a, b| b.weight.cmp(&a.weight));

    results.into_iter().map(|r| r.post).collect()
}

/// Posts to display for a category and keyword
///
/// A blank keyword does not rank: the whole category subset is shown.
pub fn displayed_posts<'a>(
    posts: &'a [Post],
    selection: &CategorySelection,
    keyword: &str,
) -> Vec<&'a Post> {
    let candidates = filter_by_category(posts, selection);
    if keyword.trim().is_empty() {
        return candidates;
    }
    search_posts(&candidates, keyword, &FieldWeights::default())
}
