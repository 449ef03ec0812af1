//! Relevance scoring
//!
//! The keyword is lower-cased and split on whitespace. Every term adds the
//! weight of each field that contains it (case-insensitive substring match),
//! so a post matching more terms, or matching in stronger fields, ranks
//! higher. Body content is compared with its markup stripped.

use crate::content::Post;
use crate::helpers::strip_tags;

/// Score contributed by a term found in each field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights {
    pub title: u32,
    pub summary: u32,
    pub category: u32,
    pub author: u32,
    pub content: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 4,
            summary: 2,
            category: 2,
            author: 1,
            content: 1,
        }
    }
}

/// Relevance of `post` to `keyword`; zero means no match
pub fn calculate_weight(post: &Post, keyword: &str, weights: &FieldWeights) -> u32 {
    let keyword = keyword.to_lowercase();
    let terms: Vec<&str> = keyword.split_whitespace().collect();
    if terms.is_empty() {
        return 0;
    }

    let fields = [
        (Some(post.title.to_lowercase()), weights.title),
        (Some(post.summary.to_lowercase()), weights.summary),
        (post.category_name().map(str::to_lowercase), weights.category),
        (
            post.author.as_ref().map(|a| a.name.to_lowercase()),
            weights.author,
        ),
        (
            post.content.as_deref().map(|c| strip_tags(c).to_lowercase()),
            weights.content,
        ),
    ];

    terms
        .iter()
        .map(|term| {
            fields
                .iter()
                .filter_map(|(text, weight)| match text {
                    Some(text) if text.contains(term) => Some(*weight),
                    _ => None,
                })
                .sum::<u32>()
        })
        .sum()
}
