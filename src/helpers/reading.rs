//! Reading-time estimate

use serde::Serialize;
use std::fmt;

use super::html::count_words;

/// Estimated minutes needed to read a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReadingTime {
    pub minutes: usize,
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Estimate the reading time of `content`
///
/// Tags are stripped before counting. Absent or blank content has no
/// reading time; anything else reads in at least one minute.
pub fn reading_time(content: Option<&str>, words_per_minute: usize) -> Option<ReadingTime> {
    let content = content?;
    if content.trim().is_empty() {
        return None;
    }

    let words = count_words(content);
    let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
    Some(ReadingTime { minutes })
}
