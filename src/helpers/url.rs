//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{ApiConfig, SiteConfig};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/kotlin-flows") // -> "/blog/kotlin-flows"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode a value as one URL path segment
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Encode a query-string value
pub fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Link to a post detail page
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &encode_segment(slug))
}

/// Link to the listing with a category and keyword preselected
pub fn listing_path(config: &SiteConfig, category: Option<&str>, keyword: &str) -> String {
    let mut params = Vec::new();
    if let Some(category) = category {
        params.push(format!("category={}", encode_query(category)));
    }
    if !keyword.is_empty() {
        params.push(format!("q={}", encode_query(keyword)));
    }

    let base = url_for(config, "");
    if params.is_empty() {
        base
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

/// Resolve a CMS media URL
///
/// Uploads stored on the Strapi server come back as `/uploads/...`; those are
/// prefixed with the CMS origin. Absolute URLs (CDN, S3) are returned as-is.
pub fn media_url(api: &ApiConfig, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        url.to_string()
    } else {
        format!(
            "{}/{}",
            api.strapi_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}
