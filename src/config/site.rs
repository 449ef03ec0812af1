//! Site configuration (_config.yml)

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,

    // CMS
    #[serde(default)]
    pub api: ApiConfig,

    // Presentation states
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Canopas Blogs".to_string(),
            description: "Sharing knowledge on Web, Backend, iOS, Android, and Flutter development"
                .to_string(),
            author: "canopas".to_string(),
            language: "en".to_string(),
            timezone: "UTC".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            api: ApiConfig::default(),
            status: StatusConfig::default(),
            messages: MessagesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the configured IANA timezone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid timezone {:?}: {}", self.timezone, e))
    }

    /// Reject values that would make every request or derived field wrong
    pub fn validate(&self) -> Result<()> {
        self.tz()?;
        if self.api.words_per_minute == 0 {
            anyhow::bail!("api.words_per_minute must be greater than zero");
        }
        if !self.api.strapi_url.starts_with("http://") && !self.api.strapi_url.starts_with("https://")
        {
            anyhow::bail!("api.strapi_url must be an http(s) URL: {}", self.api.strapi_url);
        }
        Ok(())
    }
}

/// Strapi connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the Strapi server, also used to resolve relative media URLs
    pub strapi_url: String,
    /// Path prefix of the content API
    pub api_path: String,
    /// Value of the `populate` query parameter
    pub populate: String,
    /// Restrict listings to published posts
    pub published_only: bool,
    pub words_per_minute: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            strapi_url: "http://localhost:1337".to_string(),
            api_path: "/v1".to_string(),
            populate: "deep".to_string(),
            published_only: true,
            words_per_minute: 200,
        }
    }
}

impl ApiConfig {
    /// `{strapi_url}{api_path}` without a trailing slash
    pub fn base(&self) -> String {
        let origin = self.strapi_url.trim_end_matches('/');
        let path = self.api_path.trim_matches('/');
        if path.is_empty() {
            origin.to_string()
        } else {
            format!("{}/{}", origin, path)
        }
    }
}

/// HTTP statuses the pages branch on
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub success: u16,
    pub not_found: u16,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            success: 200,
            not_found: 404,
        }
    }
}

/// User-visible messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub no_posts: String,
    pub server_error: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            no_posts: "No Posts found".to_string(),
            server_error: "Something went wrong on our side. Please try again later.".to_string(),
        }
    }
}
