//! strapi-blog: a server-rendered blog front end for a Strapi CMS
//!
//! Posts and categories are read from Strapi's REST API on every page load,
//! enriched with derived fields (reading time, formatted dates, resolved
//! media URLs) and rendered as a listing with category tabs and keyword
//! search, or as a single post.

pub mod client;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod pages;
pub mod search;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration, fixed after construction
    pub config: Arc<SiteConfig>,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

pub use config::SiteConfig;

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_overrides(base_dir, |_| {})
    }

    /// Load `_config.yml` and adjust it before it is frozen
    pub fn with_overrides<P, F>(base_dir: P, adjust: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut SiteConfig),
    {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        adjust(&mut config);
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            base_dir,
        })
    }

    /// Create a Blog around an already-built configuration
    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
            base_dir: std::path::PathBuf::from("."),
        }
    }

    /// A CMS client for this blog's API settings
    pub fn client(&self) -> client::ContentClient {
        client::ContentClient::new(self.config.api.clone())
    }

    /// List posts or categories
    pub async fn list(&self, options: &commands::list::ListOptions) -> Result<()> {
        commands::list::run(self, options).await
    }

    /// Show a single post
    pub async fn show(&self, slug: &str) -> Result<()> {
        commands::show::run(self, slug).await
    }

    /// Serve the blog over HTTP
    pub async fn serve(&self, ip: &str, port: u16) -> Result<()> {
        server::start(self, ip, port).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.api.strapi_url, "http://localhost:1337");
    }

    #[test]
    fn test_overrides_apply_after_loading() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: Engineering\napi:\n  strapi_url: http://cms.internal:1337\n",
        )
        .unwrap();

        let blog = Blog::with_overrides(dir.path(), |c| {
            c.api.strapi_url = "https://cms.example.com".to_string();
        })
        .unwrap();
        assert_eq!(blog.config.title, "Engineering");
        assert_eq!(blog.config.api.strapi_url, "https://cms.example.com");
    }

    #[test]
    fn test_override_replaces_invalid_file_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "api:\n  strapi_url: bad\n").unwrap();

        assert!(Blog::new(dir.path()).is_err());
        let blog = Blog::with_overrides(dir.path(), |c| {
            c.api.strapi_url = "https://ok.example.com".to_string();
        })
        .unwrap();
        assert_eq!(blog.config.api.strapi_url, "https://ok.example.com");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = Blog::with_overrides(dir.path(), |c| {
            c.api.strapi_url = "cms.example.com".to_string();
        });
        assert!(result.is_err());
    }
}
