//! CLI entry point for strapi-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strapi_blog::commands::list::ListOptions;
use strapi_blog::Blog;

#[derive(Parser)]
#[command(name = "strapi-blog")]
#[command(version)]
#[command(about = "Server-rendered blog front end for a Strapi CMS", long_about = None)]
struct Cli {
    /// Set the base directory holding _config.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Override the Strapi server URL from the configuration
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the blog
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts or categories
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category (exact name)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Rank posts by this keyword
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a single post
    Show {
        /// Post slug
        slug: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "strapi_blog=debug,info"
    } else {
        "strapi_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let api_url = cli.api_url;
    let load = || {
        Blog::with_overrides(&base_dir, |config| {
            if let Some(url) = api_url.clone() {
                config.api.strapi_url = url;
            }
        })
    };

    match cli.command {
        Commands::Serve { port, ip } => {
            let blog = load()?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog.serve(&ip, port).await?;
        }

        Commands::List {
            r#type,
            category,
            search,
        } => {
            let blog = load()?;
            let options = ListOptions {
                content_type: r#type,
                category,
                search,
            };
            blog.list(&options).await?;
        }

        Commands::Show { slug } => {
            let blog = load()?;
            blog.show(&slug).await?;
        }

        Commands::Version => {
            println!("strapi-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
