//! HTTP server rendering the blog on each request

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::client::ContentClient;
use crate::config::SiteConfig;
use crate::content::MarkdownRenderer;
use crate::pages::{self, ListingQuery, PageStatus};
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Blog;

/// Server state
pub struct ServerState {
    config: Arc<SiteConfig>,
    client: ContentClient,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl ServerState {
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            config: blog.config.clone(),
            client: blog.client(),
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::new(),
        })
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(listing_handler))
        .route("/assets/style.css", get(stylesheet_handler))
        .route("/:slug", get(post_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Reading content from {}", blog.config.api.base());
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /` - the searchable listing
async fn listing_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let page = match pages::load_listing(&state.client, &state.config, &query).await {
        Ok(page) => page,
        Err(e) => return render_failure(e),
    };

    // A listing with nothing to show is still a page, not a missing resource
    let status = match page.status {
        PageStatus::ServerError => PageStatus::ServerError,
        _ => PageStatus::Success,
    };
    let status = response_status(status, &state.config);

    match state.renderer.render_listing(&page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => render_failure(e),
    }
}

/// `GET /:slug` - a single post
async fn post_handler(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    let page =
        match pages::load_post_page(&state.client, &state.config, &slug, &state.markdown).await {
            Ok(page) => page,
            Err(e) => return render_failure(e),
        };

    let status = response_status(page.status, &state.config);

    match state.renderer.render_post(&page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => render_failure(e),
    }
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

fn response_status(status: PageStatus, config: &SiteConfig) -> StatusCode {
    StatusCode::from_u16(status.http_status(&config.status))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn render_failure(e: anyhow::Error) -> Response {
    tracing::error!("Failed to render page: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}
