// Axum web server: router, shared state and error responses
//
// Every page is rendered on the server. Links and forms work without
// JavaScript; htmx (boosted links) swaps only `<main>` when present.

pub mod handlers;
pub mod storage;
pub mod views;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use axum_htmx::AutoVaryLayer;
use moka::future::Cache;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::content::{self, ContactChannel, Profile};
use crate::error::SiteError;

use handlers::{contact, pages, theme};
use views::NotFoundTemplate;

// ============================================================================
// Application State
// ============================================================================

/// Content rendered once at startup
#[derive(Debug)]
pub struct Catalog {
    pub profile: Profile,
    pub channels: Vec<ContactChannel>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub catalog: Arc<Catalog>,
    /// Rendered HTML keyed by shell state
    pub pages: Cache<String, String>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        tracing::info!("Rendering content catalog...");
        let catalog = Arc::new(Catalog {
            profile: content::profile(),
            channels: content::contact_channels(),
        });

        tracing::info!(
            "Initializing page cache (capacity {}, ttl {:?})",
            config.page_cache_capacity,
            config.page_cache_ttl
        );
        let pages = Cache::builder()
            .max_capacity(config.page_cache_capacity)
            .time_to_live(config.page_cache_ttl)
            .build();

        Self {
            config: Arc::new(config),
            catalog,
            pages,
        }
    }

    pub fn caching_enabled(&self) -> bool {
        !self.config.page_cache_ttl.is_zero() && self.config.page_cache_capacity > 0
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let assets_dir = state.config.assets_dir.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Sections
        .route("/", get(pages::home_page))
        .route("/contact", get(contact::contact_page).post(contact::submit_contact))
        .route("/:section", get(pages::section_page))

        // Theme preference
        .route("/theme", post(theme::toggle_theme))

        // Static assets (logos, profile photo)
        .nest_service("/logo", ServeDir::new(assets_dir.join("logo")))
        .nest_service("/image", ServeDir::new(assets_dir.join("image")))

        // Full page and htmx fragment share a URL
        .layer(AutoVaryLayer)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

impl IntoResponse for SiteError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SiteError::UnknownSection(_) | SiteError::UnknownProject(_) => {
                tracing::debug!("{}", self);
                let page = NotFoundTemplate {
                    message: self.to_string(),
                };
                match askama::Template::render(&page) {
                    Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
                    Err(e) => {
                        tracing::error!("Failed to render 404 page: {}", e);
                        (StatusCode::NOT_FOUND, self.to_string()).into_response()
                    }
                }
            }
            SiteError::Config { .. } | SiteError::Template(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
