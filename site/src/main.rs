//! TC11 Site Service
//!
//! Serves the dynamic widgets of the TC11 tennis club site: the Instagram post
//! grid, the installations map and the footer dates.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod markup;

#[cfg(test)]
mod test_utils;


use adapters::{
    build_http_client, FilePostStore, GraphApiSource, HttpStaticSource, InstagramEmbedScript,
    ProfilePageSource, RssBridgeSource, StaticPosts,
};
use app::{EmbedRenderer, InstagramService, MapRenderer, PollConfig, PostsRefreshService};
use config::Config;

pub type SiteInstagramService = InstagramService<RssBridgeSource, StaticPosts>;
pub type SiteRefreshService = PostsRefreshService<GraphApiSource, ProfilePageSource, FilePostStore>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub instagram_service: Arc<SiteInstagramService>,
    pub refresh_service: Arc<SiteRefreshService>,
    pub embed_renderer: Arc<EmbedRenderer<InstagramEmbedScript>>,
    pub map_renderer: Arc<MapRenderer>,
    pub config: Config,
}

impl AppState {
    /// Wire adapters and services from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let http = build_http_client().context("Failed to build HTTP client")?;

        let store = Arc::new(FilePostStore::new(config.instagram_output_path.clone()));
        tracing::debug!("Fallback file: {}", store.path().display());

        let graph = config.graph_api_credentials().map(|(token, account)| {
            Arc::new(GraphApiSource::new(
                http.clone(),
                token.to_string(),
                account.to_string(),
            ))
        });
        let scraper = Arc::new(ProfilePageSource::new(
            http.clone(),
            config.instagram_username.clone(),
        ));
        let refresh_service = Arc::new(PostsRefreshService::new(
            graph,
            scraper,
            store.clone(),
            config.instagram_enabled,
        ));

        // Static list comes from a deployed site when configured, else from disk
        let fallback = match &config.static_posts_url {
            Some(url) => StaticPosts::Remote(HttpStaticSource::new(http.clone(), url.clone())),
            None => StaticPosts::Local(store),
        };
        let aggregator = RssBridgeSource::new(
            http,
            &config.aggregator_url,
            &config.instagram_username,
        );
        let instagram_service = Arc::new(InstagramService::new(
            Arc::new(aggregator),
            Arc::new(fallback),
        ));

        let embed_renderer = Arc::new(EmbedRenderer::new(
            Arc::new(InstagramEmbedScript::new()),
            PollConfig {
                interval: config.embed_poll_interval,
                max_attempts: config.embed_poll_max_attempts,
            },
        ));

        Ok(Self {
            instagram_service,
            refresh_service,
            embed_renderer,
            map_renderer: Arc::new(MapRenderer::new()),
            config,
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes that stay reachable without a peer address
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/instagram.json", get(handlers::get_instagram_posts))
        .route("/installations.json", get(handlers::get_installations))
        .route("/installations/:name", get(handlers::get_installation))
        .route("/widgets/map.js", get(handlers::get_map_script))
        .route("/widgets/dates", get(handlers::get_page_dates))
        .route(
            "/mcp",
            get(handlers::get_mcp_status).post(handlers::post_mcp_message),
        )
}

pub fn router(state: AppState) -> anyhow::Result<Router> {
    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Routes that trigger outbound fetches
    let rate_limited_routes = Router::new()
        .route("/widgets/insta-grid", get(handlers::get_insta_grid))
        .route("/instagram/fresh", get(handlers::get_fresh_posts))
        .layer(GovernorLayer {
            config: governor_config,
        });

    let app = public_routes()
        .merge(rate_limited_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tc11_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TC11 site service...");

    // Load configuration
    let config = Config::from_env();
    let port = config.port;

    let state = AppState::from_config(config)?;

    // Produce the fallback list before serving
    let posts = state.refresh_service.refresh().await;
    tracing::info!("Serving {} fallback posts", posts.len());

    let app = router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
