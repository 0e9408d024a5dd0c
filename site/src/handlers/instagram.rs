//! Instagram handlers
//!
//! The fallback list, the live aggregator view and the rendered grid.

use axum::{extract::State, response::Html, Json};

use crate::adapters::HtmlDocument;
use crate::app::PollOutcome;
use crate::domain::entities::PostRef;
use crate::domain::ports::{element_ids, Document};
use crate::error::AppError;
use crate::markup::EMBED_SCRIPT_TAG;
use crate::AppState;

/// GET /instagram.json
///
/// The static fallback list produced at startup, as a flat array of URLs.
pub async fn get_instagram_posts(State(state): State<AppState>) -> Json<Vec<PostRef>> {
    Json(state.refresh_service.current().await)
}

/// GET /instagram/fresh
///
/// What the aggregator returns right now. Upstream failures are reported
/// instead of being swallowed.
pub async fn get_fresh_posts(State(state): State<AppState>) -> Result<Json<Vec<PostRef>>, AppError> {
    if !state.config.instagram_enabled {
        return Err(AppError::Unavailable("Instagram integration is disabled".to_string()));
    }

    let posts = state.instagram_service.fetch_fresh().await?;
    Ok(Json(posts))
}

/// GET /widgets/insta-grid
///
/// The grid container with one embed placeholder per post. The embed script
/// is appended once the embed library reports ready. The server-side library
/// is always ready, so this poll ends after a single check.
pub async fn get_insta_grid(State(state): State<AppState>) -> Html<String> {
    let posts = state.instagram_service.load_posts().await;

    let mut document = HtmlDocument::new().with_element("div", element_ids::INSTAGRAM_GRID);

    if let Some(poll) = state.embed_renderer.render(&mut document, &posts) {
        // The poll stops if the client goes away before it finishes
        let (token, handle) = poll.spawn();
        let _guard = token.drop_guard();

        match handle.await {
            Ok(PollOutcome::Processed { .. }) => {
                document.append_html(element_ids::INSTAGRAM_GRID, EMBED_SCRIPT_TAG);
            }
            Ok(outcome) => tracing::warn!("Embed script not attached: {:?}", outcome),
            Err(e) => tracing::error!("Embed poll task failed: {}", e),
        }
    }

    Html(document.render())
}
