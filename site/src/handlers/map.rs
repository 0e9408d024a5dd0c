//! Installation handlers
//!
//! Reference data and the Leaflet bootstrap script for the map widget.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::adapters::{HtmlDocument, LeafletScript};
use crate::domain::entities::{find_installation, Installation, INSTALLATIONS};
use crate::domain::ports::element_ids;
use crate::error::AppError;
use crate::AppState;

/// GET /installations.json
pub async fn get_installations() -> Json<Vec<Installation>> {
    Json(INSTALLATIONS.to_vec())
}

/// GET /installations/:name
pub async fn get_installation(Path(name): Path<String>) -> Result<Json<Installation>, AppError> {
    find_installation(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No installation named {}", name)))
}

/// GET /widgets/map.js
///
/// Leaflet calls that draw the installations into the `map` container.
pub async fn get_map_script(State(state): State<AppState>) -> impl IntoResponse {
    let page = HtmlDocument::new().with_element("div", element_ids::MAP);
    let mut leaflet = LeafletScript::new();

    state.map_renderer.render(&page, &mut leaflet, &INSTALLATIONS);

    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        leaflet.into_script(),
    )
}
