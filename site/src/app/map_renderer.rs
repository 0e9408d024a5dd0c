//! Map renderer
//!
//! Draws the installations map: view centred on the centroid, one marker per
//! installation, then the view fitted to the padded bounds of the markers.

use crate::domain::entities::{centroid, Bounds, Installation, LatLng};
use crate::domain::ports::{element_ids, Document, MapLibrary};
use crate::markup::render_installation_popup;

pub const DEFAULT_ZOOM: u8 = 13;
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap";
pub const BOUNDS_PADDING: f64 = 0.1;

/// What was drawn on the map
#[derive(Debug, Clone, PartialEq)]
pub struct MapRender {
    pub center: LatLng,
    pub markers: usize,
    pub bounds: Bounds,
}

#[derive(Debug, Clone)]
pub struct MapRenderer {
    zoom: u8,
    tile_url: String,
    attribution: String,
    padding: f64,
}

impl Default for MapRenderer {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            padding: BOUNDS_PADDING,
        }
    }
}

impl MapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the installations into the `map` container.
    ///
    /// Returns `None` without touching the library when it is not loaded, the
    /// container is absent or there is nothing to place.
    pub fn render<D, M>(
        &self,
        document: &D,
        library: &mut M,
        installations: &[Installation],
    ) -> Option<MapRender>
    where
        D: Document + ?Sized,
        M: MapLibrary + ?Sized,
    {
        if !library.is_loaded() || !document.has_element(element_ids::MAP) {
            return None;
        }

        let points: Vec<LatLng> = installations.iter().map(|i| i.coordinates).collect();
        let center = centroid(&points)?;

        library.create_map(element_ids::MAP, center, self.zoom);
        library.add_tile_layer(&self.tile_url, &self.attribution);

        for installation in installations {
            library.add_marker(
                installation.coordinates,
                &render_installation_popup(installation),
            );
        }

        let bounds = Bounds::from_points(points.iter().copied())?.pad(self.padding);
        library.fit_bounds(bounds);

        tracing::debug!("Placed {} installation markers", points.len());

        Some(MapRender {
            center,
            markers: points.len(),
            bounds,
        })
    }
}
