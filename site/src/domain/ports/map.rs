//! Mapping library port trait
//!
//! The subset of Leaflet primitives the map widget consumes.

use crate::domain::entities::{Bounds, LatLng};

pub trait MapLibrary {
    fn is_loaded(&self) -> bool;

    /// Create the map inside `container_id` centred on `center`
    fn create_map(&mut self, container_id: &str, center: LatLng, zoom: u8);

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);

    /// Place a marker with a popup holding trusted markup
    fn add_marker(&mut self, position: LatLng, popup_html: &str);

    fn fit_bounds(&mut self, bounds: Bounds);
}
