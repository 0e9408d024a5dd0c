//! Leaflet adapter
//!
//! Records map calls as the equivalent Leaflet JavaScript, wrapped in the same
//! library and container guard the page needs.

use crate::domain::entities::{Bounds, LatLng};
use crate::domain::ports::MapLibrary;

#[derive(Debug, Default)]
pub struct LeafletScript {
    container_id: Option<String>,
    statements: Vec<String>,
}

/// JavaScript string literal
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

fn js_lat_lng(p: LatLng) -> String {
    format!("[{}, {}]", p.lat, p.lng)
}

impl LeafletScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generated script, empty when no map was created
    pub fn into_script(self) -> String {
        let Some(container_id) = self.container_id else {
            return String::new();
        };

        let mut buf = String::new();
        buf.push_str(&format!(
            "if (typeof L !== 'undefined' && document.getElementById({})) {{\n",
            js_string(&container_id)
        ));
        for statement in &self.statements {
            buf.push_str("  ");
            buf.push_str(statement);
            buf.push('\n');
        }
        buf.push_str("}\n");
        buf
    }
}

impl MapLibrary for LeafletScript {
    fn is_loaded(&self) -> bool {
        true
    }

    fn create_map(&mut self, container_id: &str, center: LatLng, zoom: u8) {
        self.container_id = Some(container_id.to_string());
        self.statements.push(format!(
            "const map = L.map({}).setView({}, {});",
            js_string(container_id),
            js_lat_lng(center),
            zoom
        ));
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        self.statements.push(format!(
            "L.tileLayer({}, {{ attribution: {} }}).addTo(map);",
            js_string(url_template),
            js_string(attribution)
        ));
    }

    fn add_marker(&mut self, position: LatLng, popup_html: &str) {
        self.statements.push(format!(
            "L.marker({}).addTo(map).bindPopup({});",
            js_lat_lng(position),
            js_string(popup_html)
        ));
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.statements.push(format!(
            "map.fitBounds([{}, {}]);",
            js_lat_lng(bounds.south_west),
            js_lat_lng(bounds.north_east)
        ));
    }
}
