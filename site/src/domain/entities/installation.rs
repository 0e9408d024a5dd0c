//! Installation domain entity
//!
//! The club's tennis facilities. The list is hand-authored reference data and
//! never changes at runtime.

use serde::Serialize;

use super::geo::LatLng;

/// One tennis facility shown on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Installation {
    pub name: &'static str,
    pub coordinates: LatLng,
    pub court_count: u32,
    /// Court surface, in French as displayed on the site
    pub surface: &'static str,
    pub info_url: &'static str,
}

impl Installation {
    /// "1 terrain" or "N terrains"
    pub fn courts_label(&self) -> String {
        let plural = if self.court_count > 1 { "s" } else { "" };
        format!("{} terrain{}", self.court_count, plural)
    }
}

/// All TC11 installations
pub const INSTALLATIONS: [Installation; 7] = [
    Installation {
        name: "C.S. Alain Mimoun",
        coordinates: LatLng::new(48.8382777, 2.4081032),
        court_count: 4,
        surface: "béton poreux",
        info_url: "https://www.paris.fr/lieux/tennis-alain-mimoun-ex-paul-valery-2965",
    },
    Installation {
        name: "Candie",
        coordinates: LatLng::new(48.8513896, 2.3776389),
        court_count: 3,
        surface: "gazon synthétique",
        info_url: "https://www.paris.fr/lieux/tennis-candie-19092",
    },
    Installation {
        name: "Carnot",
        coordinates: LatLng::new(48.8430482, 2.4101408),
        court_count: 1,
        surface: "synthétique",
        info_url: "https://www.paris.fr/lieux/tennis-carnot-3318",
    },
    Installation {
        name: "La Faluère",
        coordinates: LatLng::new(48.8341062, 2.4401284),
        court_count: 1,
        surface: "béton poreux",
        info_url: "https://www.paris.fr/lieux/tennis-la-faluere-2964",
    },
    Installation {
        name: "Les Lilas",
        coordinates: LatLng::new(48.8748281, 2.4100868),
        court_count: 1,
        surface: "terre battue",
        info_url: "https://www.google.com/maps/place/Centre+de+Comit%C3%A9+de+Tennis+de+Paris-Est+Les+Lilas/",
    },
    Installation {
        name: "Philippe Auguste",
        coordinates: LatLng::new(48.8567848, 2.3885189),
        court_count: 1,
        surface: "synthétique",
        info_url: "https://www.paris.fr/lieux/tennis-philippe-auguste-17244",
    },
    Installation {
        name: "Thiéré",
        coordinates: LatLng::new(48.8539096, 2.3711097),
        court_count: 1,
        surface: "béton poreux",
        info_url: "https://www.paris.fr/lieux/tennis-thiere-19075",
    },
];

/// Case-insensitive lookup by name
pub fn find_installation(name: &str) -> Option<&'static Installation> {
    let wanted = name.trim().to_lowercase();
    INSTALLATIONS
        .iter()
        .find(|i| i.name.to_lowercase() == wanted)
}
