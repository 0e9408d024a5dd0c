//! Geographic primitives for the installations map

use serde::Serialize;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Arithmetic mean of the points, `None` for an empty set
pub fn centroid(points: &[LatLng]) -> Option<LatLng> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let lat_sum: f64 = points.iter().map(|p| p.lat).sum();
    let lng_sum: f64 = points.iter().map(|p| p.lng).sum();

    Some(LatLng::new(lat_sum / count, lng_sum / count))
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, `None` for an empty set
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, p| {
            Some(match bounds {
                None => Bounds {
                    south_west: p,
                    north_east: p,
                },
                Some(b) => b.extend(p),
            })
        })
    }

    fn extend(self, p: LatLng) -> Self {
        Bounds {
            south_west: LatLng::new(self.south_west.lat.min(p.lat), self.south_west.lng.min(p.lng)),
            north_east: LatLng::new(self.north_east.lat.max(p.lat), self.north_east.lng.max(p.lng)),
        }
    }

    /// Grow the box on every side by `ratio` of its height and width
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng).abs() * ratio;

        Bounds {
            south_west: LatLng::new(
                self.south_west.lat - lat_buffer,
                self.south_west.lng - lng_buffer,
            ),
            north_east: LatLng::new(
                self.north_east.lat + lat_buffer,
                self.north_east.lng + lng_buffer,
            ),
        }
    }

    #[cfg(test)]
    pub fn contains(&self, p: LatLng) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lng..=self.north_east.lng).contains(&p.lng)
    }
}
