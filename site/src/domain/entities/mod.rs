//! Domain entities
//!
//! Pure domain models: post references, installations and the geographic
//! helpers the map needs.

pub mod geo;
pub mod installation;
pub mod post;

pub use geo::{centroid, Bounds, LatLng};
pub use installation::{find_installation, Installation, INSTALLATIONS};
pub use post::{merge_posts, PostRef, MAX_POSTS};
