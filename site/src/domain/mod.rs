//! Domain layer
//!
//! Contains pure logic with no external dependencies.
//! - `entities`: post references, installations, geographic helpers
//! - `ports`: Trait definitions for the network, the page and third-party libraries

pub mod entities;
pub mod ports;
