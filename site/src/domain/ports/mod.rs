//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod embed;
pub mod map;
pub mod page;
pub mod post_source;

pub use embed::EmbedLibrary;
pub use map::MapLibrary;
pub use page::{element_ids, Document};
pub use post_source::{PostSource, PostStore};
