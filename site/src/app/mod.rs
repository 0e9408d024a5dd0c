//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod embed_renderer;
pub mod instagram_service;
pub mod map_renderer;
pub mod page_dates;
pub mod refresh_service;

pub use embed_renderer::{EmbedRenderer, PollConfig, PollOutcome};
pub use instagram_service::InstagramService;
pub use map_renderer::MapRenderer;
pub use page_dates::init_page_dates;
pub use refresh_service::PostsRefreshService;
