//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file_store;
pub mod graph_api;
pub mod html;
pub mod http;
pub mod leaflet;
pub mod lenient;
pub mod profile_page;
pub mod rss_bridge;
pub mod static_posts;

pub use file_store::FilePostStore;
pub use graph_api::GraphApiSource;
pub use html::{HtmlDocument, InstagramEmbedScript};
pub use http::build_http_client;
pub use leaflet::LeafletScript;
pub use profile_page::ProfilePageSource;
pub use rss_bridge::RssBridgeSource;
pub use static_posts::{HttpStaticSource, StaticPosts};
