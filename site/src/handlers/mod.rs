//! HTTP handlers
//!
//! Axum request handlers for the widget endpoints.

pub mod instagram;
pub mod map;
pub mod mcp;
pub mod page;

pub use instagram::{get_fresh_posts, get_insta_grid, get_instagram_posts};
pub use map::{get_installation, get_installations, get_map_script};
pub use mcp::{get_mcp_status, post_mcp_message};
pub use page::get_page_dates;
