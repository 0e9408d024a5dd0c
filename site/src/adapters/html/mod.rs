//! HTML adapters
//!
//! Server-side stand-ins for the browser: an in-memory page and the embed script.

pub mod document;
pub mod embed_script;

pub use document::HtmlDocument;
pub use embed_script::InstagramEmbedScript;
