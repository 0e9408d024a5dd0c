//! RSS-Bridge adapter
//!
//! Live Instagram posts through RSS-Bridge's `InstagramBridge` JSON feed.

pub mod client;
pub mod payload;

pub use client::RssBridgeSource;
