//! Markup module
//!
//! HTML snippets produced by the widgets.

pub mod escape;
pub mod renderer;

pub use escape::Escaped;
pub use renderer::{render_embed_placeholder, render_installation_popup, EMBED_SCRIPT_TAG};
