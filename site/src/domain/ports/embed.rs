//! Embed library port trait

/// Third-party library that turns placeholder markup into rendered posts.
///
/// Implementations are only queried for readiness, never configured.
pub trait EmbedLibrary: Send + Sync {
    /// True once the library is loaded and exposes its processing entry point
    fn is_ready(&self) -> bool;

    /// Ask the library to process every placeholder on the page
    fn process(&self);
}
