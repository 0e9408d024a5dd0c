//! Post source port traits
//!
//! Defines where post references come from and where the fallback list is kept.

use async_trait::async_trait;

use crate::domain::entities::PostRef;
use crate::error::{SourceError, StoreError};

/// Port trait for anything that yields an ordered list of posts
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Fetch posts, most recent first
    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError>;
}

/// Port trait for the static fallback list (`instagram.json`)
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Read the stored list; a missing file is an empty list
    async fn load(&self) -> Result<Vec<PostRef>, StoreError>;

    /// Replace the stored list
    async fn save(&self, posts: &[PostRef]) -> Result<(), StoreError>;
}
