//! Instagram service
//!
//! Loads the posts shown in the grid: live posts from the aggregator merged
//! with the static fallback list. Each fetch is isolated; a failure only
//! empties its own list.

use std::sync::Arc;

use crate::domain::entities::{merge_posts, PostRef, MAX_POSTS};
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// Service for assembling the grid's post list
pub struct InstagramService<F, S>
where
    F: PostSource,
    S: PostSource,
{
    fresh: Arc<F>,
    fallback: Arc<S>,
    limit: usize,
}

impl<F, S> InstagramService<F, S>
where
    F: PostSource,
    S: PostSource,
{
    pub fn new(fresh: Arc<F>, fallback: Arc<S>) -> Self {
        Self {
            fresh,
            fallback,
            limit: MAX_POSTS,
        }
    }

    /// Fetch both sources concurrently and merge them, fresh posts first.
    ///
    /// Never fails: an empty result is logged as an error and returned.
    pub async fn load_posts(&self) -> Vec<PostRef> {
        let (fallback, fresh) = tokio::join!(
            fetch_or_empty(self.fallback.as_ref()),
            fetch_or_empty(self.fresh.as_ref())
        );

        let posts = merge_posts(&fresh, &fallback, self.limit);

        if posts.is_empty() {
            tracing::error!("No Instagram posts available");
        } else {
            tracing::debug!(
                "Merged {} fresh and {} static posts into {}",
                fresh.len(),
                fallback.len(),
                posts.len()
            );
        }

        posts
    }

    /// Fresh posts only, with the aggregator's error surfaced
    pub async fn fetch_fresh(&self) -> Result<Vec<PostRef>, SourceError> {
        let mut posts = self.fresh.fetch_posts().await?;
        posts.truncate(self.limit);
        Ok(posts)
    }
}

async fn fetch_or_empty<P: PostSource + ?Sized>(source: &P) -> Vec<PostRef> {
    match source.fetch_posts().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!("Failed to load posts from {}: {}", source.name(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{post, posts, EventCounter, FailingPostSource, StaticPostSource};

    #[tokio::test]
    async fn fresh_failure_falls_back_to_static_posts() {
        let service = InstagramService::new(
            Arc::new(FailingPostSource::new()),
            Arc::new(StaticPostSource::new(posts(&["a", "b"]))),
        );

        let result = service.load_posts().await;

        assert_eq!(result, posts(&["a", "b"]));
    }

    #[tokio::test]
    async fn both_failures_yield_empty_list() {
        let service = InstagramService::new(
            Arc::new(FailingPostSource::new()),
            Arc::new(FailingPostSource::new()),
        );
        let (logs, _guard) = EventCounter::install();

        assert!(service.load_posts().await.is_empty());
        assert_eq!(logs.warnings(), 2);
        assert_eq!(logs.errors(), 1);
    }

    #[tokio::test]
    async fn non_empty_result_logs_no_error() {
        let service = InstagramService::new(
            Arc::new(FailingPostSource::new()),
            Arc::new(StaticPostSource::new(posts(&["a"]))),
        );
        let (logs, _guard) = EventCounter::install();

        assert_eq!(service.load_posts().await, posts(&["a"]));
        assert_eq!(logs.warnings(), 1);
        assert_eq!(logs.errors(), 0);
    }

    #[tokio::test]
    async fn fresh_posts_come_first_and_duplicates_collapse() {
        let service = InstagramService::new(
            Arc::new(StaticPostSource::new(posts(&[
                "https://www.instagram.com/p/NEW/",
                "https://www.instagram.com/p/OLD/",
            ]))),
            Arc::new(StaticPostSource::new(posts(&[
                "https://www.instagram.com/p/OLD",
                "https://www.instagram.com/p/OLDER",
            ]))),
        );

        let result = service.load_posts().await;

        assert_eq!(
            result,
            posts(&[
                "https://www.instagram.com/p/NEW/",
                "https://www.instagram.com/p/OLD/",
                "https://www.instagram.com/p/OLDER",
            ])
        );
    }

    #[tokio::test]
    async fn result_is_capped() {
        let many: Vec<_> = (0..10).map(|i| post(&format!("p{}", i))).collect();
        let service = InstagramService::new(
            Arc::new(StaticPostSource::new(many.clone())),
            Arc::new(StaticPostSource::new(many)),
        );

        assert_eq!(service.load_posts().await.len(), MAX_POSTS);
    }

    #[tokio::test]
    async fn fetch_fresh_surfaces_aggregator_errors() {
        let service = InstagramService::new(
            Arc::new(FailingPostSource::new()),
            Arc::new(StaticPostSource::new(posts(&["a"]))),
        );

        let err = service.fetch_fresh().await.unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn both_sources_are_queried() {
        let fresh = Arc::new(StaticPostSource::new(posts(&["a"])));
        let fallback = Arc::new(StaticPostSource::new(posts(&["b"])));
        let service = InstagramService::new(fresh.clone(), fallback.clone());

        service.load_posts().await;

        assert_eq!(fresh.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }
}
