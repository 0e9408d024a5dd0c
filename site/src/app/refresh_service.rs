//! Posts refresh service
//!
//! Produces the static fallback list at startup. Sources are tried in order:
//! 1. Instagram Graph API, when credentials are configured
//! 2. Public profile page scrape
//! 3. Whatever the fallback file already holds
//!
//! The first source returning posts wins and its result is written back to the
//! fallback file.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::PostRef;
use crate::domain::ports::{PostSource, PostStore};

pub struct PostsRefreshService<G, P, S>
where
    G: PostSource,
    P: PostSource,
    S: PostStore,
{
    graph: Option<Arc<G>>,
    scraper: Arc<P>,
    store: Arc<S>,
    enabled: bool,
    posts: RwLock<Vec<PostRef>>,
}

impl<G, P, S> PostsRefreshService<G, P, S>
where
    G: PostSource,
    P: PostSource,
    S: PostStore,
{
    pub fn new(graph: Option<Arc<G>>, scraper: Arc<P>, store: Arc<S>, enabled: bool) -> Self {
        Self {
            graph,
            scraper,
            store,
            enabled,
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Posts currently served as the fallback list
    pub async fn current(&self) -> Vec<PostRef> {
        self.posts.read().await.clone()
    }

    /// Run the fallback chain and return the posts now being served
    pub async fn refresh(&self) -> Vec<PostRef> {
        let existing = match self.store.load().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!("Could not read existing posts: {}", e);
                Vec::new()
            }
        };

        if !self.enabled {
            tracing::info!("Instagram posts refresh is disabled");
            return self.replace(existing).await;
        }

        match &self.graph {
            Some(graph) => {
                tracing::info!("Fetching Instagram posts via Graph API");
                if let Some(posts) = self.try_source(graph.as_ref()).await {
                    return self.replace(posts).await;
                }
            }
            None => {
                tracing::info!("Graph API credentials not configured, scraping profile page");
            }
        }

        if let Some(posts) = self.try_source(self.scraper.as_ref()).await {
            return self.replace(posts).await;
        }

        if existing.is_empty() {
            tracing::warn!("No Instagram posts available, fallback list is empty");
        } else {
            tracing::info!("Using {} existing posts from the fallback file", existing.len());
        }

        self.replace(existing).await
    }

    /// Fetch from one source and persist a non-empty result
    async fn try_source<Src: PostSource + ?Sized>(&self, source: &Src) -> Option<Vec<PostRef>> {
        let posts = match source.fetch_posts().await {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => {
                tracing::info!("{} returned no posts", source.name());
                return None;
            }
            Err(e) => {
                tracing::warn!("{} failed: {}", source.name(), e);
                return None;
            }
        };

        if let Err(e) = self.store.save(&posts).await {
            tracing::warn!("Failed to write fallback file: {}", e);
        }

        tracing::info!(
            "Successfully fetched {} Instagram posts via {}",
            posts.len(),
            source.name()
        );
        Some(posts)
    }

    async fn replace(&self, posts: Vec<PostRef>) -> Vec<PostRef> {
        let mut current = self.posts.write().await;
        *current = posts;
        current.clone()
    }
}
