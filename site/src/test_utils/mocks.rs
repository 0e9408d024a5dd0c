//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and that
//! record how they were used.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Bounds, LatLng, PostRef};
use crate::domain::ports::{EmbedLibrary, MapLibrary, PostSource, PostStore};
use crate::error::{SourceError, StoreError};

// ============================================================================
// Post sources
// ============================================================================

/// Always returns the same posts and counts fetches
#[derive(Default)]
pub struct StaticPostSource {
    posts: Vec<PostRef>,
    calls: AtomicUsize,
}

impl StaticPostSource {
    pub fn new(posts: Vec<PostRef>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    fn name(&self) -> &'static str {
        "static-mock"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

/// Fails every fetch with a non-success status
#[derive(Default)]
pub struct FailingPostSource;

impl FailingPostSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PostSource for FailingPostSource {
    fn name(&self) -> &'static str {
        "failing-mock"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        Err(SourceError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        })
    }
}

// ============================================================================
// In-Memory Post Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostStore {
    stored: Arc<RwLock<Vec<PostRef>>>,
    saved: Arc<RwLock<Option<Vec<PostRef>>>>,
}

impl InMemoryPostStore {
    pub fn with_posts(posts: Vec<PostRef>) -> Self {
        Self {
            stored: Arc::new(RwLock::new(posts)),
            saved: Arc::default(),
        }
    }

    /// Last list written through `save`
    pub fn saved(&self) -> Option<Vec<PostRef>> {
        self.saved.read().unwrap().clone()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn load(&self) -> Result<Vec<PostRef>, StoreError> {
        Ok(self.stored.read().unwrap().clone())
    }

    async fn save(&self, posts: &[PostRef]) -> Result<(), StoreError> {
        *self.stored.write().unwrap() = posts.to_vec();
        *self.saved.write().unwrap() = Some(posts.to_vec());
        Ok(())
    }
}

// ============================================================================
// Embed library
// ============================================================================

/// Reports ready once it has been checked more than `ready_after` times
pub struct EventuallyReadyEmbedLibrary {
    ready_after: usize,
    checks: AtomicUsize,
    processed: AtomicUsize,
}

impl EventuallyReadyEmbedLibrary {
    pub fn ready_after(checks: usize) -> Self {
        Self {
            ready_after: checks,
            checks: AtomicUsize::new(0),
            processed: AtomicUsize::new(0),
        }
    }

    pub fn never() -> Self {
        Self::ready_after(usize::MAX)
    }

    pub fn process_calls(&self) -> usize {
        self.processed.load(Ordering::SeqCst)
    }
}

impl EmbedLibrary for EventuallyReadyEmbedLibrary {
    fn is_ready(&self) -> bool {
        let previous = self.checks.fetch_add(1, Ordering::SeqCst);
        previous >= self.ready_after
    }

    fn process(&self) {
        self.processed.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Map library
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    CreateMap {
        container_id: String,
        center: LatLng,
        zoom: u8,
    },
    TileLayer {
        url_template: String,
        attribution: String,
    },
    Marker {
        position: LatLng,
        popup_html: String,
    },
    FitBounds(Bounds),
}

/// Records every primitive the renderer invokes
#[derive(Debug, Default)]
pub struct RecordingMapLibrary {
    loaded: bool,
    calls: Vec<MapCall>,
}

impl RecordingMapLibrary {
    pub fn loaded() -> Self {
        Self {
            loaded: true,
            calls: Vec::new(),
        }
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }
}

impl MapLibrary for RecordingMapLibrary {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn create_map(&mut self, container_id: &str, center: LatLng, zoom: u8) {
        self.calls.push(MapCall::CreateMap {
            container_id: container_id.to_string(),
            center,
            zoom,
        });
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        self.calls.push(MapCall::TileLayer {
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
        });
    }

    fn add_marker(&mut self, position: LatLng, popup_html: &str) {
        self.calls.push(MapCall::Marker {
            position,
            popup_html: popup_html.to_string(),
        });
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.calls.push(MapCall::FitBounds(bounds));
    }
}
