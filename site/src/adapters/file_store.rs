//! Fallback file adapter
//!
//! `instagram.json` on disk: a flat, pretty-printed JSON array of permalinks.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::PostRef;
use crate::domain::ports::{PostSource, PostStore};
use crate::error::{SourceError, StoreError};

pub struct FilePostStore {
    path: PathBuf,
}

impl FilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostStore for FilePostStore {
    async fn load(&self) -> Result<Vec<PostRef>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, posts: &[PostRef]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut json = serde_json::to_string_pretty(posts)?;
        json.push('\n');
        tokio::fs::write(&self.path, json).await?;

        tracing::info!("Wrote Instagram posts to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl PostSource for FilePostStore {
    fn name(&self) -> &'static str {
        "instagram.json"
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRef>, SourceError> {
        Ok(self.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePostStore::new(dir.path().join("instagram.json"));

        let posts = store.load().await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePostStore::new(dir.path().join("content").join("instagram.json"));
        let posts = vec![
            PostRef::from("https://www.instagram.com/p/B/"),
            PostRef::from("https://www.instagram.com/p/A/"),
        ];

        store.save(&posts).await.unwrap();

        assert_eq!(store.load().await.unwrap(), posts);
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n"));
        assert!(raw.ends_with("]\n"));
    }

    #[tokio::test]
    async fn aggregator_shaped_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instagram.json");
        std::fs::write(&path, r#"{"items": [{"url": "https://www.instagram.com/p/A/"}]}"#)
            .unwrap();
        let store = FilePostStore::new(path);

        let result = store.fetch_posts().await;

        assert!(matches!(result, Err(SourceError::Store(StoreError::Json(_)))));
    }
}
