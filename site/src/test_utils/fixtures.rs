//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::PostRef;

pub fn post(url: &str) -> PostRef {
    PostRef::from(url)
}

pub fn posts(urls: &[&str]) -> Vec<PostRef> {
    urls.iter().map(|u| post(u)).collect()
}
