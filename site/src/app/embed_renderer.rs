//! Embed renderer
//!
//! Puts one placeholder per post into the grid container, then waits for the
//! embed library to become ready and asks it to process the page once.
//!
//! The wait is a cooperative async loop with a fixed delay between checks, a
//! bounded number of attempts and a cancellation token.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::PostRef;
use crate::domain::ports::{element_ids, Document, EmbedLibrary};
use crate::markup::render_embed_placeholder;

/// Default delay between readiness checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Default number of readiness checks before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// How a readiness poll ended. `attempts` counts readiness checks made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Processed { attempts: u32 },
    GaveUp { attempts: u32 },
    Cancelled { attempts: u32 },
}

pub struct EmbedRenderer<L: EmbedLibrary> {
    library: Arc<L>,
    poll: PollConfig,
}

impl<L: EmbedLibrary + 'static> EmbedRenderer<L> {
    pub fn new(library: Arc<L>, poll: PollConfig) -> Self {
        Self { library, poll }
    }

    /// Append a placeholder per post to the grid.
    ///
    /// Returns `None` when the grid is absent or there is nothing to embed;
    /// otherwise the readiness poll, which the caller runs or spawns.
    pub fn render<D: Document>(&self, document: &mut D, posts: &[PostRef]) -> Option<EmbedPoll<L>> {
        if !document.has_element(element_ids::INSTAGRAM_GRID) {
            return None;
        }

        for post in posts {
            document.append_html(element_ids::INSTAGRAM_GRID, &render_embed_placeholder(post));
        }

        if posts.is_empty() {
            return None;
        }

        Some(EmbedPoll {
            library: self.library.clone(),
            config: self.poll,
            cancel: CancellationToken::new(),
        })
    }
}

/// Pending readiness poll for the embed library
pub struct EmbedPoll<L: EmbedLibrary> {
    library: Arc<L>,
    config: PollConfig,
    cancel: CancellationToken,
}

impl<L: EmbedLibrary + 'static> EmbedPoll<L> {
    /// Token that stops the poll when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn run(self) -> PollOutcome {
        let mut attempts = 0;

        loop {
            if self.cancel.is_cancelled() {
                return PollOutcome::Cancelled { attempts };
            }

            attempts += 1;
            if self.library.is_ready() {
                self.library.process();
                tracing::debug!("Embed library ready after {} checks", attempts);
                return PollOutcome::Processed { attempts };
            }

            if attempts >= self.config.max_attempts {
                tracing::warn!("Embed library still not ready after {} checks", attempts);
                return PollOutcome::GaveUp { attempts };
            }

            tokio::select! {
                _ = self.cancel.cancelled() => return PollOutcome::Cancelled { attempts },
                _ = tokio::time::sleep(self.config.interval) => {}
            }
        }
    }

    /// Run the poll in the background, tied to the returned token
    pub fn spawn(self) -> (CancellationToken, JoinHandle<PollOutcome>) {
        let token = self.cancellation_token();
        (token, tokio::spawn(self.run()))
    }
}
