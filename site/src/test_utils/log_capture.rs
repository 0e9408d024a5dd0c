//! Counts log events emitted while a test runs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Debug, Clone, Default)]
pub struct EventCounter {
    errors: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl EventCounter {
    /// Install the counter as this thread's subscriber until the guard drops
    pub fn install() -> (Self, DefaultGuard) {
        let counter = Self::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (counter, guard)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        match *event.metadata().level() {
            Level::ERROR => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            Level::WARN => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}
