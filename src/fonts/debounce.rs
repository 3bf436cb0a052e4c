//! Debounced, cancel-on-supersede font search
//!
//! Each scheduled query aborts the previous task, whether it is still waiting
//! out the quiet period or already waiting on the network. Outcomes carry the
//! generation they were issued with so the directory can drop anything that
//! slipped into the channel before the abort landed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::fonts::font::Font;
use crate::fonts::search::{search, FontSource};

/// Result of one completed remote search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub generation: u64,
    pub query: String,
    pub fonts: Vec<Font>,
}

/// Runs at most one pending search at a time
pub struct SearchDebouncer<S: FontSource> {
    source: Arc<S>,
    curated: Arc<[Font]>,
    delay: Duration,
    outcome_tx: mpsc::UnboundedSender<SearchOutcome>,
    pending: Option<JoinHandle<()>>,
}

impl<S: FontSource> SearchDebouncer<S> {
    /// Create a debouncer and the receiver its outcomes arrive on
    pub fn new(
        source: Arc<S>,
        curated: Vec<Font>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SearchOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            source,
            curated: curated.into(),
            delay,
            outcome_tx,
            pending: None,
        };
        (debouncer, outcome_rx)
    }

    /// Schedule `query` to run after the quiet period, replacing any
    /// pending search. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, generation: u64, query: impl Into<String>) {
        self.cancel();

        let query = query.into();
        let source = Arc::clone(&self.source);
        let curated = Arc::clone(&self.curated);
        let outcome_tx = self.outcome_tx.clone();
        let delay = self.delay;

        debug!("Scheduling font search #{} for '{}'", generation, query);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let fonts = search(source.as_ref(), &curated, &query).await;
            let _ = outcome_tx.send(SearchOutcome {
                generation,
                query,
                fonts,
            });
        }));
    }

    /// Abort the pending search, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            if !task.is_finished() {
                debug!("Cancelling superseded font search");
            }
            task.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl<S: FontSource> Drop for SearchDebouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
