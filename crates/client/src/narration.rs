//! Fire-and-forget match narration.
//!
//! The match loop hands each turn summary to a [`NarrationWorker`] and moves
//! on. A background task feeds the summaries to a [`Narrator`] in order and
//! emits whatever comes back. Only plain text crosses the channel, so the
//! narrator never sees fighter state and a slow or failing narrator cannot
//! stall the match.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("nothing to narrate")]
    EmptySummary,

    #[error("narrator unavailable: {0}")]
    Unavailable(String),
}

/// Turns a plain-text turn summary into commentary.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn narrate(&self, summary: &str) -> Result<String, NarrationError>;
}

/// Offline narrator that dresses the summary up as ringside commentary.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalNarrator;

#[async_trait]
impl Narrator for LocalNarrator {
    async fn narrate(&self, summary: &str) -> Result<String, NarrationError> {
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(NarrationError::EmptySummary);
        }

        let call = if summary.contains("knocked out") || summary.contains("lost consciousness") {
            "It's all over!"
        } else if summary.contains("cannot attack") {
            "A moment of respite."
        } else if summary.contains(" damage ") {
            "Ooh, that connects!"
        } else {
            "The crowd holds its breath."
        };
        Ok(format!("{call} {summary}"))
    }
}

/// Counters reported when the worker shuts down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NarrationStats {
    pub narrated: usize,
    pub failed: usize,
    pub dropped: usize,
}

/// Handle to the background narration task.
pub struct NarrationWorker {
    tx: mpsc::Sender<String>,
    handle: JoinHandle<NarrationStats>,
    dropped: usize,
}

impl NarrationWorker {
    /// Spawn the worker on the current tokio runtime.
    ///
    /// `emit` receives each narration line in submission order.
    pub fn spawn<N, F>(narrator: N, buffer: usize, mut emit: F) -> Self
    where
        N: Narrator + 'static,
        F: FnMut(String) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<String>(buffer.max(1));

        let handle = tokio::spawn(async move {
            let mut stats = NarrationStats::default();
            while let Some(summary) = rx.recv().await {
                match narrator.narrate(&summary).await {
                    Ok(line) => {
                        stats.narrated += 1;
                        emit(line);
                    }
                    Err(e) => {
                        stats.failed += 1;
                        tracing::warn!("narration failed: {}", e);
                    }
                }
            }
            stats
        });

        Self {
            tx,
            handle,
            dropped: 0,
        }
    }

    /// Queue a summary without waiting. Returns false if it was dropped.
    pub fn submit(&mut self, summary: String) -> bool {
        match self.tx.try_send(summary) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                tracing::debug!("narration queue full, summary dropped");
                false
            }
            Err(TrySendError::Closed(_)) => {
                self.dropped += 1;
                tracing::warn!("narration worker stopped, summary dropped");
                false
            }
        }
    }

    /// Close the queue and wait for pending summaries to be narrated.
    pub async fn shutdown(self) -> NarrationStats {
        let Self {
            tx,
            handle,
            dropped,
        } = self;
        drop(tx);

        let mut stats = handle.await.unwrap_or_else(|e| {
            tracing::warn!("narration worker panicked: {}", e);
            NarrationStats::default()
        });
        stats.dropped = dropped;
        stats
    }
}
