//! Matchup Worker Thread
//!
//! Fetches matchup statistics in a background thread so the UI never blocks.
//! Requests arrive on a tokio channel; every request becomes its own task on a
//! current-thread runtime, and results go back to the UI thread over a std
//! channel that the cache drains when polled.

use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::matchup_record::MatchupRecord;
use crate::catalog::EntryId;
use crate::error::DraftError;

/// Request messages sent to the matchup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchupRequest {
    Fetch { id: EntryId },
}

/// Response messages received from the matchup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchupResponse {
    Loaded {
        id: EntryId,
        records: Vec<MatchupRecord>,
    },
    Failed {
        id: EntryId,
        error: DraftError,
    },
}

/// Provider of one hero's matchup records against every other hero
pub trait MatchupSource: Send + Sync + 'static {
    fn fetch_matchups(
        &self,
        id: EntryId,
    ) -> impl Future<Output = Result<Vec<MatchupRecord>, DraftError>> + Send;
}

/// Spawn the matchup worker thread
///
/// The thread runs until `cancel` fires or every request sender is dropped.
/// Fetches still in flight at that point are abandoned.
pub fn spawn_worker<S: MatchupSource>(
    source: S,
    request_rx: UnboundedReceiver<MatchupRequest>,
    response_tx: Sender<MatchupResponse>,
    cancel: CancellationToken,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("matchup-worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::warn!("Failed to start matchup worker runtime: {}", e);
                    return;
                }
            };

            runtime.block_on(worker_loop(
                Arc::new(source),
                request_rx,
                response_tx,
                cancel,
            ));

            // Abandon in-flight fetches instead of blocking exit on them
            runtime.shutdown_timeout(Duration::from_millis(100));
        })
}

/// Main worker loop - processes requests until cancelled or the channel closes
async fn worker_loop<S: MatchupSource>(
    source: Arc<S>,
    mut request_rx: UnboundedReceiver<MatchupRequest>,
    response_tx: Sender<MatchupResponse>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                log::debug!("Matchup worker cancelled");
                break;
            }
            request = request_rx.recv() => match request {
                Some(MatchupRequest::Fetch { id }) => {
                    let source = Arc::clone(&source);
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        let response = fetch_one(source.as_ref(), id).await;
                        if response_tx.send(response).is_err() {
                            log::debug!("UI thread gone, dropping matchups for hero {}", id);
                        }
                    });
                }
                None => break,
            },
        }
    }

    log::debug!("Matchup worker thread shutting down");
}

async fn fetch_one<S: MatchupSource>(source: &S, id: EntryId) -> MatchupResponse {
    match source.fetch_matchups(id).await {
        Ok(records) => MatchupResponse::Loaded { id, records },
        Err(error) => MatchupResponse::Failed { id, error },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
