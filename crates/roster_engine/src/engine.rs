use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use roster_logging::roster_info;

use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FetchId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    FetchPage { fetch_id: FetchId, cursor: String },
}

/// Runs page fetches on a background thread and reports each result as an
/// `EngineEvent`. Dropping the handle shuts the worker down and abandons
/// fetches still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Self::with_fetcher(Arc::new(ReqwestPageFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, fetch_id: FetchId, cursor: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage {
            fetch_id,
            cursor: cursor.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { fetch_id, cursor } => {
            roster_info!("fetch {fetch_id} started: {cursor}");
            let result = fetcher.fetch_page(&cursor).await;
            let _ = event_tx.send(EngineEvent::PageFetched { fetch_id, result });
        }
    }
}
