use std::time::Duration;

use roster_core::{Cursor, Effect, FetchFailure, Msg, Page, Record};
use roster_engine::{EngineError, EngineEvent, EngineHandle, FetchSettings, FetchedPage};
use roster_logging::{roster_info, roster_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { fetch_id, cursor } => {
                    roster_info!("FetchPage fetch_id={} cursor={}", fetch_id, cursor);
                    self.engine.enqueue(fetch_id, cursor.into_string());
                }
            }
        }
    }

    /// Messages for every engine event that has already arrived.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { fetch_id, result } => Msg::PageLoaded {
            fetch_id,
            result: match result {
                Ok(page) => Ok(map_page(page)),
                Err(err) => {
                    roster_warn!("fetch {} failed: {}", fetch_id, err);
                    Err(FetchFailure::new(err.to_string()))
                }
            },
        },
    }
}

fn map_page(page: FetchedPage) -> Page {
    Page {
        records: page
            .records
            .into_iter()
            .map(|record| Record::new(record.name, record.url))
            .collect(),
        next_cursor: page.next_cursor.map(Cursor::from),
        total_count: page.total_count,
    }
}
