use roster_logging::{roster_debug, roster_info, roster_warn};

use crate::{Cursor, FetchFailure, FetchId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Idle,
    Fetching,
    /// Terminal: the last page carried no next cursor.
    Exhausted,
    /// The last fetch failed; the next qualifying trigger retries.
    Errored,
}

/// One scroll position report from the list viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSample {
    pub scroll_top: u32,
    pub client_height: u32,
    pub scroll_height: u32,
    /// Height of the rendered list content itself.
    pub content_height: u32,
}

impl ScrollSample {
    /// Exact equality, not a threshold.
    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top.checked_add(self.client_height) == Some(self.scroll_height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub fetch_id: FetchId,
    pub cursor: Cursor,
}

/// Decides when the next page may be requested. At most one request is in
/// flight, and nothing is requested once the cursor runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollGate {
    state: GateState,
    cursor: Option<Cursor>,
    in_flight: Option<FetchId>,
    last_fetch_id: FetchId,
    min_content_height: u32,
    last_failure: Option<FetchFailure>,
}

impl Default for ScrollGate {
    /// A gate with nothing to fetch.
    fn default() -> Self {
        Self::new(None, 0)
    }
}

impl ScrollGate {
    pub fn new(initial_cursor: Option<Cursor>, min_content_height: u32) -> Self {
        let state = if initial_cursor.is_some() {
            GateState::Idle
        } else {
            GateState::Exhausted
        };
        Self {
            state,
            cursor: initial_cursor,
            in_flight: None,
            last_fetch_id: 0,
            min_content_height,
            last_failure: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn in_flight(&self) -> Option<FetchId> {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.state == GateState::Fetching
    }

    /// Stays set through a retry until a fetch succeeds.
    pub fn is_errored(&self) -> bool {
        self.last_failure.is_some()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == GateState::Exhausted
    }

    pub fn last_failure(&self) -> Option<&FetchFailure> {
        self.last_failure.as_ref()
    }

    /// Request the next page if the gate allows it, independent of any viewport.
    pub fn advance(&mut self) -> Option<FetchRequest> {
        match self.state {
            GateState::Idle | GateState::Errored => {}
            GateState::Fetching | GateState::Exhausted => {
                roster_debug!("advance suppressed: gate is {:?}", self.state);
                return None;
            }
        }
        let cursor = self.cursor.clone()?;
        self.last_fetch_id += 1;
        let fetch_id = self.last_fetch_id;
        self.in_flight = Some(fetch_id);
        self.state = GateState::Fetching;
        roster_info!("fetch {fetch_id} triggered for {cursor}");
        Some(FetchRequest { fetch_id, cursor })
    }

    /// Request the next page if the viewport sits exactly at the bottom and the
    /// content is tall enough to scroll.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> Option<FetchRequest> {
        if !sample.is_at_bottom() {
            return None;
        }
        if sample.content_height < self.min_content_height {
            roster_debug!(
                "scroll fetch suppressed: content {}px below {}px",
                sample.content_height,
                self.min_content_height
            );
            return None;
        }
        self.advance()
    }

    /// Record a successful fetch. Returns false for a completion that does not
    /// match the in-flight request.
    pub fn complete(&mut self, fetch_id: FetchId, next_cursor: Option<Cursor>) -> bool {
        if !self.accepts(fetch_id) {
            return false;
        }
        self.in_flight = None;
        self.last_failure = None;
        self.state = if next_cursor.is_some() {
            GateState::Idle
        } else {
            roster_info!("pagination exhausted after fetch {fetch_id}");
            GateState::Exhausted
        };
        self.cursor = next_cursor;
        true
    }

    /// Record a failed fetch. The cursor is kept so the next trigger retries it.
    pub fn fail(&mut self, fetch_id: FetchId, failure: FetchFailure) -> bool {
        if !self.accepts(fetch_id) {
            return false;
        }
        roster_warn!("fetch {fetch_id} failed: {}", failure.message);
        self.in_flight = None;
        self.last_failure = Some(failure);
        self.state = GateState::Errored;
        true
    }

    fn accepts(&self, fetch_id: FetchId) -> bool {
        if self.state == GateState::Fetching && self.in_flight == Some(fetch_id) {
            return true;
        }
        roster_warn!(
            "ignoring completion of fetch {fetch_id}; in flight: {:?}",
            self.in_flight
        );
        false
    }
}
