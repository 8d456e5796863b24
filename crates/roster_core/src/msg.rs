use crate::{FetchFailure, FetchId, Page, ScrollSample};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session opened; triggers the initial page load regardless of geometry.
    SessionStarted,
    /// The list viewport reported a new scroll position.
    Scrolled(ScrollSample),
    /// Explicit "load more" request from any driver.
    LoadMoreRequested,
    /// The engine finished a page fetch.
    PageLoaded {
        fetch_id: FetchId,
        result: Result<Page, FetchFailure>,
    },
    /// User activated a row in the catalog list.
    ItemToggled(String),
    /// User clicked the remove control of a row in the selection list.
    SelectionRemoved(String),
}
