use crate::{Cursor, FetchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the page addressed by `cursor`; report back with `Msg::PageLoaded`.
    FetchPage { fetch_id: FetchId, cursor: Cursor },
}
