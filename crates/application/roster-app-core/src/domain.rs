use roster_core::Character;

/// Lifecycle of the most recent fetch. `Failed` carries no payload; the
/// fetch worker logs the underlying error before flagging the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub status: FetchStatus,

    /// Append-only across successive page fetches; insertion order is fetch
    /// order. Refetching a page appends duplicates (no dedup key).
    pub characters: Vec<Character>,

    /// Next page cursor to request.
    pub page: u32,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            characters: Vec::new(),
            page: 1,
        }
    }
}
